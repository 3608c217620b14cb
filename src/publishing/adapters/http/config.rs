//! Connection settings for the HTTP repository client.

use std::time::Duration;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings applied to the underlying HTTP client.
///
/// Timeout policy lives here; an elapsed timeout surfaces to callers as
/// an error status (publish/unpublish) or a transport error (discovery).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    connect_timeout: Duration,
    request_timeout: Duration,
    user_agent: String,
}

impl HttpClientConfig {
    /// Creates the default connection settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout for establishing a connection.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the timeout covering a whole request round trip.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the user agent presented to the server.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the connection-establishment timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the request round-trip timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the user agent presented to the server.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: concat!("palladio/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
