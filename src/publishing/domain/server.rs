//! Server descriptor for a host exposing one or more content repositories.

use super::DomainError;
use crate::publishing::validation;
use std::fmt;
use url::Url;

/// Descriptor for a server hosting content repositories.
///
/// A server is an immutable value: the URL identifies the endpoint, the
/// optional user and password authenticate against it, and
/// `persist_password` records whether the password may be handed to a
/// credential-persistence collaborator. Validation happens at
/// construction, so every observable `Server` is well formed.
///
/// Two servers are equal when all four fields match. The weaker
/// [`has_same_key`](Self::has_same_key) relation compares only url and
/// user and recognizes "the same logical server, possibly with different
/// credentials" when merging server lists.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Server {
    url: Url,
    user: Option<String>,
    password: Option<String>,
    persist_password: bool,
}

impl Server {
    /// Creates a validated server descriptor.
    ///
    /// The URL is trimmed before parsing. An empty user is normalized to
    /// `None`, as is an empty password; password content is otherwise
    /// stored exactly as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidServer`] carrying the rejecting
    /// [`Status`](super::Status) when the URL is empty, unparsable,
    /// missing a host, or
    /// not an http(s) endpoint, or when a password is supplied without a
    /// user.
    pub fn new(
        url: impl AsRef<str>,
        user: Option<&str>,
        password: Option<&str>,
        persist_password: bool,
    ) -> Result<Self, DomainError> {
        let status = validation::validate_server(url.as_ref(), user, password);
        if status.is_error() {
            return Err(DomainError::InvalidServer(status));
        }

        // validated above, so parsing cannot be rejected here
        let parsed = validation::parse_server_url(url.as_ref()).map_err(DomainError::InvalidServer)?;

        Ok(Self {
            url: parsed,
            user: user
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned),
            password: password
                .filter(|value| !value.is_empty())
                .map(ToOwned::to_owned),
            persist_password,
        })
    }

    /// Returns the server endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the user name used to authenticate, when one was supplied.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the password used to authenticate, when one was supplied.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns whether the password may be persisted by a credential store.
    #[must_use]
    pub const fn persist_password(&self) -> bool {
        self.persist_password
    }

    /// Returns whether both servers address the same logical server.
    ///
    /// The key relation compares url and user only, independent of the
    /// password and persistence flag.
    #[must_use]
    pub fn has_same_key(&self, other: &Self) -> bool {
        self.url == other.url && self.user == other.user
    }
}

impl fmt::Display for Server {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) => write!(formatter, "{} as user '{user}'", self.url),
            None => write!(formatter, "{} with anonymous access", self.url),
        }
    }
}

impl fmt::Debug for Server {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Server")
            .field("url", &self.url.as_str())
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("persist_password", &self.persist_password)
            .finish()
    }
}
