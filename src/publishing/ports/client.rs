//! Client port for repository discovery, locator resolution, and
//! publishing.

use crate::publishing::domain::locator::{self, LocatorError};
use crate::publishing::domain::{Repository, Server, Status, Workspace};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Result type for discovery and locator operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Transport-agnostic contract for talking to a content repository server.
///
/// The contract uses two distinct failure channels. Discovery and locator
/// resolution fail through [`ClientError`]: when a server is unreachable,
/// rejects authentication, or answers with something undecodable, no
/// further operation is meaningful. Publish and unpublish instead report
/// through [`Status`] and never fail through the error channel for
/// expected operational conditions; the caller inspects the severity.
///
/// Implementations hold no shared mutable state between calls and may be
/// invoked from any task. No ordering or atomicity is guaranteed across
/// concurrent operations against the same workspace and path; the server
/// applies last-write-wins. Timeout policy belongs to the implementation's
/// configuration and surfaces as an error status (publish/unpublish) or a
/// [`ClientError`] (discovery).
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Lists the repositories defined on the given server.
    ///
    /// The returned collection carries no duplicate (name, server) pairs
    /// and may be empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the server is unreachable, rejects
    /// authentication, or returns a malformed listing.
    async fn repositories(&self, server: &Server) -> ClientResult<Vec<Repository>>;

    /// Lists the workspaces defined within the given repository.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the server is unreachable, rejects
    /// authentication, or returns a malformed listing.
    async fn workspaces(&self, repository: &Repository) -> ClientResult<Vec<Workspace>>;

    /// Resolves the canonical locator the file occupies (or would occupy)
    /// at the workspace-relative path.
    ///
    /// Pure computation over the inputs and workspace identity; performs
    /// no network I/O, so every implementation resolves identical
    /// locators.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Locator`] when the file is a directory, has
    /// no usable name, or the path cannot be mapped into the workspace.
    fn resource_url(&self, file: &Path, path: &str, workspace: &Workspace) -> ClientResult<Url> {
        Ok(locator::resource_url(file, path, workspace)?)
    }

    /// Uploads the file's contents to the workspace-relative path,
    /// creating or overwriting the target resource (last-write-wins).
    ///
    /// Never fails through the error channel for expected conditions:
    /// transport failures, server rejections, and unreadable local files
    /// come back as error statuses carrying the cause.
    async fn publish(&self, workspace: &Workspace, path: &str, file: &Path) -> Status;

    /// Deletes the resource at the workspace-relative path corresponding
    /// to the file.
    ///
    /// An absent resource is reported as an informational status, not a
    /// failure; any other problem comes back as an error status carrying
    /// the cause.
    async fn unpublish(&self, workspace: &Workspace, path: &str, file: &Path) -> Status;
}

/// Errors returned by repository client implementations for operations
/// that could not be meaningfully evaluated.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// A canonical locator could not be formed.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// The server rejected the supplied credentials.
    #[error("authentication with '{0}' failed")]
    Unauthorized(Url),

    /// The server answered with an HTTP status outside the operation
    /// contract.
    #[error("request to '{url}' returned unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// Requested URL.
        url: Url,
        /// HTTP status code received.
        status: u16,
    },

    /// The response body could not be decoded into the expected payload.
    #[error("response from '{url}' could not be decoded: {reason}")]
    MalformedResponse {
        /// Requested URL.
        url: Url,
        /// Decoder rejection.
        reason: String,
    },

    /// The request never completed at the transport level.
    #[error("request to '{url}' failed")]
    Transport {
        /// Requested URL.
        url: Url,
        /// Transport-level failure.
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// A local file could not be read.
    #[error("local file '{path}' could not be read")]
    LocalFile {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Filesystem failure.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The server is not known to this client.
    #[error("server '{0}' is not known to this client")]
    UnknownServer(Url),

    /// The repository is not known on its server.
    #[error("repository '{repository}' is not known on server '{url}'")]
    UnknownRepository {
        /// Repository name.
        repository: String,
        /// Server URL.
        url: Url,
    },

    /// The underlying transport client could not be constructed.
    #[error("transport client construction failed")]
    Configuration(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl ClientError {
    /// Wraps a transport-level failure for the given URL.
    pub fn transport(url: Url, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport {
            url,
            source: Arc::new(source),
        }
    }

    /// Wraps a filesystem failure for the given local file.
    pub fn local_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LocalFile {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Wraps a decoder rejection for the given URL.
    pub fn malformed_response(url: Url, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            url,
            reason: reason.into(),
        }
    }

    /// Wraps a construction failure of the underlying transport client.
    pub fn configuration(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Configuration(Arc::new(source))
    }
}
