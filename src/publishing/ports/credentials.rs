//! Credential-persistence port for server passwords.

use crate::publishing::domain::Server;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for credential store operations.
pub type CredentialStoreResult<T> = Result<T, CredentialStoreError>;

/// Boundary for the collaborator that persists server passwords.
///
/// Entries are keyed by the server's key relation (url + user), the same
/// relation [`Server::has_same_key`] exposes, so a logical server keeps
/// one stored password regardless of how its descriptor was constructed.
/// The client core itself never persists anything; it only carries the
/// `persist_password` flag and the password value.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Records the server's password when the server asks for persistence.
    ///
    /// Servers whose `persist_password` flag is unset, or that carry no
    /// password, are not stored; any existing entry for the same key is
    /// removed instead.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the underlying
    /// store fails.
    async fn remember(&self, server: &Server) -> CredentialStoreResult<()>;

    /// Looks up a previously stored password for the server's key.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the underlying
    /// store fails.
    async fn lookup(&self, server: &Server) -> CredentialStoreResult<Option<String>>;

    /// Removes any stored password for the server's key.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Storage`] when the underlying
    /// store fails.
    async fn forget(&self, server: &Server) -> CredentialStoreResult<()>;
}

/// Errors returned by credential store implementations.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    /// Underlying storage failure.
    #[error("credential storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl CredentialStoreError {
    /// Wraps a storage failure.
    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(source))
    }
}
