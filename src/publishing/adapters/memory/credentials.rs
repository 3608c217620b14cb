//! In-memory credential store double.

use crate::publishing::domain::Server;
use crate::publishing::ports::{CredentialStore, CredentialStoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe in-memory credential store.
///
/// Entries are keyed by the server key relation (url + user), so two
/// descriptors of the same logical server share one stored password.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    entries: Arc<RwLock<HashMap<(String, String), String>>>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn remember(&self, server: &Server) -> CredentialStoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        match server.password().filter(|_| server.persist_password()) {
            Some(password) => {
                entries.insert(key(server), password.to_owned());
            }
            None => {
                entries.remove(&key(server));
            }
        }

        Ok(())
    }

    async fn lookup(&self, server: &Server) -> CredentialStoreResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(&key(server)).cloned())
    }

    async fn forget(&self, server: &Server) -> CredentialStoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(&key(server));
        Ok(())
    }
}

fn key(server: &Server) -> (String, String) {
    (
        server.url().as_str().to_owned(),
        server.user().unwrap_or_default().to_owned(),
    )
}
