//! In-memory repository client double.

use crate::publishing::domain::locator;
use crate::publishing::domain::{Repository, Server, Status, Workspace};
use crate::publishing::ports::{ClientError, ClientResult, RepositoryClient};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use url::Url;

/// Thread-safe in-memory repository client.
///
/// Serves a seeded topology of servers, repositories, and workspaces, and
/// stores published bytes keyed by their canonical resource locator so
/// tests can verify the publish→resolve→fetch round trip. Setting the
/// client offline makes every operation fail the way a dead transport
/// would: discovery through the error channel, publish and unpublish
/// through error statuses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryClient {
    state: Arc<RwLock<InMemoryClientState>>,
}

#[derive(Debug, Default)]
struct InMemoryClientState {
    repositories: HashMap<Server, Vec<Repository>>,
    workspaces: HashMap<Repository, Vec<Workspace>>,
    resources: HashMap<Url, Vec<u8>>,
    offline: bool,
}

impl InMemoryRepositoryClient {
    /// Creates an empty client with no known servers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a server with no repositories.
    pub fn register_server(&self, server: &Server) {
        let mut state = self.write_state();
        state.repositories.entry(server.clone()).or_default();
    }

    /// Registers a repository (and its server) with no workspaces.
    pub fn register_repository(&self, repository: &Repository) {
        let mut state = self.write_state();
        push_unique(
            state.repositories.entry(repository.server().clone()).or_default(),
            repository,
        );
        state.workspaces.entry(repository.clone()).or_default();
    }

    /// Registers a workspace along with its repository and server.
    pub fn register_workspace(&self, workspace: &Workspace) {
        let mut state = self.write_state();
        push_unique(
            state
                .repositories
                .entry(workspace.server().clone())
                .or_default(),
            workspace.repository(),
        );
        push_unique(
            state
                .workspaces
                .entry(workspace.repository().clone())
                .or_default(),
            workspace,
        );
    }

    /// Returns the bytes stored at the given canonical locator.
    #[must_use]
    pub fn resource(&self, url: &Url) -> Option<Vec<u8>> {
        self.read_state().resources.get(url).cloned()
    }

    /// Returns the number of stored resources.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.read_state().resources.len()
    }

    /// Simulates losing or regaining the transport connection.
    pub fn set_offline(&self, offline: bool) {
        self.write_state().offline = offline;
    }

    fn read_state(&self) -> RwLockReadGuard<'_, InMemoryClientState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, InMemoryClientState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RepositoryClient for InMemoryRepositoryClient {
    async fn repositories(&self, server: &Server) -> ClientResult<Vec<Repository>> {
        let state = self.read_state();
        if state.offline {
            return Err(offline_error(server.url().clone()));
        }

        state
            .repositories
            .get(server)
            .cloned()
            .ok_or_else(|| ClientError::UnknownServer(server.url().clone()))
    }

    async fn workspaces(&self, repository: &Repository) -> ClientResult<Vec<Workspace>> {
        let state = self.read_state();
        if state.offline {
            return Err(offline_error(repository.server().url().clone()));
        }

        state
            .workspaces
            .get(repository)
            .cloned()
            .ok_or_else(|| ClientError::UnknownRepository {
                repository: repository.name().to_owned(),
                url: repository.server().url().clone(),
            })
    }

    async fn publish(&self, workspace: &Workspace, path: &str, file: &Path) -> Status {
        if self.read_state().offline {
            return publish_failure(file, path, workspace, offline_error(workspace.server().url().clone()));
        }

        let url = match locator::resource_url(file, path, workspace) {
            Ok(url) => url,
            Err(err) => return publish_failure(file, path, workspace, ClientError::from(err)),
        };

        let bytes = match tokio::fs::read(file).await {
            Ok(bytes) => bytes,
            Err(err) => {
                return publish_failure(file, path, workspace, ClientError::local_file(file, err));
            }
        };

        let mut state = self.write_state();
        let known = state
            .workspaces
            .get(workspace.repository())
            .is_some_and(|workspaces| workspaces.contains(workspace));
        if !known {
            return Status::error(format!("{workspace} is not known to this client"));
        }

        state.resources.insert(url, bytes);
        Status::ok()
    }

    async fn unpublish(&self, workspace: &Workspace, path: &str, file: &Path) -> Status {
        if self.read_state().offline {
            return Status::error_with_cause(
                format!(
                    "unpublishing '{}' from '{path}' in {workspace} failed",
                    file.display()
                ),
                offline_error(workspace.server().url().clone()),
            );
        }

        let url = match locator::resource_url(file, path, workspace) {
            Ok(url) => url,
            Err(err) => {
                return Status::error_with_cause(
                    format!(
                        "unpublishing '{}' from '{path}' in {workspace} failed",
                        file.display()
                    ),
                    ClientError::from(err),
                );
            }
        };

        let mut state = self.write_state();
        state.resources.remove(&url).map_or_else(
            || {
                Status::info(format!(
                    "no resource at '{url}' in {workspace}; nothing to unpublish"
                ))
            },
            |_| Status::ok(),
        )
    }
}

fn push_unique<T: Clone + PartialEq>(items: &mut Vec<T>, item: &T) {
    if !items.contains(item) {
        items.push(item.clone());
    }
}

fn offline_error(url: Url) -> ClientError {
    ClientError::transport(url, io::Error::other("simulated connection failure"))
}

fn publish_failure(file: &Path, path: &str, workspace: &Workspace, err: ClientError) -> Status {
    Status::error_with_cause(
        format!(
            "publishing '{}' to '{path}' in {workspace} failed",
            file.display()
        ),
        err,
    )
}
