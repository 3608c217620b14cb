//! HTTP implementation of the repository client port.

use super::config::HttpClientConfig;
use super::payload::{RepositoriesResponse, ResourcePayload, WorkspacesResponse};
use crate::publishing::domain::locator;
use crate::publishing::domain::{Repository, Server, Status, Workspace};
use crate::publishing::ports::{ClientError, ClientResult, RepositoryClient};
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

/// Production repository client speaking HTTP to a repository server.
///
/// Discovery issues GET requests against the canonical listing locators,
/// publishing PUTs a base64 content envelope to the resource locator, and
/// unpublishing DELETEs it. Requests authenticate with HTTP basic
/// credentials taken from the [`Server`] descriptor. The client is cheap
/// to clone and holds no state beyond the connection pool.
#[derive(Debug, Clone)]
pub struct HttpRepositoryClient {
    http: reqwest::Client,
}

impl HttpRepositoryClient {
    /// Creates a client with default connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn new() -> ClientResult<Self> {
        Self::with_config(&HttpClientConfig::default())
    }

    /// Creates a client with the given connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the underlying HTTP
    /// client cannot be constructed.
    pub fn with_config(config: &HttpClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(ClientError::configuration)?;

        Ok(Self { http })
    }

    fn authenticated(request: RequestBuilder, server: &Server) -> RequestBuilder {
        match server.user() {
            Some(user) => request.basic_auth(user, server.password()),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, server: &Server) -> ClientResult<T> {
        debug!(url = %url, "fetching listing");
        let response = Self::authenticated(self.http.get(url.clone()), server)
            .send()
            .await
            .map_err(|err| ClientError::transport(url.clone(), err))?;

        check_status(&url, response.status())?;

        response
            .json::<T>()
            .await
            .map_err(|err| ClientError::malformed_response(url, err.to_string()))
    }

    async fn try_publish(
        &self,
        workspace: &Workspace,
        path: &str,
        file: &Path,
    ) -> ClientResult<Url> {
        let url = locator::resource_url(file, path, workspace)?;
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|err| ClientError::local_file(file, err))?;

        let response = Self::authenticated(self.http.put(url.clone()), workspace.server())
            .json(&ResourcePayload::from_bytes(&bytes))
            .send()
            .await
            .map_err(|err| ClientError::transport(url.clone(), err))?;

        check_status(&url, response.status())?;
        Ok(url)
    }
}

#[async_trait]
impl RepositoryClient for HttpRepositoryClient {
    async fn repositories(&self, server: &Server) -> ClientResult<Vec<Repository>> {
        let url = locator::repositories_url(server)?;
        let listing: RepositoriesResponse = self.fetch(url.clone(), server).await?;

        let names: BTreeSet<String> = listing
            .repositories
            .into_iter()
            .map(|entry| entry.name)
            .collect();

        names
            .into_iter()
            .map(|name| {
                Repository::new(&name, server.clone())
                    .map_err(|err| ClientError::malformed_response(url.clone(), err.to_string()))
            })
            .collect()
    }

    async fn workspaces(&self, repository: &Repository) -> ClientResult<Vec<Workspace>> {
        let url = locator::workspaces_url(repository)?;
        let listing: WorkspacesResponse = self.fetch(url.clone(), repository.server()).await?;

        let names: BTreeSet<String> = listing
            .workspaces
            .into_iter()
            .map(|entry| entry.name)
            .collect();

        names
            .into_iter()
            .map(|name| {
                Workspace::new(&name, repository.clone())
                    .map_err(|err| ClientError::malformed_response(url.clone(), err.to_string()))
            })
            .collect()
    }

    async fn publish(&self, workspace: &Workspace, path: &str, file: &Path) -> Status {
        match self.try_publish(workspace, path, file).await {
            Ok(url) => {
                debug!(url = %url, "published resource");
                Status::ok()
            }
            Err(err) => {
                warn!(path, file = %file.display(), error = %err, "publish failed");
                Status::error_with_cause(publish_failure_message(file, path, workspace), err)
            }
        }
    }

    async fn unpublish(&self, workspace: &Workspace, path: &str, file: &Path) -> Status {
        let url = match locator::resource_url(file, path, workspace) {
            Ok(url) => url,
            Err(err) => {
                return Status::error_with_cause(unpublish_failure_message(file, path, workspace), err);
            }
        };

        let outcome = Self::authenticated(self.http.delete(url.clone()), workspace.server())
            .send()
            .await;

        match outcome {
            Ok(response) if response.status() == StatusCode::NOT_FOUND => {
                debug!(url = %url, "resource absent; nothing to unpublish");
                Status::info(format!(
                    "no resource at '{url}' in {workspace}; nothing to unpublish"
                ))
            }
            Ok(response) => match check_status(&url, response.status()) {
                Ok(()) => Status::ok(),
                Err(err) => {
                    warn!(url = %url, error = %err, "unpublish failed");
                    Status::error_with_cause(unpublish_failure_message(file, path, workspace), err)
                }
            },
            Err(err) => {
                warn!(url = %url, error = %err, "unpublish failed");
                Status::error_with_cause(
                    unpublish_failure_message(file, path, workspace),
                    ClientError::transport(url, err),
                )
            }
        }
    }
}

fn check_status(url: &Url, status: StatusCode) -> ClientResult<()> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Unauthorized(url.clone()));
    }

    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            url: url.clone(),
            status: status.as_u16(),
        });
    }

    Ok(())
}

fn publish_failure_message(file: &Path, path: &str, workspace: &Workspace) -> String {
    format!(
        "publishing '{}' to '{path}' in {workspace} failed",
        file.display()
    )
}

fn unpublish_failure_message(file: &Path, path: &str, workspace: &Workspace) -> String {
    format!(
        "unpublishing '{}' from '{path}' in {workspace} failed",
        file.display()
    )
}
