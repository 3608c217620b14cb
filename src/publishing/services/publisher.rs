//! Batch publish orchestration over a repository client.

use crate::publishing::domain::{Severity, Status, Workspace};
use crate::publishing::ports::RepositoryClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one file within a batch operation.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    file: PathBuf,
    status: Status,
}

impl FileOutcome {
    /// Returns the local file this outcome belongs to.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Returns the status the operation reported for this file.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }
}

/// Aggregated outcome of a batch publish or unpublish.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    outcomes: Vec<FileOutcome>,
}

impl BatchOutcome {
    /// Returns the per-file outcomes in input order.
    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Returns the most severe status severity in the batch.
    ///
    /// An empty batch aggregates to [`Severity::Ok`].
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.outcomes
            .iter()
            .map(|outcome| outcome.status.severity())
            .max()
            .unwrap_or(Severity::Ok)
    }

    /// Returns whether no file in the batch failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.worst_severity() < Severity::Error
    }

    /// Returns the number of files in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether the batch contains no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Publishes and unpublishes batches of local files through a client.
///
/// Each file is processed independently: a non-OK status for one file
/// never aborts the remainder of the batch. Callers inspect the
/// aggregated [`BatchOutcome`] for per-file statuses and the worst
/// severity.
#[derive(Clone)]
pub struct Publisher<C>
where
    C: RepositoryClient,
{
    client: Arc<C>,
}

impl<C> Publisher<C>
where
    C: RepositoryClient,
{
    /// Creates a publisher over the given client.
    #[must_use]
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Publishes each file to the workspace-relative path.
    pub async fn publish_files(
        &self,
        workspace: &Workspace,
        path: &str,
        files: &[PathBuf],
    ) -> BatchOutcome {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            info!(file = %file.display(), path, workspace = %workspace, "publishing file");
            let status = self.client.publish(workspace, path, file).await;
            if !status.is_ok() {
                warn!(file = %file.display(), status = %status, "publish reported a non-OK status");
            }
            outcomes.push(FileOutcome {
                file: file.clone(),
                status,
            });
        }

        BatchOutcome { outcomes }
    }

    /// Unpublishes each file from the workspace-relative path.
    pub async fn unpublish_files(
        &self,
        workspace: &Workspace,
        path: &str,
        files: &[PathBuf],
    ) -> BatchOutcome {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            info!(file = %file.display(), path, workspace = %workspace, "unpublishing file");
            let status = self.client.unpublish(workspace, path, file).await;
            if !status.is_ok() {
                warn!(file = %file.display(), status = %status, "unpublish reported a non-OK status");
            }
            outcomes.push(FileOutcome {
                file: file.clone(),
                status,
            });
        }

        BatchOutcome { outcomes }
    }
}
