//! Workspace descriptor scoped to one repository.

use super::{DomainError, Repository, Server};
use crate::publishing::validation;
use std::fmt;

/// Descriptor for a named workspace within a repository.
///
/// A workspace is an immutable value and the target of publish and
/// unpublish operations. Two workspaces are equal when name and repository
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Workspace {
    name: String,
    repository: Repository,
}

impl Workspace {
    /// Creates a validated workspace descriptor.
    ///
    /// The name is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWorkspace`] when the name is empty
    /// after trimming.
    pub fn new(name: impl AsRef<str>, repository: Repository) -> Result<Self, DomainError> {
        let status = validation::validate_workspace_name(name.as_ref());
        if status.is_error() {
            return Err(DomainError::InvalidWorkspace(status));
        }

        Ok(Self {
            name: name.as_ref().trim().to_owned(),
            repository,
        })
    }

    /// Returns the workspace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the repository containing this workspace.
    #[must_use]
    pub const fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Returns the server hosting this workspace's repository.
    #[must_use]
    pub const fn server(&self) -> &Server {
        self.repository.server()
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "workspace '{}' in {}", self.name, self.repository)
    }
}
