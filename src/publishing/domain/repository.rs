//! Repository descriptor scoped to one server.

use super::{DomainError, Server};
use crate::publishing::validation;
use std::fmt;

/// Descriptor for a named repository hosted on a server.
///
/// A repository is an immutable value: the name scopes workspace discovery
/// and locator computation, and the server back-reference identifies where
/// the repository lives. Two repositories are equal when name and server
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    name: String,
    server: Server,
}

impl Repository {
    /// Creates a validated repository descriptor.
    ///
    /// The name is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRepository`] when the name is empty
    /// after trimming.
    pub fn new(name: impl AsRef<str>, server: Server) -> Result<Self, DomainError> {
        let status = validation::validate_repository_name(name.as_ref());
        if status.is_error() {
            return Err(DomainError::InvalidRepository(status));
        }

        Ok(Self {
            name: name.as_ref().trim().to_owned(),
            server,
        })
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the server hosting this repository.
    #[must_use]
    pub const fn server(&self) -> &Server {
        &self.server
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "repository '{}' on {}", self.name, self.server)
    }
}
