//! Canonical locator computation for repository content.
//!
//! Locators are pure functions over domain values, so every client
//! implementation resolves identical URLs for the same inputs and no
//! network I/O is ever needed to form one. Percent-encoding of path
//! segments is handled by the `url` crate.

use super::{Repository, Server, Workspace};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

const REPOSITORIES_SEGMENT: &str = "repositories";
const WORKSPACES_SEGMENT: &str = "workspaces";
const ITEMS_SEGMENT: &str = "items";

/// Errors raised while computing a canonical locator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// Directories have no singular resource locator.
    #[error("'{0}' is a directory and has no resource locator")]
    DirectoryResource(PathBuf),

    /// The file path carries no usable final name component.
    #[error("'{0}' has no usable file name")]
    MissingFileName(PathBuf),

    /// The workspace-relative path climbs out of the workspace root.
    #[error("path '{0}' escapes the workspace root")]
    EscapesWorkspaceRoot(String),

    /// The workspace-relative path contains a segment with no canonical
    /// location.
    #[error("path segment '{0}' is not allowed in a workspace path")]
    InvalidSegment(String),

    /// The server URL cannot carry additional path segments.
    #[error("server URL '{0}' cannot address repository content")]
    UnroutableServerUrl(Url),
}

/// Resolves the locator listing the repositories of a server.
///
/// # Errors
///
/// Returns [`LocatorError::UnroutableServerUrl`] when the server URL
/// cannot carry path segments.
pub fn repositories_url(server: &Server) -> Result<Url, LocatorError> {
    extend(server.url(), [REPOSITORIES_SEGMENT])
}

/// Resolves the locator listing the workspaces of a repository.
///
/// # Errors
///
/// Returns [`LocatorError::UnroutableServerUrl`] when the server URL
/// cannot carry path segments.
pub fn workspaces_url(repository: &Repository) -> Result<Url, LocatorError> {
    extend(
        repository.server().url(),
        [REPOSITORIES_SEGMENT, repository.name(), WORKSPACES_SEGMENT],
    )
}

/// Resolves the canonical locator a local file occupies (or would occupy)
/// at the given workspace-relative path.
///
/// The path is split on `/`; empty segments are dropped and `.`/`..`
/// segments are rejected, so a locator can never leave the workspace
/// root. Whether the file denotes a directory is answered by the local
/// filesystem; no network I/O takes place.
///
/// # Errors
///
/// Returns [`LocatorError::DirectoryResource`] for a directory,
/// [`LocatorError::MissingFileName`] when the file path has no UTF-8
/// final name component, [`LocatorError::EscapesWorkspaceRoot`] or
/// [`LocatorError::InvalidSegment`] for rejected path segments, and
/// [`LocatorError::UnroutableServerUrl`] when the server URL cannot carry
/// path segments.
pub fn resource_url(file: &Path, path: &str, workspace: &Workspace) -> Result<Url, LocatorError> {
    if file.is_dir() {
        return Err(LocatorError::DirectoryResource(file.to_path_buf()));
    }

    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LocatorError::MissingFileName(file.to_path_buf()))?;

    let mut segments = vec![
        REPOSITORIES_SEGMENT,
        workspace.repository().name(),
        WORKSPACES_SEGMENT,
        workspace.name(),
        ITEMS_SEGMENT,
    ];

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        match segment {
            ".." => return Err(LocatorError::EscapesWorkspaceRoot(path.to_owned())),
            "." => return Err(LocatorError::InvalidSegment(segment.to_owned())),
            _ => segments.push(segment),
        }
    }

    segments.push(file_name);
    extend(workspace.server().url(), segments)
}

fn extend<'segments>(
    base: &Url,
    segments: impl IntoIterator<Item = &'segments str>,
) -> Result<Url, LocatorError> {
    let mut url = base.clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|()| LocatorError::UnroutableServerUrl(base.clone()))?;
        parts.pop_if_empty();
        parts.extend(segments);
    }
    Ok(url)
}
