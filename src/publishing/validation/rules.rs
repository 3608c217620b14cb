//! Individual validation rule implementations.
//!
//! Each rule is a pure function over candidate field values that reports
//! its outcome as a [`Status`]. Rules are deterministic and are invoked at
//! entity-construction time.

use crate::publishing::domain::Status;
use url::Url;

/// Validates the field combination for a server descriptor.
///
/// The URL must be non-empty after trimming, parse as a URL, use the http
/// or https scheme, and name a host. A non-empty password requires a
/// non-empty user. Any violation yields an error status; otherwise the
/// result is OK.
#[must_use]
pub fn validate_server(url: &str, user: Option<&str>, password: Option<&str>) -> Status {
    match parse_server_url(url) {
        Ok(_) => validate_credentials(user, password),
        Err(status) => status,
    }
}

/// Validates a repository name.
///
/// The name must be non-empty after trimming.
#[must_use]
pub fn validate_repository_name(name: &str) -> Status {
    if name.trim().is_empty() {
        Status::error("repository name must not be empty")
    } else {
        Status::ok()
    }
}

/// Validates a workspace name.
///
/// The name must be non-empty after trimming.
#[must_use]
pub fn validate_workspace_name(name: &str) -> Status {
    if name.trim().is_empty() {
        Status::error("workspace name must not be empty")
    } else {
        Status::ok()
    }
}

/// Parses a candidate server URL, reporting rejections as a [`Status`].
pub(crate) fn parse_server_url(url: &str) -> Result<Url, Status> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(Status::error("server URL must not be empty"));
    }

    let parsed = Url::parse(trimmed).map_err(|err| {
        Status::error_with_cause(format!("server URL '{trimmed}' is not a well-formed URL"), err)
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Status::error(format!(
            "server URL '{trimmed}' must use the http or https scheme"
        )));
    }

    if parsed.host_str().is_none() {
        return Err(Status::error(format!(
            "server URL '{trimmed}' must name a host"
        )));
    }

    Ok(parsed)
}

fn validate_credentials(user: Option<&str>, password: Option<&str>) -> Status {
    let has_user = user.is_some_and(|value| !value.trim().is_empty());
    let has_password = password.is_some_and(|value| !value.is_empty());

    if has_password && !has_user {
        return Status::error("a server password without a user name is meaningless");
    }

    Status::ok()
}
