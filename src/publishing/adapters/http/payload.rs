//! Wire payloads exchanged with the repository server.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Repository listing returned by the repositories endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RepositoriesResponse {
    pub(crate) repositories: Vec<NamedEntry>,
}

/// Workspace listing returned by the workspaces endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WorkspacesResponse {
    pub(crate) workspaces: Vec<NamedEntry>,
}

/// Name-bearing entry within a listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NamedEntry {
    pub(crate) name: String,
}

/// Content envelope shipped when publishing a resource.
///
/// Resource bytes travel base64-encoded inside a JSON envelope so binary
/// content survives the text transport unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ResourcePayload {
    pub(crate) data: String,
}

impl ResourcePayload {
    /// Encodes raw resource bytes into the envelope.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: STANDARD.encode(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_encodes_bytes_as_base64() {
        let payload = ResourcePayload::from_bytes(b"hello repository");

        assert_eq!(payload.data, "aGVsbG8gcmVwb3NpdG9yeQ==");
    }

    #[test]
    fn listings_deserialize_named_entries() {
        let listing: RepositoriesResponse =
            serde_json::from_str(r#"{"repositories": [{"name": "prod"}, {"name": "staging"}]}"#)
                .expect("listing should deserialize");

        let names: Vec<&str> = listing
            .repositories
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["prod", "staging"]);
    }
}
