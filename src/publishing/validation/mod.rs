//! Pure validators for publishing domain values.
//!
//! Validators never fail and perform no I/O: they report problems as
//! [`Status`](crate::publishing::domain::Status) values. A non-OK status
//! is converted into a construction failure at the entity boundary, so no
//! invalid descriptor is ever observable.

mod rules;

pub use rules::{validate_repository_name, validate_server, validate_workspace_name};

pub(crate) use rules::parse_server_url;
