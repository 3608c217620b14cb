//! Palladio: client library for remote content repository publishing.
//!
//! This crate discovers repositories and workspaces hosted on a remote
//! content repository server, resolves canonical locators for files within
//! a workspace, and transfers files to and from the repository.
//!
//! # Architecture
//!
//! Palladio follows hexagonal architecture principles:
//!
//! - **Domain**: Immutable, validated value descriptors and the
//!   severity-tagged status model, with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the transport and
//!   credential-persistence collaborators
//! - **Adapters**: Concrete implementations of ports (HTTP transport,
//!   in-memory doubles)
//!
//! # Modules
//!
//! - [`publishing`]: Server/repository/workspace model, the client
//!   contract, and its implementations

pub mod publishing;
