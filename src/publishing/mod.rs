//! Remote content repository discovery and publishing.
//!
//! This module implements the client side of a content repository exposed
//! over HTTP: discovering repositories and workspaces on a server,
//! resolving canonical resource locators, and publishing or unpublishing
//! local files. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure field validators in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
