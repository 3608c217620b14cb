//! Adapter implementations of the publishing ports.

pub mod http;
pub mod memory;
