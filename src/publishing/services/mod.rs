//! Application services composing the client port.

mod publisher;

pub use publisher::{BatchOutcome, FileOutcome, Publisher};
