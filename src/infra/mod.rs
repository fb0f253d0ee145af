//! Infrastructure adapters backing the core abstractions.

pub mod queue;
pub use queue::InMemoryQueue;
