//! Storage capability: the backend seam and bundled implementations.

pub mod backend;
pub mod local;
pub mod memory;
