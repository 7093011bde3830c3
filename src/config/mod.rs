//! Configuration: variant axes, runtime settings, and env readers.

pub mod env;
pub mod pipeline;
pub mod variants;
