//! The variant generation engine and its result shape.

pub mod engine;
pub mod result;
