//! Shared building blocks for the workspace: response types and tracing setup.

pub mod types;
pub mod utils;
