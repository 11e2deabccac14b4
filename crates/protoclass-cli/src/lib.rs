//! Host driver for the protoclass conversion pass.
//!
//! Reads a JSON AST document, converts it, reports diagnostics and writes
//! the converted document back as JSON.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
