//! Common types and utilities for the protoclass conversion pass.
//!
//! This crate provides foundational types used across all protoclass crates:
//! - Diagnostic records, categories and the message table
//! - Limits and thresholds for tree walks

// Diagnostic records and message templates
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, format_message};

// Centralized limits and thresholds
pub mod limits;
