//! Centralized limits and thresholds.

/// Pre-allocation hint for the traversal work stack.
pub const TRAVERSAL_STACK_PREALLOC: usize = 64;
