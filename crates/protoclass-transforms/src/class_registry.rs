//! Per-file map from qualified class name to the class node that defines it.
//!
//! The registry only holds indices of nodes living in the arena; it never
//! owns nodes. A fresh registry is created for every script.

use crate::diagnostics::{ConversionDiagnosticKind, DiagnosticReporter};
use indexmap::IndexMap;
use protoclass_ast::{NodeArena, NodeIndex};
use rustc_hash::FxBuildHasher;

#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<String, NodeIndex, FxBuildHasher>,
}

impl ClassRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.classes.clear();
    }

    /// Register `node` as the definition of `name`.
    ///
    /// The first definition wins: a second registration reports
    /// `ClassRedefined` against `node` and leaves the entry untouched.
    /// Returns whether the entry was inserted.
    pub fn register(
        &mut self,
        arena: &NodeArena,
        name: &str,
        node: NodeIndex,
        reporter: &mut DiagnosticReporter,
    ) -> bool {
        if !self.check_available(arena, name, node, reporter) {
            return false;
        }
        tracing::trace!(class = name, node = %node, "registered class");
        self.classes.insert(name.to_string(), node);
        true
    }

    /// Report `ClassRedefined` against `node` if `name` is taken.
    ///
    /// Used before a rewrite so a rejected definition is never mutated.
    pub fn check_available(
        &self,
        arena: &NodeArena,
        name: &str,
        node: NodeIndex,
        reporter: &mut DiagnosticReporter,
    ) -> bool {
        match self.classes.get(name) {
            Some(&existing) => {
                tracing::trace!(
                    class = name,
                    existing = %existing,
                    rejected = %node,
                    "class redefined"
                );
                reporter.report(arena, ConversionDiagnosticKind::ClassRedefined, node, name);
                false
            }
            None => true,
        }
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<NodeIndex> {
        self.classes.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeIndex)> {
        self.classes.iter().map(|(name, &node)| (name.as_str(), node))
    }
}

#[cfg(test)]
#[path = "../tests/class_registry.rs"]
mod tests;
