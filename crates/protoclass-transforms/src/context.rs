//! Shared state threaded through one conversion run.

use crate::diagnostics::{ConversionDiagnostic, DiagnosticReporter};
use crate::options::ConversionOptions;
use protoclass_ast::NodeArena;
use serde::Serialize;

/// Counters reported back to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    /// Number of "program changed" notifications.
    pub code_changes: u32,
    pub classes_promoted: u32,
    pub members_merged: u32,
    pub classes_registered: u32,
}

impl ConversionStats {
    pub fn absorb(&mut self, other: ConversionStats) {
        self.code_changes += other.code_changes;
        self.classes_promoted += other.classes_promoted;
        self.members_merged += other.members_merged;
        self.classes_registered += other.classes_registered;
    }
}

/// Mutable borrow of the tree plus everything a rewrite reports into.
pub struct ConversionContext<'a> {
    pub arena: &'a mut NodeArena,
    pub options: &'a ConversionOptions,
    pub reporter: DiagnosticReporter,
    pub stats: ConversionStats,
}

impl<'a> ConversionContext<'a> {
    pub fn new(arena: &'a mut NodeArena, options: &'a ConversionOptions) -> Self {
        Self {
            arena,
            options,
            reporter: DiagnosticReporter::new(),
            stats: ConversionStats::default(),
        }
    }

    #[inline]
    pub fn report_code_change(&mut self) {
        self.stats.code_changes += 1;
    }

    #[must_use]
    pub fn finish(self) -> ConversionResult {
        ConversionResult {
            diagnostics: self.reporter.into_diagnostics(),
            stats: self.stats,
        }
    }
}

/// Outcome of a successful run: diagnostics in document order plus counters.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversionResult {
    pub diagnostics: Vec<ConversionDiagnostic>,
    pub stats: ConversionStats,
}

impl ConversionResult {
    /// `true` if the tree was modified.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.stats.code_changes > 0
    }

    pub fn absorb(&mut self, other: ConversionResult) {
        self.diagnostics.extend(other.diagnostics);
        self.stats.absorb(other.stats);
    }
}
