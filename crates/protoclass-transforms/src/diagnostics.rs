//! Recoverable diagnostics raised while converting classes.

use protoclass_ast::{NodeArena, NodeIndex};
use protoclass_common::diagnostics::diagnostic_messages;
use protoclass_common::{Diagnostic, DiagnosticMessage};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ConversionDiagnosticKind {
    /// A qualified class name was defined more than once in one file.
    ClassRedefined,
    /// A prototype assignment names a class that is not registered.
    UnknownClass,
}

impl ConversionDiagnosticKind {
    #[must_use]
    pub const fn message(self) -> &'static DiagnosticMessage {
        match self {
            Self::ClassRedefined => &diagnostic_messages::CLASS_REDEFINED,
            Self::UnknownClass => &diagnostic_messages::UNKNOWN_CLASS,
        }
    }
}

/// A diagnostic plus the node that triggered it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversionDiagnostic {
    pub kind: ConversionDiagnosticKind,
    /// Offending qualified class name.
    pub class_name: String,
    pub node: NodeIndex,
    pub diagnostic: Diagnostic,
}

/// Ordered diagnostic sink. Order of `report` calls is the output order.
#[derive(Debug, Default)]
pub struct DiagnosticReporter {
    diagnostics: Vec<ConversionDiagnostic>,
}

impl DiagnosticReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(
        &mut self,
        arena: &NodeArena,
        kind: ConversionDiagnosticKind,
        node: NodeIndex,
        class_name: &str,
    ) {
        let file = arena
            .source_file_name(arena.enclosing_script(node))
            .unwrap_or_default();
        let (start, length) = arena.get(node).map_or((0, 0), |n| (n.pos, n.width()));
        let diagnostic =
            Diagnostic::from_message(kind.message(), file, start, length, &[class_name]);
        tracing::debug!(
            key = kind.message().key,
            file,
            start,
            "{}",
            diagnostic.message_text
        );
        self.diagnostics.push(ConversionDiagnostic {
            kind,
            class_name: class_name.to_string(),
            node,
            diagnostic,
        });
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ConversionDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ConversionDiagnostic> {
        self.diagnostics
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
