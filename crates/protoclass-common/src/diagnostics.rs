//! Diagnostic types and message lookup for the class conversion pass.
//!
//! Diagnostics are data, not errors: the pass records them and keeps going.
//! Templates use `{0}`, `{1}`, ... placeholders filled by [`format_message`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category. Conversion diagnostics are all errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Error,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
        }
    }
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    /// Stable symbolic name, used in logs and JSON output.
    pub key: &'static str,
    pub message: &'static str,
}

/// A reported diagnostic with its rendered message and source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Create a diagnostic from a message definition, filling its template.
    #[must_use]
    pub fn from_message(
        message: &DiagnosticMessage,
        file: impl Into<String>,
        start: u32,
        length: u32,
        args: &[&str],
    ) -> Self {
        Self {
            file: file.into(),
            start,
            length,
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
        }
    }
}

// =============================================================================
// Message Table
// =============================================================================

pub mod diagnostic_codes {
    pub const CLASS_REDEFINED: u32 = 9001;
    pub const UNKNOWN_CLASS: u32 = 9002;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const CLASS_REDEFINED: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::CLASS_REDEFINED,
        category: DiagnosticCategory::Error,
        key: "CLASS_REDEFINED_ERROR",
        message: "The class {0} has been defined multiple times within the same file.",
    };

    pub const UNKNOWN_CLASS: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_CLASS,
        category: DiagnosticCategory::Error,
        key: "UNKNOWN_CLASS_ERROR",
        message: "The class {0} could not be found.",
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::CLASS_REDEFINED,
    diagnostic_messages::UNKNOWN_CLASS,
];

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}
