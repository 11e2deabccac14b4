use protoclass_ast::{AstError, NodeIndex};
use thiserror::Error;

/// Fatal conversion errors. Any of these aborts the pass.
///
/// User-facing problems (redefined or unknown classes) are diagnostics, not
/// errors; see [`crate::diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A statement classified as a prototype member has no `prototype`
    /// segment in its target.
    #[error("invalid declaration name at {target}: no `prototype` segment in instance member target")]
    MissingPrototypeSegment { target: NodeIndex },

    #[error("function {node} does not have a name, parameter list and body")]
    MalformedFunction { node: NodeIndex },

    #[error(transparent)]
    Ast(#[from] AstError),
}
