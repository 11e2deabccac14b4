use crate::base::NodeIndex;
use crate::syntax_kind::SyntaxKind;
use thiserror::Error;

/// Structural errors raised by arena access and mutation.
///
/// These indicate a malformed tree or a misuse of the mutation API, never a
/// problem in the user's source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("node index {0} is out of range")]
    InvalidIndex(NodeIndex),

    #[error("node {child} is already attached to {parent}; detach it first")]
    AlreadyAttached { child: NodeIndex, parent: NodeIndex },

    #[error("node {0} has no parent")]
    NoParent(NodeIndex),

    #[error("node {child} is not a child of {parent}")]
    NotAChild { child: NodeIndex, parent: NodeIndex },

    #[error("node {node} is its own ancestor")]
    Cycle { node: NodeIndex },

    #[error("node {child} is listed more than once under {parent}")]
    DuplicateChild { child: NodeIndex, parent: NodeIndex },

    #[error("expected {expected:?} at {node}, found {found:?}")]
    UnexpectedKind {
        node: NodeIndex,
        expected: SyntaxKind,
        found: SyntaxKind,
    },

    #[error("node {node} of kind {kind:?} has a dangling data index {data_index}")]
    DanglingData {
        node: NodeIndex,
        kind: SyntaxKind,
        data_index: u32,
    },

    #[error("malformed AST document: {0}")]
    Json(String),
}
