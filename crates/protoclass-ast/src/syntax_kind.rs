//! Node kinds.
//!
//! The set is closed: every consumer matches exhaustively, so adding a kind
//! forces each dispatch site to decide what to do with it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    /// Program root; children are `Script`s.
    Root,
    /// One compilation unit. Carries the file name.
    Script,
    /// Placeholder for an absent optional child (anonymous name, no superclass).
    Empty,
    Identifier,
    StringLiteral,
    NumericLiteral,
    ThisKeyword,
    /// `[object, Identifier]`
    PropertyAccess,
    /// `[target, value]`
    Assignment,
    /// `[callee, args...]`
    Call,
    /// `[name | Empty, ParameterList, Block]`
    Function,
    ParameterList,
    Block,
    /// `[expr]` or no children.
    Return,
    /// `[expr]`
    ExpressionStatement,
    /// `[VariableDeclaration...]`
    VariableStatement,
    /// `[Identifier, initializer?]`
    VariableDeclaration,
    ObjectLiteral,
    /// `[value]`; the key is the node's text.
    PropertyAssignment,
    /// `[name | Empty, superclass | Empty, ClassMembers]`
    Class,
    ClassMembers,
    /// `[Function]`; name is the node's text, static-ness a flag.
    MemberFunction,
}

impl SyntaxKind {
    /// Kinds whose node text lives in the identifier pool.
    #[must_use]
    pub const fn has_text(self) -> bool {
        matches!(
            self,
            Self::Identifier
                | Self::StringLiteral
                | Self::NumericLiteral
                | Self::PropertyAssignment
                | Self::MemberFunction
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "Root",
            Self::Script => "Script",
            Self::Empty => "Empty",
            Self::Identifier => "Identifier",
            Self::StringLiteral => "StringLiteral",
            Self::NumericLiteral => "NumericLiteral",
            Self::ThisKeyword => "ThisKeyword",
            Self::PropertyAccess => "PropertyAccess",
            Self::Assignment => "Assignment",
            Self::Call => "Call",
            Self::Function => "Function",
            Self::ParameterList => "ParameterList",
            Self::Block => "Block",
            Self::Return => "Return",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::VariableStatement => "VariableStatement",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::ObjectLiteral => "ObjectLiteral",
            Self::PropertyAssignment => "PropertyAssignment",
            Self::Class => "Class",
            Self::ClassMembers => "ClassMembers",
            Self::MemberFunction => "MemberFunction",
        }
    }
}
