//! Arena-backed JavaScript AST for the protoclass conversion pass.
//!
//! This crate provides:
//! - Node handles and child lists (`NodeIndex`, `NodeList`)
//! - The closed set of node kinds (`SyntaxKind`)
//! - Documentation metadata (`JsDocInfo`)
//! - Node creation, access and in-place mutation on `NodeArena`
//! - A one-line debug dump and JSON interchange (`AstDocument`)

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod jsdoc;
pub use jsdoc::{JsDocIndex, JsDocInfo, JsDocParam};

pub mod node;
pub use node::{AstDocument, IdentifierData, Node, NodeArena, NodeFlags, SourceFileData};

pub mod error;
pub use error::AstError;

mod document;
mod dump;
mod node_access;
mod node_arena;
mod node_mutation;
