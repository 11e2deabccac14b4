//! Node header and arena storage.
//!
//! # Architecture
//!
//! Every node is a small header (`Node`) stored in `NodeArena::nodes` and
//! addressed by [`NodeIndex`]. Variable-size payloads live in typed pools:
//!
//! - `identifiers`: text for identifiers, literals, property keys and member names
//! - `source_files`: file names for `Script` nodes
//! - `jsdocs`: documentation metadata, shared by index
//!
//! Parent and child edges are explicit. Detaching a node removes one edge
//! and clears its parent, so a node is never reachable from two places.

use crate::base::{NodeIndex, NodeList};
use crate::jsdoc::{JsDocIndex, JsDocInfo};
use crate::syntax_kind::SyntaxKind;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct NodeFlags: u16 {
        /// `static` member function.
        const STATIC = 1 << 0;
        /// Created by a transform rather than read from source.
        const SYNTHESIZED = 1 << 1;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    #[serde(default)]
    pub flags: NodeFlags,
    /// Start position in source (character index)
    #[serde(default)]
    pub pos: u32,
    /// End position in source (character index)
    #[serde(default)]
    pub end: u32,
    /// Index into the kind's data pool (`u32::MAX` = no data)
    #[serde(default = "no_data")]
    pub data_index: u32,
    #[serde(default)]
    pub jsdoc: Option<JsDocIndex>,
    #[serde(default)]
    pub parent: NodeIndex,
    #[serde(default)]
    pub children: NodeList,
}

const fn no_data() -> u32 {
    Node::NO_DATA
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    #[must_use]
    pub fn new(kind: SyntaxKind) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos: 0,
            end: 0,
            data_index: Self::NO_DATA,
            jsdoc: None,
            parent: NodeIndex::NONE,
            children: NodeList::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags.contains(NodeFlags::STATIC)
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }
}

/// Data for nodes with text (identifiers, literals, keys, member names)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for `Script` nodes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFileData {
    pub file_name: String,
}

/// Arena-based storage for AST nodes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub identifiers: Vec<IdentifierData>,
    #[serde(default)]
    pub source_files: Vec<SourceFileData>,
    #[serde(default)]
    pub jsdocs: Vec<JsDocInfo>,
}

/// A serialized tree: the arena plus its root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AstDocument {
    pub root: NodeIndex,
    pub arena: NodeArena,
}
