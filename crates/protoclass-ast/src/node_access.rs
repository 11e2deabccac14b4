//! NodeArena access methods.
//!
//! All accessors are total: an out-of-range or `NONE` index yields `None`
//! (or an empty slice) instead of panicking.

use crate::base::NodeIndex;
use crate::jsdoc::{JsDocIndex, JsDocInfo};
use crate::node::{Node, NodeArena};
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(index) == Some(kind)
    }

    /// Parent of a node, or `NONE` for roots and detached nodes.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.parent)
    }

    #[inline]
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.get(index).map_or(&[], |n| n.children.nodes.as_slice())
    }

    #[inline]
    pub fn child(&self, index: NodeIndex, position: usize) -> NodeIndex {
        self.children(index)
            .get(position)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    #[inline]
    pub fn first_child(&self, index: NodeIndex) -> NodeIndex {
        self.child(index, 0)
    }

    #[inline]
    pub fn second_child(&self, index: NodeIndex) -> NodeIndex {
        self.child(index, 1)
    }

    #[inline]
    pub fn last_child(&self, index: NodeIndex) -> NodeIndex {
        self.children(index)
            .last()
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Position of `index` among its parent's children.
    pub fn index_in_parent(&self, index: NodeIndex) -> Option<usize> {
        let parent = self.parent(index);
        self.get(parent)?.children.position(index)
    }

    /// `true` if `ancestor` is `index` itself or lies on its parent chain.
    pub fn is_within(&self, index: NodeIndex, ancestor: NodeIndex) -> bool {
        let mut current = index;
        while current.is_some() {
            if current == ancestor {
                return true;
            }
            current = self.parent(current);
        }
        false
    }

    /// Text of an identifier, literal, property key or member name.
    pub fn node_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        if !node.kind.has_text() || !node.has_data() {
            return None;
        }
        self.identifiers
            .get(node.data_index as usize)
            .map(|d| d.escaped_text.as_str())
    }

    /// Text of an `Identifier` node; `None` for every other kind.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        if self.is_kind(index, SyntaxKind::Identifier) {
            self.node_text(index)
        } else {
            None
        }
    }

    /// File name of a `Script` node.
    pub fn source_file_name(&self, script: NodeIndex) -> Option<&str> {
        let node = self.get(script)?;
        if node.kind != SyntaxKind::Script || !node.has_data() {
            return None;
        }
        self.source_files
            .get(node.data_index as usize)
            .map(|d| d.file_name.as_str())
    }

    /// Nearest `Script` ancestor (or the node itself).
    pub fn enclosing_script(&self, index: NodeIndex) -> NodeIndex {
        let mut current = index;
        while let Some(node) = self.get(current) {
            if node.kind == SyntaxKind::Script {
                return current;
            }
            current = node.parent;
        }
        NodeIndex::NONE
    }

    #[inline]
    pub fn jsdoc_index(&self, index: NodeIndex) -> Option<JsDocIndex> {
        self.get(index).and_then(|n| n.jsdoc)
    }

    pub fn jsdoc(&self, index: NodeIndex) -> Option<&JsDocInfo> {
        let jsdoc = self.jsdoc_index(index)?;
        self.jsdocs.get(jsdoc.0 as usize)
    }

    pub fn get_jsdoc(&self, jsdoc: JsDocIndex) -> Option<&JsDocInfo> {
        self.jsdocs.get(jsdoc.0 as usize)
    }

    #[inline]
    pub fn is_static_member(&self, index: NodeIndex) -> bool {
        self.get(index)
            .is_some_and(|n| n.kind == SyntaxKind::MemberFunction && n.is_static())
    }

    // ============================================================================
    // Shape helpers
    // ============================================================================

    /// Function parameter list, if `index` is a function.
    pub fn function_parameters(&self, index: NodeIndex) -> NodeIndex {
        if self.is_kind(index, SyntaxKind::Function) {
            self.second_child(index)
        } else {
            NodeIndex::NONE
        }
    }

    /// Function body block, if `index` is a function.
    pub fn function_body(&self, index: NodeIndex) -> NodeIndex {
        if self.is_kind(index, SyntaxKind::Function) {
            self.child(index, 2)
        } else {
            NodeIndex::NONE
        }
    }

    /// Member list of a class.
    pub fn class_members(&self, class: NodeIndex) -> NodeIndex {
        if self.is_kind(class, SyntaxKind::Class) {
            self.last_child(class)
        } else {
            NodeIndex::NONE
        }
    }

    /// Superclass expression of a class, `NONE` when absent.
    pub fn class_superclass(&self, class: NodeIndex) -> NodeIndex {
        if !self.is_kind(class, SyntaxKind::Class) {
            return NodeIndex::NONE;
        }
        let superclass = self.second_child(class);
        if self.is_kind(superclass, SyntaxKind::Empty) {
            NodeIndex::NONE
        } else {
            superclass
        }
    }

    /// Names of a class's members, in order.
    pub fn member_names(&self, class: NodeIndex) -> Vec<&str> {
        self.children(self.class_members(class))
            .iter()
            .filter_map(|&m| self.node_text(m))
            .collect()
    }
}
