//! NodeArena creation methods (add_* methods).
//!
//! Nodes are built bottom-up: children are created first and handed to the
//! parent constructor, which links them. A child passed to an `add_*` method
//! must be freshly created (unparented).

use crate::base::{NodeIndex, NodeList};
use crate::jsdoc::{JsDocIndex, JsDocInfo};
use crate::node::{IdentifierData, Node, NodeArena, NodeFlags, SourceFileData};
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    /// Link freshly created children under `parent`.
    fn link_children(&mut self, parent: NodeIndex, children: &[NodeIndex]) {
        for &child in children {
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                debug_assert!(
                    node.parent.is_none(),
                    "add_* received an attached child {child}"
                );
                node.parent = parent;
            }
        }
        if let Some(node) = self.nodes.get_mut(parent.0 as usize) {
            node.children = NodeList::from_nodes(children.to_vec());
        }
    }

    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    fn add_with_children(&mut self, kind: SyntaxKind, children: &[NodeIndex]) -> NodeIndex {
        let idx = self.push_node(Node::new(kind));
        self.link_children(idx, children);
        idx
    }

    fn add_with_text(
        &mut self,
        kind: SyntaxKind,
        text: &str,
        children: &[NodeIndex],
    ) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(IdentifierData {
            escaped_text: text.to_string(),
        });
        let mut node = Node::new(kind);
        node.data_index = data_index;
        let idx = self.push_node(node);
        self.link_children(idx, children);
        idx
    }

    // ============================================================================
    // Metadata and Spans
    // ============================================================================

    /// Store documentation metadata and return its pool index.
    pub fn add_jsdoc(&mut self, info: JsDocInfo) -> JsDocIndex {
        let index = self.jsdocs.len() as u32;
        self.jsdocs.push(info);
        JsDocIndex(index)
    }

    /// Attach (or share) documentation metadata on a node.
    pub fn set_jsdoc(&mut self, node: NodeIndex, jsdoc: Option<JsDocIndex>) {
        if let Some(n) = self.get_mut(node) {
            n.jsdoc = jsdoc;
        }
    }

    /// Store metadata and attach it to `node` in one step.
    pub fn attach_jsdoc(&mut self, node: NodeIndex, info: JsDocInfo) -> JsDocIndex {
        let index = self.add_jsdoc(info);
        self.set_jsdoc(node, Some(index));
        index
    }

    pub fn set_span(&mut self, node: NodeIndex, pos: u32, end: u32) {
        if let Some(n) = self.get_mut(node) {
            n.pos = pos;
            n.end = end;
        }
    }

    /// Copy the source span of `from` onto `to`.
    pub fn copy_span(&mut self, from: NodeIndex, to: NodeIndex) {
        if let Some((pos, end)) = self.get(from).map(|n| (n.pos, n.end)) {
            self.set_span(to, pos, end);
        }
    }

    pub fn add_flags(&mut self, node: NodeIndex, flags: NodeFlags) {
        if let Some(n) = self.get_mut(node) {
            n.flags |= flags;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    pub fn add_root(&mut self, scripts: Vec<NodeIndex>) -> NodeIndex {
        self.add_with_children(SyntaxKind::Root, &scripts)
    }

    pub fn add_script(&mut self, file_name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
        let data_index = self.source_files.len() as u32;
        self.source_files.push(SourceFileData {
            file_name: file_name.to_string(),
        });
        let mut node = Node::new(SyntaxKind::Script);
        node.data_index = data_index;
        let idx = self.push_node(node);
        self.link_children(idx, &statements);
        idx
    }

    pub fn add_empty(&mut self) -> NodeIndex {
        self.add_with_children(SyntaxKind::Empty, &[])
    }

    pub fn add_identifier(&mut self, text: &str) -> NodeIndex {
        self.add_with_text(SyntaxKind::Identifier, text, &[])
    }

    pub fn add_string_literal(&mut self, text: &str) -> NodeIndex {
        self.add_with_text(SyntaxKind::StringLiteral, text, &[])
    }

    pub fn add_numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.add_with_text(SyntaxKind::NumericLiteral, text, &[])
    }

    pub fn add_this(&mut self) -> NodeIndex {
        self.add_with_children(SyntaxKind::ThisKeyword, &[])
    }

    /// `object.name`
    pub fn add_property_access(&mut self, object: NodeIndex, name: &str) -> NodeIndex {
        let name = self.add_identifier(name);
        self.add_with_children(SyntaxKind::PropertyAccess, &[object, name])
    }

    /// `target = value`
    pub fn add_assignment(&mut self, target: NodeIndex, value: NodeIndex) -> NodeIndex {
        self.add_with_children(SyntaxKind::Assignment, &[target, value])
    }

    pub fn add_call(&mut self, callee: NodeIndex, args: Vec<NodeIndex>) -> NodeIndex {
        let mut children = Vec::with_capacity(args.len() + 1);
        children.push(callee);
        children.extend(args);
        self.add_with_children(SyntaxKind::Call, &children)
    }

    /// `function name(params) body`; pass an `Empty` node as `name` for
    /// anonymous functions.
    pub fn add_function(
        &mut self,
        name: NodeIndex,
        params: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.add_with_children(SyntaxKind::Function, &[name, params, body])
    }

    pub fn add_parameter_list(&mut self, params: Vec<NodeIndex>) -> NodeIndex {
        self.add_with_children(SyntaxKind::ParameterList, &params)
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add_with_children(SyntaxKind::Block, &statements)
    }

    pub fn add_return(&mut self, expr: Option<NodeIndex>) -> NodeIndex {
        match expr {
            Some(expr) => self.add_with_children(SyntaxKind::Return, &[expr]),
            None => self.add_with_children(SyntaxKind::Return, &[]),
        }
    }

    pub fn add_expression_statement(&mut self, expr: NodeIndex) -> NodeIndex {
        self.add_with_children(SyntaxKind::ExpressionStatement, &[expr])
    }

    pub fn add_variable_statement(&mut self, declarations: Vec<NodeIndex>) -> NodeIndex {
        self.add_with_children(SyntaxKind::VariableStatement, &declarations)
    }

    pub fn add_variable_declaration(
        &mut self,
        name: &str,
        initializer: Option<NodeIndex>,
    ) -> NodeIndex {
        let name = self.add_identifier(name);
        match initializer {
            Some(init) => self.add_with_children(SyntaxKind::VariableDeclaration, &[name, init]),
            None => self.add_with_children(SyntaxKind::VariableDeclaration, &[name]),
        }
    }

    pub fn add_object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add_with_children(SyntaxKind::ObjectLiteral, &properties)
    }

    /// `key: value` inside an object literal.
    pub fn add_property_assignment(&mut self, key: &str, value: NodeIndex) -> NodeIndex {
        self.add_with_text(SyntaxKind::PropertyAssignment, key, &[value])
    }

    pub fn add_class(
        &mut self,
        name: NodeIndex,
        superclass: NodeIndex,
        members: NodeIndex,
    ) -> NodeIndex {
        self.add_with_children(SyntaxKind::Class, &[name, superclass, members])
    }

    pub fn add_class_members(&mut self, members: Vec<NodeIndex>) -> NodeIndex {
        self.add_with_children(SyntaxKind::ClassMembers, &members)
    }

    /// `[static] name() {...}` wrapping `function`.
    pub fn add_member_function(
        &mut self,
        name: &str,
        is_static: bool,
        function: NodeIndex,
    ) -> NodeIndex {
        let idx = self.add_with_text(SyntaxKind::MemberFunction, name, &[function]);
        if is_static {
            self.add_flags(idx, NodeFlags::STATIC);
        }
        idx
    }
}
