//! In-place tree edits.
//!
//! Every edit keeps the single-parent invariant: a node has at most one
//! parent, and attaching requires that the node was detached first.

use crate::base::NodeIndex;
use crate::error::AstError;
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    fn require(&self, index: NodeIndex) -> Result<(), AstError> {
        if self.get(index).is_some() {
            Ok(())
        } else {
            Err(AstError::InvalidIndex(index))
        }
    }

    /// Fail unless `index` exists and has kind `expected`.
    pub fn expect_kind(&self, index: NodeIndex, expected: SyntaxKind) -> Result<(), AstError> {
        let node = self.get(index).ok_or(AstError::InvalidIndex(index))?;
        if node.kind == expected {
            Ok(())
        } else {
            Err(AstError::UnexpectedKind {
                node: index,
                expected,
                found: node.kind,
            })
        }
    }

    fn check_attachable(&self, parent: NodeIndex, child: NodeIndex) -> Result<(), AstError> {
        self.require(parent)?;
        self.require(child)?;
        let current = self.parent(child);
        if current.is_some() {
            return Err(AstError::AlreadyAttached {
                child,
                parent: current,
            });
        }
        if self.is_within(parent, child) {
            return Err(AstError::Cycle { node: child });
        }
        Ok(())
    }

    /// Remove `index` from its parent's child list and clear its parent.
    pub fn detach(&mut self, index: NodeIndex) -> Result<(), AstError> {
        self.require(index)?;
        let parent = self.parent(index);
        if parent.is_none() {
            return Err(AstError::NoParent(index));
        }
        let parent_node = self.get_mut(parent).ok_or(AstError::InvalidIndex(parent))?;
        let position = parent_node
            .children
            .position(index)
            .ok_or(AstError::NotAChild {
                child: index,
                parent,
            })?;
        parent_node.children.nodes.remove(position);
        if let Some(node) = self.get_mut(index) {
            node.parent = NodeIndex::NONE;
        }
        Ok(())
    }

    /// Append a detached node to the back of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeIndex, child: NodeIndex) -> Result<(), AstError> {
        self.check_attachable(parent, child)?;
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.nodes.push(child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        Ok(())
    }

    /// Put detached `replacement` where `old` sits under `parent`; `old`
    /// ends up detached.
    pub fn replace_child(
        &mut self,
        parent: NodeIndex,
        old: NodeIndex,
        replacement: NodeIndex,
    ) -> Result<(), AstError> {
        self.require(old)?;
        self.check_attachable(parent, replacement)?;
        let parent_node = self.get_mut(parent).ok_or(AstError::InvalidIndex(parent))?;
        let position = parent_node
            .children
            .position(old)
            .ok_or(AstError::NotAChild { child: old, parent })?;
        parent_node.children.nodes[position] = replacement;
        if let Some(node) = self.get_mut(old) {
            node.parent = NodeIndex::NONE;
        }
        if let Some(node) = self.get_mut(replacement) {
            node.parent = parent;
        }
        Ok(())
    }

    /// Replace `old` in whatever parent currently holds it.
    pub fn replace_with(&mut self, old: NodeIndex, replacement: NodeIndex) -> Result<(), AstError> {
        let parent = self.parent(old);
        if parent.is_none() {
            return Err(AstError::NoParent(old));
        }
        self.replace_child(parent, old, replacement)
    }

    /// Detach every child of `index`, returning them in order.
    pub fn detach_children(&mut self, index: NodeIndex) -> Result<Vec<NodeIndex>, AstError> {
        let node = self.get_mut(index).ok_or(AstError::InvalidIndex(index))?;
        let children = std::mem::take(&mut node.children.nodes);
        for &child in &children {
            if let Some(child_node) = self.get_mut(child) {
                child_node.parent = NodeIndex::NONE;
            }
        }
        Ok(children)
    }

    /// Check that parent and child edges agree, that no node is its own
    /// ancestor, and that data indices resolve.
    ///
    /// Trees read from JSON are validated before any transform touches them.
    pub fn validate(&self) -> Result<(), AstError> {
        let mut listed = vec![false; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            let index = NodeIndex(i as u32);
            for &child in &node.children.nodes {
                let child_node = self.get(child).ok_or(AstError::InvalidIndex(child))?;
                let slot = &mut listed[child.0 as usize];
                if *slot {
                    return Err(AstError::DuplicateChild {
                        child,
                        parent: index,
                    });
                }
                *slot = true;
                if child_node.parent != index {
                    return Err(AstError::NotAChild {
                        child,
                        parent: index,
                    });
                }
            }
            if node.parent.is_some() {
                let parent = self
                    .get(node.parent)
                    .ok_or(AstError::InvalidIndex(node.parent))?;
                if parent.children.position(index).is_none() {
                    return Err(AstError::NotAChild {
                        child: index,
                        parent: node.parent,
                    });
                }
            }
            let data_ok = match node.kind {
                SyntaxKind::Script => {
                    !node.has_data() || (node.data_index as usize) < self.source_files.len()
                }
                kind if kind.has_text() => {
                    !node.has_data() || (node.data_index as usize) < self.identifiers.len()
                }
                _ => true,
            };
            if !data_ok {
                return Err(AstError::DanglingData {
                    node: index,
                    kind: node.kind,
                    data_index: node.data_index,
                });
            }
            if let Some(jsdoc) = node.jsdoc
                && jsdoc.0 as usize >= self.jsdocs.len()
            {
                return Err(AstError::DanglingData {
                    node: index,
                    kind: node.kind,
                    data_index: jsdoc.0,
                });
            }
        }
        self.check_acyclic()
    }

    /// Every parent chain must end at a parentless node. Runs after edge
    /// validation, so every parent index resolves.
    fn check_acyclic(&self) -> Result<(), AstError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Unvisited,
            OnPath,
            Rooted,
        }

        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut path = Vec::new();
        for start in 0..self.nodes.len() {
            let mut current = NodeIndex(start as u32);
            while let Some(node) = self.get(current) {
                let slot = current.0 as usize;
                match marks[slot] {
                    Mark::Rooted => break,
                    Mark::OnPath => return Err(AstError::Cycle { node: current }),
                    Mark::Unvisited => {
                        marks[slot] = Mark::OnPath;
                        path.push(slot);
                        current = node.parent;
                    }
                }
            }
            for slot in path.drain(..) {
                marks[slot] = Mark::Rooted;
            }
        }
        Ok(())
    }
}
