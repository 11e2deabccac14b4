//! Compact S-expression rendering of a subtree, for logs and assertions.
//!
//! ```text
//! (Class (Identifier A) (Empty) (ClassMembers (MemberFunction constructor ...)))
//! ```

use crate::base::NodeIndex;
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;
use std::fmt::Write;

impl NodeArena {
    /// Render `index` and its descendants on one line.
    pub fn dump(&self, index: NodeIndex) -> String {
        let mut out = String::new();
        self.dump_into(index, &mut out);
        out
    }

    fn dump_into(&self, index: NodeIndex, out: &mut String) {
        let Some(node) = self.get(index) else {
            out.push_str("(<invalid>)");
            return;
        };
        out.push('(');
        out.push_str(node.kind.as_str());
        if node.kind == SyntaxKind::MemberFunction && node.is_static() {
            out.push_str(" static");
        }
        if node.kind == SyntaxKind::Script {
            if let Some(file_name) = self.source_file_name(index) {
                let _ = write!(out, " {file_name}");
            }
        } else if let Some(text) = self.node_text(index) {
            let _ = write!(out, " {text}");
        }
        for &child in &node.children.nodes {
            out.push(' ');
            self.dump_into(child, out);
        }
        out.push(')');
    }
}
