//! Names and documentation found in a node's binding context.
//!
//! A function or class expression is usually named by where it is bound,
//! not by its own identifier:
//!
//! ```javascript
//! /** @constructor */ var A = function() {};        // "A"
//! /** @constructor */ ns.sub.B = function() {};     // "ns.sub.B"
//! var registry = { /** @constructor */ C: function() {} };  // "C"
//! ```

use crate::qualified_name::qualified_name;
use protoclass_ast::{JsDocIndex, NodeArena, NodeIndex, SyntaxKind};

/// Name for a function or class, preferring its binding context over its
/// own identifier. `None` for anonymous, unbound nodes.
pub fn nearest_name(arena: &NodeArena, node: NodeIndex) -> Option<String> {
    let parent = arena.parent(node);
    let bound_as_value = arena.second_child(parent) == node;
    let from_context = match arena.kind(parent) {
        Some(SyntaxKind::VariableDeclaration) if bound_as_value => arena
            .identifier_text(arena.first_child(parent))
            .map(str::to_string),
        Some(SyntaxKind::Assignment) if bound_as_value => {
            qualified_name(arena, arena.first_child(parent))
        }
        Some(SyntaxKind::PropertyAssignment) => arena.node_text(parent).map(str::to_string),
        _ => None,
    };
    from_context
        .filter(|name| !name.is_empty())
        .or_else(|| own_name(arena, node))
}

/// The node's own identifier (first child of a function or class).
fn own_name(arena: &NodeArena, node: NodeIndex) -> Option<String> {
    arena
        .identifier_text(arena.first_child(node))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Documentation that applies to `node`: its own, else the declaration or
/// assignment that binds it.
pub fn best_jsdoc(arena: &NodeArena, node: NodeIndex) -> Option<JsDocIndex> {
    if let Some(jsdoc) = arena.jsdoc_index(node) {
        return Some(jsdoc);
    }
    let parent = arena.parent(node);
    let bound_as_value = arena.second_child(parent) == node;
    match arena.kind(parent)? {
        SyntaxKind::VariableDeclaration if bound_as_value => {
            arena.jsdoc_index(parent).or_else(|| {
                let statement = arena.parent(parent);
                let single = arena.children(statement).len() == 1;
                if single && arena.is_kind(statement, SyntaxKind::VariableStatement) {
                    arena.jsdoc_index(statement)
                } else {
                    None
                }
            })
        }
        SyntaxKind::Assignment if bound_as_value => {
            arena.jsdoc_index(parent).or_else(|| {
                let statement = arena.parent(parent);
                if arena.is_kind(statement, SyntaxKind::ExpressionStatement) {
                    arena.jsdoc_index(statement)
                } else {
                    None
                }
            })
        }
        SyntaxKind::PropertyAssignment => arena.jsdoc_index(parent),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/binding.rs"]
mod tests;
