//! Qualified names: dotted text to and from property-access chains.
//!
//! `"a.b.c"` corresponds to `PropertyAccess(PropertyAccess(Identifier a, b), c)`:
//! the first segment is the innermost identifier and every further segment
//! wraps the previous expression.

use protoclass_ast::{NodeArena, NodeIndex, SyntaxKind};
use smallvec::SmallVec;

pub type Segments<'a> = SmallVec<[&'a str; 4]>;

/// Build a left-associative property-access chain for `name`.
///
/// Returns `None` for an empty name or one with an empty segment (`a..b`).
pub fn build(arena: &mut NodeArena, name: &str) -> Option<NodeIndex> {
    if name.split('.').any(str::is_empty) {
        return None;
    }
    let mut parts = name.split('.');
    let root = arena.add_identifier(parts.next()?);
    Some(parts.fold(root, |object, part| arena.add_property_access(object, part)))
}

/// Segments of a pure identifier/property-access chain, outermost last.
///
/// `this` is accepted as a root segment. Any other expression shape yields
/// `None`.
pub fn segments(arena: &NodeArena, node: NodeIndex) -> Option<Segments<'_>> {
    let mut reversed: Segments<'_> = SmallVec::new();
    let mut current = node;
    loop {
        match arena.kind(current)? {
            SyntaxKind::Identifier => {
                reversed.push(arena.node_text(current)?);
                break;
            }
            SyntaxKind::ThisKeyword => {
                reversed.push("this");
                break;
            }
            SyntaxKind::PropertyAccess => {
                let name = arena.last_child(current);
                reversed.push(arena.identifier_text(name)?);
                current = arena.first_child(current);
            }
            _ => return None,
        }
    }
    reversed.reverse();
    Some(reversed)
}

/// Dotted text of a qualified-name expression, e.g. `"a.b.c"`.
pub fn qualified_name(arena: &NodeArena, node: NodeIndex) -> Option<String> {
    segments(arena, node).map(|segments| segments.join("."))
}

/// Final segment of a property access (`c` in `a.b.c`).
pub fn property_name(arena: &NodeArena, access: NodeIndex) -> Option<&str> {
    if arena.is_kind(access, SyntaxKind::PropertyAccess) {
        arena.identifier_text(arena.last_child(access))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../tests/qualified_name.rs"]
mod tests;
