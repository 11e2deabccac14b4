//! Moves method assignments into the class they belong to.
//!
//! ```javascript
//! A.prototype.foo = function() {};   // instance member `foo`
//! A.create = function() {};          // static member `create`
//! ```
//!
//! A statement whose class is registered is removed from its script and its
//! function becomes a `MemberFunction` appended to the class. Statements
//! naming unknown classes stay where they are.

use crate::class_registry::ClassRegistry;
use crate::context::ConversionContext;
use crate::diagnostics::ConversionDiagnosticKind;
use crate::error::ConversionError;
use crate::qualified_name::{property_name, qualified_name};
use protoclass_ast::{JsDocIndex, NodeArena, NodeIndex, SyntaxKind};

const PROTOTYPE: &str = "prototype";

/// Read-only projection of `target = value;` where `target` is a property
/// access. Built per statement and dropped after the merge decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberAssignmentView {
    pub statement: NodeIndex,
    pub assignment: NodeIndex,
    /// Full assignment target, e.g. `A.prototype.foo`.
    pub target: NodeIndex,
    pub rhs: NodeIndex,
    pub jsdoc: Option<JsDocIndex>,
}

impl MemberAssignmentView {
    /// Project an expression statement; `None` unless it is an assignment
    /// to a property access.
    pub fn from_statement(arena: &NodeArena, statement: NodeIndex) -> Option<Self> {
        if !arena.is_kind(statement, SyntaxKind::ExpressionStatement) {
            return None;
        }
        let assignment = arena.first_child(statement);
        if !arena.is_kind(assignment, SyntaxKind::Assignment) {
            return None;
        }
        let target = arena.first_child(assignment);
        if !arena.is_kind(target, SyntaxKind::PropertyAccess) {
            return None;
        }
        let rhs = arena.second_child(assignment);
        let jsdoc = arena
            .jsdoc_index(statement)
            .or_else(|| arena.jsdoc_index(assignment))
            .or_else(|| arena.jsdoc_index(rhs));
        Some(Self {
            statement,
            assignment,
            target,
            rhs,
            jsdoc,
        })
    }

    /// Right-hand side is a function literal.
    pub fn is_method(&self, arena: &NodeArena) -> bool {
        arena.is_kind(self.rhs, SyntaxKind::Function)
    }

    /// Instance members are declared through `X.prototype.name`; everything
    /// else is static.
    pub fn is_static(&self, arena: &NodeArena) -> bool {
        let object = arena.first_child(self.target);
        property_name(arena, object) != Some(PROTOTYPE)
    }

    /// Qualified name of the class this member belongs to.
    ///
    /// `A.B.C.prototype.foo` gives `A.B.C`; `A.B.C.D.bar` gives `A.B.C.D`.
    /// `Ok(None)` when the class position is not a qualified name.
    pub fn class_name(&self, arena: &NodeArena) -> Result<Option<String>, ConversionError> {
        if self.is_static(arena) {
            return Ok(qualified_name(arena, arena.first_child(self.target)));
        }
        let mut current = self.target;
        while arena.is_kind(current, SyntaxKind::PropertyAccess) {
            if property_name(arena, current) == Some(PROTOTYPE) {
                return Ok(qualified_name(arena, arena.first_child(current)));
            }
            current = arena.first_child(current);
        }
        Err(ConversionError::MissingPrototypeSegment {
            target: self.target,
        })
    }

    /// Name of the member being declared (`foo` in `A.prototype.foo`).
    pub fn member_name<'a>(&self, arena: &'a NodeArena) -> Option<&'a str> {
        property_name(arena, self.target)
    }
}

/// Try to move the view's method into its class.
///
/// Returns the new member node when merged, `None` when the statement was
/// left in place.
pub fn merge_member(
    cx: &mut ConversionContext<'_>,
    registry: &ClassRegistry,
    view: &MemberAssignmentView,
) -> Result<Option<NodeIndex>, ConversionError> {
    let is_static = view.is_static(cx.arena);
    if is_static && !cx.options.merge_static_methods {
        return Ok(None);
    }
    let Some(class_name) = view.class_name(cx.arena)? else {
        tracing::trace!(statement = %view.statement, "member target is not a qualified name");
        return Ok(None);
    };
    let Some(class) = registry.lookup(&class_name) else {
        // Unresolved static targets are not reported.
        if !is_static && cx.options.report_unknown_classes {
            cx.reporter.report(
                cx.arena,
                ConversionDiagnosticKind::UnknownClass,
                view.target,
                &class_name,
            );
        }
        return Ok(None);
    };
    let Some(member_name) = view.member_name(cx.arena).map(str::to_string) else {
        return Ok(None);
    };

    if cx.arena.is_within(class, view.rhs) {
        tracing::trace!(class = class_name.as_str(), "class is nested in its own member");
        return Ok(None);
    }
    let members = cx.arena.class_members(class);
    cx.arena.expect_kind(members, SyntaxKind::ClassMembers)?;

    cx.arena.detach(view.statement)?;
    cx.arena.detach(view.rhs)?;

    let member = cx.arena.add_member_function(&member_name, is_static, view.rhs);
    cx.arena.copy_span(view.statement, member);
    cx.arena.set_jsdoc(member, view.jsdoc);
    cx.arena.append_child(members, member)?;

    cx.report_code_change();
    cx.stats.members_merged += 1;
    tracing::debug!(
        class = class_name.as_str(),
        member = member_name.as_str(),
        is_static,
        "merged member into class"
    );
    Ok(Some(member))
}

#[cfg(test)]
#[path = "../tests/member_merger.rs"]
mod tests;
