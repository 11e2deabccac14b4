//! Traversal driver for the class conversion pass.
//!
//! Every `Script` under the root is converted independently with a fresh
//! [`ClassRegistry`]. Within a script the tree is walked in post-order with
//! an explicit stack, and each node is dispatched on its kind:
//!
//! - `Class`: registered under its nearest name.
//! - `Function` documented with `@constructor`: promoted to a class.
//! - top-level `target = function() {}` statements: merged into their class.
//!
//! Child lists are snapshotted when a node is entered, so nodes created by a
//! rewrite are never visited.

use crate::binding::{best_jsdoc, nearest_name};
use crate::class_registry::ClassRegistry;
use crate::constructor_promoter::promote_constructor;
use crate::context::{ConversionContext, ConversionResult};
use crate::error::ConversionError;
use crate::member_merger::{MemberAssignmentView, merge_member};
use crate::options::ConversionOptions;
use protoclass_ast::{NodeArena, NodeIndex, SyntaxKind};
use protoclass_common::limits::TRAVERSAL_STACK_PREALLOC;
use tracing::{Level, span};

/// Converts every script under a root.
#[derive(Debug, Clone, Default)]
pub struct ClassConversionPass {
    options: ConversionOptions,
}

impl ClassConversionPass {
    #[must_use]
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Run over `root`, which is either a `Root` holding scripts or a single
    /// `Script`. Non-script children of the root are skipped.
    pub fn run(
        &self,
        arena: &mut NodeArena,
        root: NodeIndex,
    ) -> Result<ConversionResult, ConversionError> {
        if arena.is_kind(root, SyntaxKind::Script) {
            return convert_script(arena, root, &self.options);
        }
        arena.expect_kind(root, SyntaxKind::Root)?;

        let mut result = ConversionResult::default();
        let scripts = arena.children(root).to_vec();
        for script in scripts {
            if arena.is_kind(script, SyntaxKind::Script) {
                result.absorb(convert_script(arena, script, &self.options)?);
            } else {
                tracing::trace!(node = %script, "skipping non-script root child");
            }
        }
        tracing::debug!(
            code_changes = result.stats.code_changes,
            diagnostics = result.diagnostics.len(),
            "class conversion finished"
        );
        Ok(result)
    }
}

enum Visit {
    Enter(NodeIndex),
    Exit(NodeIndex),
}

/// Convert one compilation unit.
pub fn convert_script(
    arena: &mut NodeArena,
    script: NodeIndex,
    options: &ConversionOptions,
) -> Result<ConversionResult, ConversionError> {
    arena.expect_kind(script, SyntaxKind::Script)?;
    let file_name = arena.source_file_name(script).unwrap_or_default().to_string();
    let _span = span!(Level::DEBUG, "convert_script", file = file_name.as_str()).entered();

    let mut registry = ClassRegistry::new();
    let mut cx = ConversionContext::new(arena, options);

    let mut stack = Vec::with_capacity(TRAVERSAL_STACK_PREALLOC);
    stack.push(Visit::Enter(script));
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node) => {
                if is_detached(cx.arena, node, script) {
                    continue;
                }
                stack.push(Visit::Exit(node));
                stack.extend(cx.arena.children(node).iter().rev().map(|&c| Visit::Enter(c)));
            }
            Visit::Exit(node) => {
                if is_detached(cx.arena, node, script) {
                    continue;
                }
                visit_node(&mut cx, &mut registry, node)?;
            }
        }
    }

    tracing::debug!(
        classes = registry.len(),
        code_changes = cx.stats.code_changes,
        "script converted"
    );
    Ok(cx.finish())
}

/// A node removed by an earlier rewrite has no parent; the script itself
/// never has one.
fn is_detached(arena: &NodeArena, node: NodeIndex, script: NodeIndex) -> bool {
    node != script && arena.parent(node).is_none()
}

fn visit_node(
    cx: &mut ConversionContext<'_>,
    registry: &mut ClassRegistry,
    node: NodeIndex,
) -> Result<(), ConversionError> {
    let Some(kind) = cx.arena.kind(node) else {
        return Ok(());
    };
    match kind {
        SyntaxKind::Class => {
            if let Some(name) = nearest_name(cx.arena, node)
                && registry.register(cx.arena, &name, node, &mut cx.reporter)
            {
                cx.stats.classes_registered += 1;
            }
        }
        SyntaxKind::Function => {
            let constructor_doc = best_jsdoc(cx.arena, node).filter(|&jsdoc| {
                cx.arena
                    .get_jsdoc(jsdoc)
                    .is_some_and(|info| info.is_constructor)
            });
            if let Some(jsdoc) = constructor_doc {
                promote_constructor(cx, registry, node, jsdoc)?;
            }
        }
        SyntaxKind::ExpressionStatement => {
            if !cx.arena.is_kind(cx.arena.parent(node), SyntaxKind::Script) {
                return Ok(());
            }
            if let Some(view) = MemberAssignmentView::from_statement(cx.arena, node)
                && view.is_method(cx.arena)
            {
                merge_member(cx, registry, &view)?;
            }
        }
        SyntaxKind::Root
        | SyntaxKind::Script
        | SyntaxKind::Empty
        | SyntaxKind::Identifier
        | SyntaxKind::StringLiteral
        | SyntaxKind::NumericLiteral
        | SyntaxKind::ThisKeyword
        | SyntaxKind::PropertyAccess
        | SyntaxKind::Assignment
        | SyntaxKind::Call
        | SyntaxKind::ParameterList
        | SyntaxKind::Block
        | SyntaxKind::Return
        | SyntaxKind::VariableStatement
        | SyntaxKind::VariableDeclaration
        | SyntaxKind::ObjectLiteral
        | SyntaxKind::PropertyAssignment
        | SyntaxKind::ClassMembers
        | SyntaxKind::MemberFunction => {}
    }
    Ok(())
}
