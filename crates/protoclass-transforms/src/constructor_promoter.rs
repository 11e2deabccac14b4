//! Rewrites `@constructor` functions into class declarations.
//!
//! ```javascript
//! /** @constructor @extends {!Base} */
//! function A(x) { this.x = x; }
//! ```
//!
//! becomes
//!
//! ```javascript
//! class A extends Base {
//!     /** @constructor @extends {!Base} */
//!     constructor(x) { this.x = x; }
//! }
//! ```
//!
//! The parameter list and body are moved, not copied. The documentation is
//! shared with the synthesized `constructor` member so type annotations
//! survive.

use crate::base_type::normalize_base_type;
use crate::binding::nearest_name;
use crate::class_registry::ClassRegistry;
use crate::context::ConversionContext;
use crate::error::ConversionError;
use crate::qualified_name;
use protoclass_ast::{JsDocIndex, NodeFlags, NodeIndex, SyntaxKind};

/// Promote `function` to a class and register it.
///
/// Returns the new class node, or `None` when the name is already taken in
/// this file; in that case `ClassRedefined` is reported and the function is
/// left exactly as found.
pub fn promote_constructor(
    cx: &mut ConversionContext<'_>,
    registry: &mut ClassRegistry,
    function: NodeIndex,
    jsdoc: JsDocIndex,
) -> Result<Option<NodeIndex>, ConversionError> {
    cx.arena.expect_kind(function, SyntaxKind::Function)?;
    let class_name = nearest_name(cx.arena, function);
    if let Some(name) = &class_name
        && !registry.check_available(cx.arena, name, function, &mut cx.reporter)
    {
        return Ok(None);
    }

    if cx.arena.children(function).len() != 3 {
        return Err(ConversionError::MalformedFunction { node: function });
    }
    let [name, params, body]: [NodeIndex; 3] = cx
        .arena
        .detach_children(function)?
        .try_into()
        .map_err(|_| ConversionError::MalformedFunction { node: function })?;

    // The empty name corresponds to anonymous constructors, which take
    // their name from the surrounding context (`var A = function() {}`
    // becomes `var A = class {}`).
    let class_name_node = match cx.arena.identifier_text(name) {
        Some(text) if !text.is_empty() => name,
        _ => cx.arena.add_empty(),
    };

    let superclass = superclass_for(cx, jsdoc);

    let ctor_name = cx.arena.add_empty();
    let ctor_function = cx.arena.add_function(ctor_name, params, body);
    cx.arena.copy_span(function, ctor_function);
    let constructor = cx.arena.add_member_function("constructor", false, ctor_function);
    cx.arena.copy_span(function, constructor);
    cx.arena.add_flags(constructor, NodeFlags::SYNTHESIZED);
    cx.arena.set_jsdoc(constructor, Some(jsdoc));

    let members = cx.arena.add_class_members(vec![constructor]);
    let class = cx.arena.add_class(class_name_node, superclass, members);
    cx.arena.copy_span(function, class);
    cx.arena.add_flags(class, NodeFlags::SYNTHESIZED);

    cx.arena.replace_with(function, class)?;
    cx.report_code_change();
    cx.stats.classes_promoted += 1;
    tracing::debug!(
        class = class_name.as_deref().unwrap_or("<anonymous>"),
        function = %function,
        class_node = %class,
        "promoted constructor to class"
    );

    if let Some(name) = &class_name
        && registry.register(cx.arena, name, class, &mut cx.reporter)
    {
        cx.stats.classes_registered += 1;
    }
    Ok(Some(class))
}

/// Superclass expression from `@extends`, or an `Empty` node.
fn superclass_for(cx: &mut ConversionContext<'_>, jsdoc: JsDocIndex) -> NodeIndex {
    let base_name = cx
        .arena
        .get_jsdoc(jsdoc)
        .and_then(|info| info.base_type.as_deref())
        .and_then(normalize_base_type);
    base_name
        .and_then(|name| qualified_name::build(cx.arena, &name))
        .unwrap_or_else(|| cx.arena.add_empty())
}

#[cfg(test)]
#[path = "../tests/constructor_promoter.rs"]
mod tests;
