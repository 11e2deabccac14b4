//! Documentation metadata attached to nodes.
//!
//! Only `is_constructor` and `base_type` drive the class conversion; the
//! remaining fields ride along so type annotations survive when metadata is
//! copied onto synthesized members.

use serde::{Deserialize, Serialize};

/// Index into the arena's documentation pool.
///
/// Several nodes may share one index: copying metadata from a function onto
/// the member that replaces it is an index copy, not a deep clone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsDocIndex(pub u32);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocParam {
    pub name: String,
    /// Textual type expression, e.g. `number` or `!ns.Foo`.
    #[serde(default)]
    pub type_expr: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsDocInfo {
    /// `@constructor`
    #[serde(default)]
    pub is_constructor: bool,
    /// `@extends {T}` as written, including any nullability markers.
    #[serde(default)]
    pub base_type: Option<String>,
    /// `@param {T} name`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<JsDocParam>,
    /// `@return {T}`
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl JsDocInfo {
    /// Metadata for `/** @constructor */`.
    #[must_use]
    pub fn constructor() -> Self {
        Self {
            is_constructor: true,
            ..Self::default()
        }
    }

    /// Metadata for `/** @constructor @extends {base} */`.
    #[must_use]
    pub fn constructor_extending(base: impl Into<String>) -> Self {
        Self {
            is_constructor: true,
            base_type: Some(base.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, type_expr: impl Into<String>) -> Self {
        self.return_type = Some(type_expr.into());
        self
    }
}
