//! JSON interchange for whole trees.
//!
//! A host that parses JavaScript elsewhere hands the tree over as an
//! [`AstDocument`]; the mutated tree goes back the same way.

use crate::base::NodeIndex;
use crate::error::AstError;
use crate::node::{AstDocument, NodeArena};

impl AstDocument {
    #[must_use]
    pub fn new(arena: NodeArena, root: NodeIndex) -> Self {
        Self { root, arena }
    }

    /// Parse and validate a document.
    pub fn from_json(text: &str) -> Result<Self, AstError> {
        let document: AstDocument =
            serde_json::from_str(text).map_err(|e| AstError::Json(e.to_string()))?;
        if document.arena.get(document.root).is_none() {
            return Err(AstError::InvalidIndex(document.root));
        }
        document.arena.validate()?;
        tracing::debug!(
            nodes = document.arena.len(),
            root = %document.root,
            "loaded AST document"
        );
        Ok(document)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, AstError> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| AstError::Json(e.to_string()))
    }
}
