//! Load, convert and write one AST document.

use anyhow::{Context, Result};
use protoclass_ast::{AstDocument, SyntaxKind};
use protoclass_transforms::{ClassConversionPass, ConversionResult};
use std::path::Path;

use crate::args::CliArgs;
use crate::config::resolve_options;

/// A converted document and what the pass reported about it.
#[derive(Debug)]
pub struct ConversionRun {
    pub document: AstDocument,
    pub result: ConversionResult,
}

pub fn load_document(path: &Path) -> Result<AstDocument> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read AST document: {}", path.display()))?;
    AstDocument::from_json(&source)
        .with_context(|| format!("failed to parse AST document: {}", path.display()))
}

/// Load `args.input`, resolve options and run the pass over the document.
pub fn convert(args: &CliArgs) -> Result<ConversionRun> {
    let options = resolve_options(args)?;
    let mut document = load_document(&args.input)?;
    let result = ClassConversionPass::new(options)
        .run(&mut document.arena, document.root)
        .with_context(|| format!("class conversion aborted: {}", args.input.display()))?;
    tracing::info!(
        input = %args.input.display(),
        code_changes = result.stats.code_changes,
        classes_promoted = result.stats.classes_promoted,
        members_merged = result.stats.members_merged,
        diagnostics = result.diagnostics.len(),
        "converted document"
    );
    Ok(ConversionRun { document, result })
}

/// Serialize the document, writing it to `output` when given.
///
/// Returns the JSON text when no output path is set so the caller can print
/// it.
pub fn write_document(
    document: &AstDocument,
    output: Option<&Path>,
    pretty: bool,
) -> Result<Option<String>> {
    let json = document
        .to_json(pretty)
        .context("failed to serialize AST document")?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            Ok(None)
        }
        None => Ok(Some(json)),
    }
}

/// One line per script: the debug dump of the converted tree.
pub fn render_tree(document: &AstDocument) -> String {
    let arena = &document.arena;
    let scripts = if arena.is_kind(document.root, SyntaxKind::Script) {
        vec![document.root]
    } else {
        arena
            .children(document.root)
            .iter()
            .copied()
            .filter(|&child| arena.is_kind(child, SyntaxKind::Script))
            .collect()
    };
    scripts
        .into_iter()
        .map(|script| arena.dump(script))
        .collect::<Vec<_>>()
        .join("\n")
}
