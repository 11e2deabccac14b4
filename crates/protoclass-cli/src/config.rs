//! Conversion options for a CLI run: an optional JSON file, then flags.

use anyhow::{Context, Result};
use protoclass_transforms::ConversionOptions;
use std::path::Path;

use crate::args::CliArgs;

/// Read options from a JSON file. Missing keys take their defaults.
pub fn load_options(path: &Path) -> Result<ConversionOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    ConversionOptions::from_json(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Options for this invocation. Flags override values from `--config`.
pub fn resolve_options(args: &CliArgs) -> Result<ConversionOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => ConversionOptions::default(),
    };
    if args.no_static_merge {
        options.merge_static_methods = false;
    }
    tracing::debug!(?options, "resolved conversion options");
    Ok(options)
}
