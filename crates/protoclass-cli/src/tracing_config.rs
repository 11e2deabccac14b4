//! Log setup for the `protoclass` binary.
//!
//! Logging stays off unless `PROTOCLASS_LOG` or `RUST_LOG` holds a filter.
//! A bare level in `PROTOCLASS_LOG` applies to the protoclass crates only;
//! anything with a target or a comma is used as written.
//! `PROTOCLASS_LOG_FORMAT` picks how events reach stderr:
//!
//! - `text` (default): one line per event
//! - `tree`: events nested under the `convert_script` span of their file
//! - `json`: one object per event
//!
//! ```bash
//! PROTOCLASS_LOG=debug PROTOCLASS_LOG_FORMAT=tree protoclass ast.json
//! PROTOCLASS_LOG="protoclass_transforms=trace" protoclass ast.json
//! ```

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "PROTOCLASS_LOG";
const LOG_FORMAT_ENV: &str = "PROTOCLASS_LOG_FORMAT";

/// Targets a bare `PROTOCLASS_LOG` level is scoped to.
const CRATE_TARGETS: &[&str] = &["protoclass_cli", "protoclass_transforms", "protoclass_ast"];

/// How events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives and output format resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingConfig {
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok();
        Self::from_vars(var(LOG_ENV), var("RUST_LOG"), var(LOG_FORMAT_ENV))
    }

    /// `PROTOCLASS_LOG` wins over `RUST_LOG`. `None` when neither is set.
    pub fn from_vars(
        own_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = match own_log {
            Some(value) => scope_bare_level(&value),
            None => rust_log?,
        };
        Some(Self {
            directives,
            format: LogFormat::parse(format.as_deref().unwrap_or_default()),
        })
    }

    /// Install the global subscriber. stdout is left to the converted
    /// document.
    pub fn install(&self) {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).init();
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

/// `debug` becomes `protoclass_cli=debug,protoclass_transforms=debug,...`.
fn scope_bare_level(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.parse::<LevelFilter>().is_err() {
        return value.to_string();
    }
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn init_tracing() {
    if let Some(config) = TracingConfig::from_env() {
        config.install();
    }
}
