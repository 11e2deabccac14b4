use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the protoclass binary.
#[derive(Parser, Debug)]
#[command(
    name = "protoclass",
    version,
    about = "Convert prototype-based constructors and method assignments into class declarations"
)]
pub struct CliArgs {
    /// AST document (JSON) to convert.
    pub input: PathBuf,

    /// Write the converted document here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Conversion options file (JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the output document.
    #[arg(long)]
    pub pretty: bool,

    /// Leave static method assignments (`A.create = function() {}`) in place.
    #[arg(long = "no-static-merge")]
    pub no_static_merge: bool,

    /// Print each converted script as an S-expression on stderr.
    #[arg(long = "dump-tree")]
    pub dump_tree: bool,
}

#[cfg(test)]
#[path = "../tests/args.rs"]
mod tests;
