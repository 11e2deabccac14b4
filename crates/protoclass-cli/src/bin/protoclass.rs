#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use protoclass_cli::args::CliArgs;
use protoclass_cli::driver::{self, ConversionRun};
use protoclass_cli::reporter::Reporter;

const EXIT_SUCCESS: u8 = 0;
const EXIT_DIAGNOSTICS: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    // Only installs a subscriber when PROTOCLASS_LOG or RUST_LOG is set.
    protoclass_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<u8> {
    let ConversionRun { document, result } = driver::convert(args)?;

    if args.dump_tree {
        eprintln!("{}", driver::render_tree(&document));
    }

    if let Some(json) = driver::write_document(&document, args.output.as_deref(), args.pretty)? {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    if result.diagnostics.is_empty() {
        return Ok(EXIT_SUCCESS);
    }
    let reporter = Reporter::new(std::io::stderr().is_terminal());
    eprintln!("{}", reporter.render(&result.diagnostics));
    Ok(EXIT_DIAGNOSTICS)
}
