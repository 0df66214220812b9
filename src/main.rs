//! # BASIC
//!
//! Runs a line-numbered BASIC program from a file.
//!

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A minimal line-numbered BASIC interpreter.
#[derive(Parser)]
#[command(name = "basic", version, about)]
struct Cli {
    /// BASIC source file, one numbered line per text line.
    file: PathBuf,

    /// Print the program in line number order instead of running it.
    #[arg(long)]
    list: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "basic=debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    std::process::exit(basic::term::main(&cli.file, cli.list));
}
