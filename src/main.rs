//! # BOOSE
//!
//! A drawing language with variables, loops and methods.
//!

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod term;

/// BOOSE drawing language interpreter.
#[derive(Parser)]
#[command(name = "boose", version, about)]
struct Cli {
    /// Program to run. Starts the interactive prompt when left out.
    file: Option<PathBuf>,

    /// Check the program without running it.
    #[arg(long, requires = "file")]
    check: bool,

    /// Log calls, returns and loop iterations to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.trace {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.file {
        Some(path) => term::batch(&path, cli.check),
        None => {
            term::main();
            0
        }
    };
    std::process::exit(code);
}
