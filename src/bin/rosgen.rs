//! Generate Rust source from a `.msg` or `.srv` definition.
//!
//! Usage:
//!   rosgen msg -i Hello.msg [-o hello.rs] [-p my_msgs] [--dry-run] [-c rosgen.toml]
//!   rosgen srv -i AddTwoInts.srv
//!
//! Log level follows `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use clap::Parser;
use rosgen::{CompileJob, Compiler, DefinitionKind, GenConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "rosgen", version, about = "Generate Rust message types from ROS-style definitions")]
struct Cli {
    /// Generator to run: msg or srv
    kind: DefinitionKind,

    /// Input definition file
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Output file; defaults to '<input file>.rs'
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Package of the definition; defaults to 'msgs' or 'srvs'
    #[arg(short = 'p', long)]
    package: Option<String>,

    /// Print the file that would be generated to stdout
    #[arg(long)]
    dry_run: bool,

    /// TOML file with runtime path and package imports
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().without_time().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GenConfig::load(path)?,
        None => GenConfig::default(),
    };
    let compiler = Compiler::new(config);
    let job = CompileJob {
        kind: cli.kind,
        input: cli.input,
        output: cli.output,
        package: cli.package,
        dry_run: cli.dry_run,
    };
    let out = compiler
        .compile(&job)
        .with_context(|| format!("failed to generate {} from {}", job.kind, job.input.display()))?;
    if !out.written {
        println!("{}", out.code);
    }
    Ok(())
}
