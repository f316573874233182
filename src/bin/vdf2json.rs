//! Parse a VDF file and print it as pretty JSON.
//!
//! Exits non-zero with the failure message on any parse or I/O error; no
//! partial output is printed.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Convert a VDF/KeyValues file to JSON", long_about = None)]
struct Args {
    /// The path to a VDF file.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(input = ?args.input);

    let document = serde_vdf::parse_file(&args.input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    let json = serde_json::to_string_pretty(&document).context("failed to render JSON")?;
    println!("{json}");

    Ok(())
}
