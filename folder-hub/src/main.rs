//! Folder Hub command line
//!
//! Browse and reorganize organization-scoped folder trees, either one command
//! at a time or through the interactive shell.

use anyhow::Result;
use clap::Parser;
use folder_hub::{
    cli::{run, Cli},
    config::load_config,
};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config()?;
    run(cli, config, io::stdin().lock(), io::stdout().lock())
}
