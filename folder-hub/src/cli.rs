//! Command-line surface: argument definitions and command dispatch.

use crate::{
    config::Config,
    present::{render, Format},
    shell::Shell,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folder_hub_core::{
    source::{FolderSource, JsonFileSource, SampleSource},
    FolderRepository, OrgId,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "folder-hub")]
#[command(about = "Organization-scoped folder trees stored as materialized paths")]
pub struct Cli {
    /// JSON file with the folder collection (defaults to generated sample data)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format for folder lists
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Seed for generated sample data
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all folders, or only those of one organization
    List {
        #[arg(short, long)]
        org: Option<OrgId>,
    },

    /// List every folder nested under the named folder
    Children {
        /// Organization to search (defaults to FOLDER_HUB_ORG)
        #[arg(short, long)]
        org: Option<OrgId>,

        name: String,
    },

    /// Move a folder and its subtree under another folder
    Move {
        source: String,
        destination: String,

        /// Write the updated collection back to the data file
        #[arg(long)]
        persist: bool,
    },

    /// Write generated sample data to a JSON file
    Generate { output: PathBuf },

    /// Start the interactive shell
    Shell,
}

/// Execute one invocation. `input` feeds the shell; everything meant for the
/// user goes to `out`. Flags override the environment-derived `config`.
pub fn run<R: BufRead, W: Write>(cli: Cli, mut config: Config, input: R, mut out: W) -> Result<()> {
    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if let Some(seed) = cli.seed {
        config.sample_seed = seed;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::List { org } => {
            let repo = open(&config)?;
            let rendered = match org {
                Some(org) => render(repo.folders_by_org(org), cli.format)?,
                None => render(repo.folders(), cli.format)?,
            };
            write!(out, "{rendered}")?;
        }
        Commands::Children { org, name } => {
            let repo = open(&config)?;
            let org = org.unwrap_or(config.default_org);
            let children = repo.child_folders(org, &name)?;
            write!(out, "{}", render(children, cli.format)?)?;
        }
        Commands::Move {
            source,
            destination,
            persist,
        } => {
            let target = if persist {
                let path = config
                    .data_path
                    .as_ref()
                    .context("--persist needs a data file (--data or FOLDER_HUB_DATA)")?;
                Some(JsonFileSource::new(path))
            } else {
                None
            };
            let mut repo = open(&config)?;
            let rendered = render(repo.move_folder(&source, &destination)?, cli.format)?;
            if let Some(target) = target {
                target.save(repo.folders())?;
            }
            write!(out, "{rendered}")?;
        }
        Commands::Generate { output } => {
            let folders = SampleSource::with_seed(config.sample_seed).generate();
            JsonFileSource::new(&output).save(&folders)?;
            info!(path = %output.display(), count = folders.len(), "generated sample data");
        }
        Commands::Shell => {
            let repo = open(&config)?;
            Shell::new(repo, config.default_org, cli.format, input, &mut out).run()?;
        }
    }
    out.flush()?;
    Ok(())
}

fn open(config: &Config) -> Result<FolderRepository> {
    let source: Box<dyn FolderSource> = match &config.data_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource::with_seed(config.sample_seed)),
    };
    FolderRepository::from_source(source.as_ref())
}
