//! NoteGraph CLI

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use notegraph::{
    GraphData, NoteKey, NoteVault, PathResult, VaultConfig, adjacency_matrix, shortest_path,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Link graph analytics for a folder of markdown notes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Storage root holding the notes and the snapshot directory
    #[arg(short, long, env = "NOTEGRAPH_ROOT")]
    root: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, env = "NOTEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Note identity: bare file name (name) or path relative to the root (path)
    #[arg(long)]
    key_by: Option<NoteKey>,

    /// Number of hubs reported by `analyze`
    #[arg(long)]
    hub_limit: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Orphans, broken links, hubs, average links and graph statistics
    Analyze,
    /// Nodes with headings and links, plus edges, for visualisation
    Graph,
    /// Adjacency matrix with its node order
    Matrix,
    /// Shortest directed path between two notes
    Path { source: String, target: String },
    /// Save a snapshot of the current graph statistics
    Snapshot,
    /// List saved snapshots, newest first
    Snapshots,
    /// Copy note files into the storage root
    Import {
        /// Files to import
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Folder under the root to place them in
        #[arg(long)]
        into: Option<String>,
    },
    /// Delete every note and snapshot under the storage root
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<VaultConfig> {
    let mut config = match &args.config {
        Some(path) => VaultConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => VaultConfig::default(),
    };

    if let Some(root) = &args.root {
        config.set_root(root);
    }
    if let Some(key) = args.key_by {
        config.key = key;
    }
    if let Some(limit) = args.hub_limit {
        config.hub_limit = limit;
    }

    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    log::debug!("Storage root: {}", config.root.display());
    let vault = NoteVault::new(config);

    match args.command {
        Command::Analyze => {
            let report = vault.analyze();
            if report.is_empty() {
                log::warn!(
                    "No notes found under {}. Import some first.",
                    vault.root().display()
                );
            }
            print_json(&report)?;
        }
        Command::Graph => {
            let (notes, graph) = vault.load_graph();
            print_json(&GraphData::from_graph(&notes, &graph))?;
        }
        Command::Matrix => {
            let (_, graph) = vault.load_graph();
            print_json(&adjacency_matrix(&graph))?;
        }
        Command::Path { source, target } => {
            let (_, graph) = vault.load_graph();
            match shortest_path(&graph, &source, &target) {
                Some(path) => print_json(&PathResult::new(path))?,
                None => {
                    eprintln!("No path found or invalid nodes: {} -> {}", source, target);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Snapshot => {
            let file = vault.save_snapshot().context("saving snapshot")?;
            println!("{}", file);
        }
        Command::Snapshots => {
            let listing = vault.snapshots().context("listing snapshots")?;
            if listing.skipped > 0 {
                log::warn!("Skipped {} malformed snapshot files", listing.skipped);
            }
            print_json(&listing.snapshots)?;
        }
        Command::Import { files, into } => {
            let mut imported = 0;
            for file in &files {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .with_context(|| format!("{} has no file name", file.display()))?;
                let name = match &into {
                    Some(folder) => format!("{}/{}", folder, name),
                    None => name,
                };

                let bytes =
                    std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
                match vault.import_note(&name, &bytes) {
                    Ok(stored) => {
                        log::info!("Imported {}", stored.display());
                        imported += 1;
                    }
                    Err(e) => log::warn!("Skipping {}: {}", file.display(), e),
                }
            }
            println!("{} of {} files imported", imported, files.len());
        }
        Command::Reset { yes } => {
            if !yes {
                bail!(
                    "refusing to clear {} without --yes",
                    vault.root().display()
                );
            }
            let removed = vault.reset().context("clearing storage root")?;
            println!("Removed {} files", removed);
        }
    }

    Ok(ExitCode::SUCCESS)
}
