//! Tactics CLI
//!
//! Formation catalog validation and single-cycle decisions from snapshot files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tactics_core::formation::FormationContext;
use tactics_core::{
    Agent, CycleReport, DecisionDispatcher, FormationCatalog, FormationSetName, TacticalSession,
    TacticsConfig, WorldSnapshot,
};

#[derive(Parser)]
#[command(name = "tactics")]
#[command(about = "Validate formation data and run tactical decision cycles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every known formation set from a directory
    Validate {
        /// Formations root holding one directory per set
        #[arg(long)]
        dir: PathBuf,

        /// Print the report as JSON instead of a summary line
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Run one decision cycle for a snapshot and print the result as JSON
    Decide {
        /// Tactics configuration (YAML or JSON); defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// World snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,

        /// Override the formations root from the configuration
        #[arg(long)]
        formations: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    root: PathBuf,
    sets: Vec<FormationSetName>,
    definitions: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { dir, json } => {
            let report = validate(&dir)?;
            if json {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize validation report")?;
                println!("{}", json);
            } else {
                println!(
                    "✅ {} formation set(s), {} definitions under {}",
                    report.sets.len(),
                    report.definitions,
                    report.root.display()
                );
            }
        }

        Commands::Decide { config, snapshot, formations, pretty } => {
            let report = decide(config.as_deref(), &snapshot, formations)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("Failed to serialize cycle report")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn validate(dir: &Path) -> Result<ValidateReport> {
    let catalog = FormationCatalog::load(dir, &FormationSetName::ALL)
        .with_context(|| format!("Invalid formation data in {}", dir.display()))?;

    let sets: Vec<_> = catalog.names().collect();
    tracing::info!(sets = sets.len(), "formation catalog valid");

    Ok(ValidateReport {
        root: dir.to_path_buf(),
        definitions: sets.len() * FormationContext::ALL.len(),
        sets,
    })
}

fn decide(
    config_path: Option<&Path>,
    snapshot_path: &Path,
    formations: Option<PathBuf>,
) -> Result<CycleReport> {
    let mut config = match config_path {
        Some(path) => TacticsConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => TacticsConfig::default(),
    };
    if let Some(dir) = formations {
        config.formations_dir = dir;
    }

    let raw = std::fs::read_to_string(snapshot_path)
        .with_context(|| format!("Failed to read snapshot: {}", snapshot_path.display()))?;
    let snapshot: WorldSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot: {}", snapshot_path.display()))?;

    let tactics = TacticalSession::from_config(&config).with_context(|| {
        format!("Failed to load formations from {}", config.formations_dir.display())
    })?;
    let mut agent = Agent::new(tactics, DecisionDispatcher::with_defaults());

    let report = agent.run_cycle(&snapshot);
    tracing::debug!(cycle = report.cycle, branch = ?report.branch, "decision made");
    Ok(report)
}
