// ABOUTME: Command-line front end: reads TrainingPlanInputs JSON, prints the plan JSON
// ABOUTME: Thin wrapper over validate_inputs + build_training_plan with tracing setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build a training plan from a JSON inputs file.
//!
//! ```bash
//! trekplan-cli plan --inputs inputs.json --pretty
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trekplan::{build_training_plan, derive_hike_demands, validate_inputs, TrainingPlanInputs};

#[derive(Parser)]
#[command(name = "trekplan-cli", about = "Hike training plan scheduler", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a full training plan from an inputs file
    Plan {
        /// Path to a TrainingPlanInputs JSON file
        #[arg(long)]
        inputs: PathBuf,
        /// Pretty-print the plan JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Show the demand estimates derived from the hike geometry
    Demands {
        /// Path to a TrainingPlanInputs JSON file
        #[arg(long)]
        inputs: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Plan { inputs, pretty } => {
            let parsed = load_inputs(&inputs)?;
            let plan = build_training_plan(&parsed);
            let rendered = if pretty {
                serde_json::to_string_pretty(&plan)?
            } else {
                serde_json::to_string(&plan)?
            };
            println!("{rendered}");
        }
        Command::Demands { inputs } => {
            let parsed = load_inputs(&inputs)?;
            let demands = derive_hike_demands(&parsed.hike);
            println!("{}", serde_json::to_string_pretty(&demands)?);
        }
    }
    Ok(())
}

fn load_inputs(path: &Path) -> Result<TrainingPlanInputs> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading inputs file {}", path.display()))?;
    let inputs: TrainingPlanInputs =
        serde_json::from_str(&raw).context("parsing TrainingPlanInputs JSON")?;
    validate_inputs(&inputs).context("validating inputs")?;
    Ok(inputs)
}
