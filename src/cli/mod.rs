//! Command-line interface for medmatch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **predict**: Rank candidate diseases for a list of symptoms
//! - **dataset**: List, show, or export the loaded disease table
//! - **serve**: Start the JSON API server
//!
//! ## Usage
//!
//! ```text
//! # Match symptoms given as arguments
//! medmatch predict fever "body aches" fatigue
//!
//! # Pipe a free-text description (split on commas/newlines)
//! echo "fever, dry cough" | medmatch predict --input -
//!
//! # JSON output for scripting
//! medmatch predict fever cough --format json
//!
//! # Inspect the table behind the matcher
//! medmatch dataset list --dataset data/disease_symptom_dataset.csv
//!
//! # Start the API server
//! medmatch serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod dataset;
pub mod predict;

/// Default dataset location, relative to the working directory. Overridable
/// everywhere with `--dataset`; a missing file falls back to the embedded
/// seed table.
pub const DEFAULT_DATASET_PATH: &str = "data/disease_symptom_dataset.csv";

#[derive(Parser)]
#[command(name = "medmatch")]
#[command(version)]
#[command(about = "Match patient-reported symptoms against a disease table")]
#[command(
    long_about = "medmatch ranks candidate diseases for a list of patient-reported symptoms.\n\nIt scores symptom overlap against a disease table (a CSV/TSV dataset, or an embedded seed table when none is available) and returns confidence-scored, severity-labeled candidates.\n\nThis is an educational heuristic-matching tool, not a medical diagnosis system."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidate diseases for a list of symptoms
    Predict(predict::PredictArgs),

    /// Inspect or export the disease table
    Dataset(dataset::DatasetArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    /// Path to the dataset file (falls back to the embedded seed table)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

impl ServeArgs {
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH))
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
