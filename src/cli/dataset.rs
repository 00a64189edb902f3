use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{OutputFormat, DEFAULT_DATASET_PATH};
use crate::dataset::store::DiseaseTable;

#[derive(Args)]
pub struct DatasetArgs {
    #[command(subcommand)]
    pub command: DatasetCommands,
}

#[derive(Subcommand)]
pub enum DatasetCommands {
    /// List all diseases in the table
    List {
        /// Path to the dataset file (falls back to the embedded seed table)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Show the full record(s) for a disease name
    Show {
        /// Disease name (case-insensitive; duplicates all shown)
        #[arg(required = true)]
        name: String,

        /// Path to the dataset file (falls back to the embedded seed table)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },

    /// Export the table to JSON
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the dataset file (falls back to the embedded seed table)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

/// Execute dataset subcommand
///
/// # Errors
///
/// Returns an error if the requested disease is not in the table or the
/// export target cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DatasetArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        DatasetCommands::List { dataset } => {
            let table = load(dataset, verbose);
            print_list(&table, format)?;
        }
        DatasetCommands::Show { name, dataset } => {
            let table = load(dataset, verbose);
            let records: Vec<_> = table.find_by_name(&name).collect();
            if records.is_empty() {
                anyhow::bail!("no disease named '{name}' in the table");
            }
            for record in records {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(record)?);
                    }
                    OutputFormat::Text | OutputFormat::Tsv => {
                        println!("{}", record.name);
                        println!("  Symptoms: {}", record.symptoms.join(", "));
                        println!("  Description: {}", record.description);
                        println!("  Treatment: {}", record.treatment);
                    }
                }
            }
        }
        DatasetCommands::Export { output, dataset } => {
            let table = load(dataset, verbose);
            let json = table.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("Exported {} records to {}", table.len(), path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

fn load(dataset: Option<PathBuf>, verbose: bool) -> DiseaseTable {
    let path = dataset.unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));
    let table = DiseaseTable::load_or_fallback(&path);
    if verbose {
        eprintln!(
            "Loaded disease table with {} records ({})",
            table.len(),
            table.source()
        );
    }
    table
}

fn print_list(table: &DiseaseTable, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for record in table.records() {
                println!(
                    "{} ({} symptoms): {}",
                    record.name,
                    record.symptoms.len(),
                    record.symptoms.join(", ")
                );
            }
            println!("\n{} diseases ({})", table.len(), table.source());
        }
        OutputFormat::Json => {
            let listing: Vec<serde_json::Value> = table
                .records()
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name,
                        "symptoms": r.symptoms,
                        "description": r.description,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Tsv => {
            println!("name\tsymptom_count\tsymptoms");
            for record in table.records() {
                println!(
                    "{}\t{}\t{}",
                    record.name,
                    record.symptoms.len(),
                    record.symptoms.join(", ")
                );
            }
        }
    }
    Ok(())
}
