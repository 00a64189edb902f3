use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{OutputFormat, DEFAULT_DATASET_PATH};
use crate::dataset::store::DiseaseTable;
use crate::matching::engine::{Matcher, MatcherConfig, Prediction};

#[derive(Args)]
pub struct PredictArgs {
    /// Symptoms to match (one per argument, e.g. fever "body aches")
    pub symptoms: Vec<String>,

    /// Read symptoms as free text from a file, split on commas and
    /// newlines. Use '-' for stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of candidates to show
    #[arg(short = 'n', long, default_value = "5")]
    pub max_results: usize,

    /// Path to the dataset file (falls back to the embedded seed table)
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

/// Execute predict subcommand
///
/// # Errors
///
/// Returns an error if no symptoms are supplied or the input file cannot
/// be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PredictArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let symptoms = gather_symptoms(&args)?;

    if symptoms.is_empty() {
        anyhow::bail!("at least one symptom is required (arguments or --input)");
    }

    let dataset_path = args
        .dataset
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));
    let table = DiseaseTable::load_or_fallback(&dataset_path);

    if verbose {
        eprintln!(
            "Loaded disease table with {} records ({})",
            table.len(),
            table.source()
        );
        eprintln!("Matching {} symptom(s)", symptoms.len());
    }

    let config = MatcherConfig {
        result_limit: args.max_results,
        ..MatcherConfig::default()
    };
    let matcher = Matcher::with_config(table, config);
    let prediction = matcher.predict(&symptoms);

    match format {
        OutputFormat::Text => print_text_results(&prediction),
        OutputFormat::Json => print_json_results(&prediction)?,
        OutputFormat::Tsv => print_tsv_results(&prediction),
    }

    Ok(())
}

/// Collect symptoms from positional arguments and/or `--input` free text.
fn gather_symptoms(args: &PredictArgs) -> anyhow::Result<Vec<String>> {
    let mut symptoms: Vec<String> = args
        .symptoms
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(input) = &args.input {
        let text = read_input(input)?;
        symptoms.extend(split_free_text(&text));
    }

    Ok(symptoms)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    use std::io::Read;

    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Split free text into symptom phrases on commas and newlines. This is the
/// CLI's input convention, not an NLP step - entity extraction belongs to
/// an upstream collaborator.
fn split_free_text(text: &str) -> Vec<String> {
    text.split(|c| c == ',' || c == '\n' || c == ';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn print_text_results(prediction: &Prediction) {
    for (i, result) in prediction.diseases.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({:.2}%, {} severity)",
            i + 1,
            result.name,
            result.confidence,
            result.severity
        );
        if !result.matching_symptoms.is_empty() {
            println!("   Matched symptoms: {}", result.matching_symptoms.join(", "));
        }
        println!("   Description: {}", result.description);
        println!("   Treatment: {}", result.treatment);
    }

    println!("\nProcessed in {:.3}s", prediction.processing_time);
}

fn print_json_results(prediction: &Prediction) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(prediction)?);
    Ok(())
}

fn print_tsv_results(prediction: &Prediction) {
    println!("rank\tname\tconfidence\tseverity\tmatching_symptoms\tdescription\ttreatment");
    for (i, result) in prediction.diseases.iter().enumerate() {
        println!(
            "{}\t{}\t{:.2}\t{}\t{}\t{}\t{}",
            i + 1,
            result.name,
            result.confidence,
            result.severity,
            result.matching_symptoms.join(", "),
            result.description,
            result.treatment,
        );
    }
}
