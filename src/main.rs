use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod dataset;
mod matching;
mod parsing;
mod web;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("medmatch=debug,info")
    } else {
        EnvFilter::new("medmatch=warn")
    };

    // Logs go to stderr so JSON/TSV output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Predict(args) => {
            cli::predict::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Dataset(args) => {
            cli::dataset::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
