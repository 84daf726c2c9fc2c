//! Expected length table generator
//!
//! Tabulates expected lengths of Shreve random networks for magnitudes 1..=N.

use std::path::PathBuf;

use clap::Parser;
use shreve_table::{ConfigOverrides, TableConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "expected-lengths")]
#[command(about = "Expected lengths of Shreve random stream networks", long_about = None)]
struct Cli {
    /// Largest magnitude to tabulate (default: $SHREVE_MAX_MAGNITUDE or 100)
    #[arg(short = 'n', long)]
    max_magnitude: Option<usize>,

    /// Output file (default: $SHREVE_OUTPUT or expected_lengths.dat)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write raw F(magnitude, length) values to this file
    #[arg(long)]
    distribution: Option<PathBuf>,

    /// Write the table as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "expected_lengths=info,shreve_table=info,shreve_core=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = TableConfig::from_env_with(ConfigOverrides {
        max_magnitude: cli.max_magnitude,
        output_path: cli.output,
        distribution_path: cli.distribution,
        json: cli.json,
    })?;

    let table = shreve_table::run(&config)?;
    tracing::info!(
        rows = table.len(),
        output = %config.output_path.display(),
        "Done"
    );

    Ok(())
}
