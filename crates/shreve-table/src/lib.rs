//! Shreve Expected Length Tables
//!
//! Drives the length engine over magnitudes `1..=N`, writes the resulting
//! `magnitude expected_length` table to disk and echoes each row to the log.
//!
//! Configuration comes from [`TableConfig`], built from defaults, environment
//! variables (`SHREVE_MAX_MAGNITUDE`, `SHREVE_OUTPUT`, `SHREVE_DISTRIBUTION`)
//! and command line flags, in increasing order of precedence.

pub mod config;
pub mod error;
pub mod output;

use std::fs::File;
use std::io::BufWriter;

use shreve_core::{Evaluator, ExpectedLengthTable};
use tracing::{debug, info};

pub use config::{ConfigOverrides, TableConfig};
pub use error::{Error, Result};
pub use output::{read_table, write_distribution, write_json, write_table, write_table_file};

/// Compute the table described by `config` and write every requested file.
///
/// Any engine error aborts the run; no partial table is returned.
pub fn run(config: &TableConfig) -> Result<ExpectedLengthTable> {
    config.validate()?;
    info!(
        max_magnitude = config.max_magnitude,
        output = %config.output_path.display(),
        "Computing expected lengths"
    );

    let mut evaluator = Evaluator::new(config.max_magnitude)?;
    let table = ExpectedLengthTable::compute_with(&mut evaluator)?;

    write_table_file(&config.output_path, &table, config.json)?;
    for row in &table {
        info!(
            "Magnitude: {}, expected_length: {}.",
            row.magnitude, row.expected_length
        );
    }

    if let Some(path) = &config.distribution_path {
        write_distribution(BufWriter::new(File::create(path)?), &mut evaluator)?;
        info!(path = %path.display(), "Wrote length distribution");
    }

    let stats = evaluator.stats();
    debug!(
        evaluations = stats.evaluations,
        cache_hits = stats.cache_hits,
        filled = evaluator.table().filled(),
        "Memo table usage"
    );

    Ok(table)
}
