//! Rendering and reading expected length tables.
//!
//! The text format is one line per magnitude with two whitespace-separated
//! fields, `magnitude expected_length`, in increasing magnitude order.
//! Values are written with Rust's shortest round-trip float formatting.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use shreve_core::{Evaluator, ExpectedLength, ExpectedLengthTable};

use crate::error::{Error, Result};

/// Write `table` as whitespace-separated text.
pub fn write_table<W: Write>(mut writer: W, table: &ExpectedLengthTable) -> Result<()> {
    for row in table {
        writeln!(writer, "{} {}", row.magnitude, row.expected_length)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `table` as a JSON array of `{magnitude, expected_length}` objects.
pub fn write_json<W: Write>(mut writer: W, table: &ExpectedLengthTable) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table.rows())?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `table` to it.
pub fn write_table_file(path: &Path, table: &ExpectedLengthTable, json: bool) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    if json {
        write_json(writer, table)
    } else {
        write_table(writer, table)
    }
}

/// Write raw F(m, l) values as `magnitude length probability` lines for
/// every `1 <= l <= m <= N`.
pub fn write_distribution<W: Write>(mut writer: W, evaluator: &mut Evaluator) -> Result<()> {
    for magnitude in 1..=evaluator.max_magnitude() {
        for (idx, probability) in evaluator.distribution(magnitude)?.into_iter().enumerate() {
            writeln!(writer, "{} {} {}", magnitude, idx + 1, probability)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Parse a text table written by [`write_table`].
///
/// Blank lines are skipped. Rows must appear in increasing magnitude order.
pub fn read_table<R: BufRead>(reader: R) -> Result<Vec<ExpectedLength>> {
    let mut rows: Vec<ExpectedLength> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let parse_err = |reason: String| Error::Parse {
            line: line_no,
            reason,
        };

        let mut fields = trimmed.split_whitespace();
        let (Some(magnitude), Some(expected_length), None) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(parse_err(format!("expected 2 fields, got {trimmed:?}")));
        };

        let magnitude: usize = magnitude
            .parse()
            .map_err(|e| parse_err(format!("bad magnitude {magnitude:?}: {e}")))?;
        let expected_length: f64 = expected_length
            .parse()
            .map_err(|e| parse_err(format!("bad expected length {expected_length:?}: {e}")))?;

        if let Some(prev) = rows.last() {
            if magnitude <= prev.magnitude {
                return Err(parse_err(format!(
                    "magnitude {magnitude} does not follow {}",
                    prev.magnitude
                )));
            }
        }

        rows.push(ExpectedLength {
            magnitude,
            expected_length,
        });
    }

    Ok(rows)
}
