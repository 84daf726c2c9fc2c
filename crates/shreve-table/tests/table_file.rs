//! End-to-end table generation against real files.

use std::fs;
use std::io::BufReader;

use shreve_table::{read_table, run, Error, TableConfig};

fn config_in(dir: &tempfile::TempDir, max_magnitude: usize) -> TableConfig {
    TableConfig {
        max_magnitude,
        output_path: dir.path().join("expected_lengths.dat"),
        ..TableConfig::default()
    }
}

#[test]
fn five_magnitudes_five_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, 5);

    let table = run(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(table.len(), 5);
    for (idx, line) in lines.iter().enumerate() {
        let fields: Vec<_> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 2, "line {:?}", line);

        let magnitude: usize = fields[0].parse().unwrap();
        let expected: f64 = fields[1].parse().unwrap();
        assert_eq!(magnitude, idx + 1);
        assert!(expected.is_finite());
        assert!((0.0..=magnitude as f64).contains(&expected));
    }
}

#[test]
fn file_parses_back_to_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, 30);

    let table = run(&config).unwrap();
    let file = fs::File::open(&config.output_path).unwrap();
    let rows = read_table(BufReader::new(file)).unwrap();

    assert_eq!(rows.as_slice(), table.rows());
}

#[test]
fn json_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = TableConfig {
        json: true,
        ..config_in(&dir, 4)
    };

    run(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 4);
    assert_eq!(value[2]["magnitude"], 3);
}

#[test]
fn distribution_file_written() {
    let dir = tempfile::tempdir().unwrap();
    let dist_path = dir.path().join("distribution.dat");
    let config = TableConfig {
        distribution_path: Some(dist_path.clone()),
        ..config_in(&dir, 6)
    };

    run(&config).unwrap();
    let text = fs::read_to_string(&dist_path).unwrap();

    // one line per 1 <= length <= magnitude <= 6
    assert_eq!(text.lines().count(), 21);
    assert_eq!(text.lines().next(), Some("1 1 0.5"));
}

#[test]
fn zero_magnitude_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, 0);

    assert!(matches!(run(&config), Err(Error::Config(_))));
    assert!(!config.output_path.exists());
}

#[test]
fn oversized_magnitude_rejected_before_allocation() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir, usize::MAX);

    assert!(matches!(run(&config), Err(Error::Config(_))));
    assert!(!config.output_path.exists());
}
