//! Table generation configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Default largest magnitude to tabulate.
pub const DEFAULT_MAX_MAGNITUDE: usize = 100;

/// Largest magnitude accepted. The memo table holds N^2 cells and a full
/// run costs O(N^3) work.
pub const MAX_SUPPORTED_MAGNITUDE: usize = 2_000;

/// Default output file, one `magnitude expected_length` pair per line.
pub const DEFAULT_OUTPUT: &str = "expected_lengths.dat";

/// Environment variable overriding the largest magnitude.
pub const ENV_MAX_MAGNITUDE: &str = "SHREVE_MAX_MAGNITUDE";

/// Environment variable overriding the output path.
pub const ENV_OUTPUT: &str = "SHREVE_OUTPUT";

/// Environment variable naming an optional distribution dump.
pub const ENV_DISTRIBUTION: &str = "SHREVE_DISTRIBUTION";

/// Configuration for a table run.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Largest magnitude N; magnitudes 1..=N are tabulated
    pub max_magnitude: usize,

    /// Where the expected length table is written
    pub output_path: PathBuf,

    /// Where the raw F(m, l) values are written, if anywhere
    pub distribution_path: Option<PathBuf>,

    /// Write the table as JSON instead of whitespace-separated text
    pub json: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            distribution_path: None,
            json: false,
        }
    }
}

/// Values supplied on the command line. Each one that is set shadows the
/// matching environment variable, which is then never read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub max_magnitude: Option<usize>,
    pub output_path: Option<PathBuf>,
    pub distribution_path: Option<PathBuf>,
    pub json: bool,
}

impl TableConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(ConfigOverrides::default())
    }

    /// Create config from environment variables, then apply `overrides`.
    pub fn from_env_with(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Layer `overrides` over the values found through `lookup`.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let shadowed = |key: &str| match key {
            ENV_MAX_MAGNITUDE => overrides.max_magnitude.is_some(),
            ENV_OUTPUT => overrides.output_path.is_some(),
            ENV_DISTRIBUTION => overrides.distribution_path.is_some(),
            _ => false,
        };
        let mut config =
            Self::from_lookup(|key| if shadowed(key) { None } else { lookup(key) })?;

        if let Some(max_magnitude) = overrides.max_magnitude {
            config.max_magnitude = max_magnitude;
        }
        if let Some(output_path) = overrides.output_path {
            config.output_path = output_path;
        }
        if overrides.distribution_path.is_some() {
            config.distribution_path = overrides.distribution_path;
        }
        config.json |= overrides.json;

        config.validate()?;
        Ok(config)
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let max_magnitude = match lookup(ENV_MAX_MAGNITUDE) {
            Some(raw) => raw.trim().parse().map_err(|e| {
                Error::Config(format!("invalid {ENV_MAX_MAGNITUDE} {raw:?}: {e}"))
            })?,
            None => defaults.max_magnitude,
        };

        let output_path = lookup(ENV_OUTPUT)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);

        let distribution_path = lookup(ENV_DISTRIBUTION)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            max_magnitude,
            output_path,
            distribution_path,
            json: defaults.json,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the maximum magnitude lies in `[1, MAX_SUPPORTED_MAGNITUDE]`.
    pub fn validate(&self) -> Result<()> {
        if self.max_magnitude == 0 {
            return Err(Error::Config("max magnitude must be at least 1".into()));
        }
        if self.max_magnitude > MAX_SUPPORTED_MAGNITUDE {
            return Err(Error::Config(format!(
                "max magnitude {} exceeds supported maximum {MAX_SUPPORTED_MAGNITUDE}",
                self.max_magnitude
            )));
        }
        Ok(())
    }
}
