//! Configuration for building, loading and saving pedigrees.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PedigreeError, Result};
use crate::error::util::safe_read_to_string;

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 16384;

/// Environment variable overriding the Parquet batch size
pub const BATCH_SIZE_ENV: &str = "PEDIGREE_BATCH_SIZE";

/// Configuration for constructing a `Pedigree`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PedigreeConfig {
    /// Reorder individuals so that parents precede their children
    pub sort: bool,
    /// Add parents that are referenced but not listed as founders
    pub add_missing_parents: bool,
    /// Reject fathers recorded as female and mothers recorded as male
    pub validate_sex: bool,
    /// Batch size for reading Parquet files
    pub batch_size: usize,
    /// Number of worker threads for per-individual computations
    pub num_threads: usize,
}

impl Default for PedigreeConfig {
    fn default() -> Self {
        Self {
            sort: true,
            add_missing_parents: false,
            validate_sex: true,
            batch_size: DEFAULT_BATCH_SIZE,
            num_threads: num_cpus::get(),
        }
    }
}

impl PedigreeConfig {
    /// Load a configuration from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "pedigree configuration")?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PedigreeError::from(e).with_path(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the numeric settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(PedigreeError::Config("batch_size must be positive".into()));
        }
        if self.num_threads == 0 {
            return Err(PedigreeError::Config("num_threads must be positive".into()));
        }
        Ok(())
    }

    /// Batch size to use, honouring the `PEDIGREE_BATCH_SIZE` environment variable
    #[must_use]
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size_with_override(std::env::var(BATCH_SIZE_ENV).ok().as_deref())
    }

    /// Batch size given a raw override value; unparsable or zero values are ignored
    fn batch_size_with_override(&self, raw: Option<&str>) -> usize {
        raw.and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&size| size > 0)
            .unwrap_or(self.batch_size)
    }

    /// Build a rayon thread pool sized by `num_threads`
    pub fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
            .map_err(|e| PedigreeError::Config(format!("Failed to build thread pool: {e}")))
    }
}

/// Configuration for writing text pedigree files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Field delimiter
    pub delimiter: char,
    /// Whether to write the `ind father mother sex` header line
    pub header: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            header: true,
        }
    }
}
