//! A Rust library for building, describing and saving genealogical pedigrees.
//!
//! Pedigrees are built from flat `ind, father, mother, sex` records, loaded
//! from delimited text or Parquet files, described with genealogical
//! indices and written back out as text, Parquet or an integer matrix.

pub mod algorithm;
pub mod async_io;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod output;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{PedigreeConfig, SaveConfig};
pub use error::{PedigreeError, Result};
pub use models::{Individual, IndividualRecord, Matrix, Pedigree, Sex};

// Output
pub use output::{
    output_pedigree, pedigree_to_record_batch, save_pedigree, save_pedigree_parquet,
    save_pedigree_with,
};

// Loading
pub use async_io::load_pedigree_parquet_async;
pub use io::{load_pedigree, load_pedigree_auto, load_pedigree_parquet, parse_pedigree};

// Descriptors
pub use algorithm::{PedigreeSummary, branching};
