//! Loading pedigrees from text and Parquet files

pub mod parquet;
pub mod text;

pub use self::parquet::{load_pedigree_parquet, read_pedigree_batches};
pub use self::text::{load_pedigree, parse_pedigree, parse_records};

use std::path::Path;

use crate::config::PedigreeConfig;
use crate::error::Result;
use crate::models::Pedigree;

/// Whether a path names a Parquet file
#[must_use]
pub fn is_parquet_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"))
}

/// Load a pedigree, choosing the format from the file extension
pub fn load_pedigree_auto(path: &Path, config: &PedigreeConfig) -> Result<Pedigree> {
    if is_parquet_path(path) {
        load_pedigree_parquet(path, config)
    } else {
        load_pedigree(path, config)
    }
}
