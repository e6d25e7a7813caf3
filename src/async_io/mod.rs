//! Async Parquet pedigree loading
//!
//! Streams the pedigree columns of a Parquet file on the tokio runtime.

use std::path::Path;

use arrow::record_batch::RecordBatch;
use futures::TryStreamExt;
use parquet::arrow::async_reader::ParquetRecordBatchStreamBuilder;
use tokio::fs::File;

use crate::config::PedigreeConfig;
use crate::error::{PedigreeError, Result, ResultExt};
use crate::io::parquet::{pedigree_projection, records_from_batches};
use crate::models::Pedigree;
use crate::utils::{OperationLog, log_warning};

/// Open a Parquet file for async reading
pub async fn open_parquet_file_async(path: &Path) -> Result<File> {
    File::open(path).await.map_err(|e| {
        PedigreeError::from(e)
            .with_path(path)
            .context("Failed to open pedigree parquet")
    })
}

/// Read the pedigree columns of a Parquet file asynchronously
pub async fn read_pedigree_batches_async(
    path: &Path,
    config: &PedigreeConfig,
) -> Result<Vec<RecordBatch>> {
    let file = open_parquet_file_async(path).await?;
    let builder = ParquetRecordBatchStreamBuilder::new(file)
        .await
        .with_path(path)?;
    let projection = pedigree_projection(builder.schema(), builder.parquet_schema())
        .map_err(|e| e.with_path(path))?;

    let stream = builder
        .with_projection(projection)
        .with_batch_size(config.effective_batch_size())
        .build()
        .with_path(path)?;

    let batches = stream.try_collect::<Vec<_>>().await.with_path(path)?;
    if batches.is_empty() {
        log_warning("Parquet file contains no rows", Some(path));
    }
    Ok(batches)
}

/// Load a pedigree from a Parquet file asynchronously
///
/// Decoding and validation run on the blocking pool so the runtime is not
/// stalled by large pedigrees.
pub async fn load_pedigree_parquet_async(path: &Path, config: &PedigreeConfig) -> Result<Pedigree> {
    let operation = OperationLog::start(
        "Loading pedigree parquet asynchronously from",
        "loaded",
        path,
    );

    let batches = read_pedigree_batches_async(path, config).await?;
    let config = config.clone();
    let pedigree = tokio::task::spawn_blocking(move || {
        let records = records_from_batches(&batches)?;
        Pedigree::from_records(&records, &config)
    })
    .await
    .map_err(|e| PedigreeError::io_error(std::io::ErrorKind::Other, e.to_string()))?
    .map_err(|e| e.with_path(path))?;

    operation.finish(pedigree.len());
    Ok(pedigree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndividualRecord;
    use crate::output::save_pedigree_parquet;

    #[tokio::test]
    async fn test_async_matches_sync_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.parquet");
        let records = [
            IndividualRecord::new(4, 1, 2, 1),
            IndividualRecord::new(1, 0, 0, 1),
            IndividualRecord::new(2, 0, 0, 2),
        ];
        let config = PedigreeConfig::default();
        let pedigree = Pedigree::from_records(&records, &config).unwrap();
        save_pedigree_parquet(&pedigree, &path).unwrap();

        let loaded = load_pedigree_parquet_async(&path, &config).await.unwrap();
        let sync_loaded = crate::io::load_pedigree_parquet(&path, &config).unwrap();
        assert_eq!(loaded, sync_loaded);
        assert_eq!(loaded.proband_ids(), vec![4]);
    }

    #[tokio::test]
    async fn test_async_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.parquet");
        let err = load_pedigree_parquet_async(&path, &PedigreeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err.root(), PedigreeError::Io(_)));
    }
}
