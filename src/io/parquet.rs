//! Parquet pedigree files
//!
//! Reads files with `ind`, `father`, `mother` and `sex` integer columns.
//! Other columns are projected away before decoding.

use std::path::Path;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::schema::types::SchemaDescriptor;
use rayon::prelude::*;

use crate::config::PedigreeConfig;
use crate::error::util::safe_open_file;
use crate::error::{PedigreeError, Result, ResultExt};
use crate::models::{ArrowSchema, IndividualRecord, Pedigree};
use crate::utils::{OperationLog, log_warning};

/// Projection mask selecting the pedigree columns of a Parquet file
///
/// # Errors
/// Returns a schema error naming the first pedigree column the file lacks.
pub fn pedigree_projection(
    file_schema: &Schema,
    parquet_schema: &SchemaDescriptor,
) -> Result<ProjectionMask> {
    let required = IndividualRecord::schema();
    let roots: Vec<usize> = required
        .fields()
        .iter()
        .map(|field| {
            file_schema.index_of(field.name()).map_err(|_| {
                PedigreeError::Schema(format!("Missing required column '{}'", field.name()))
            })
        })
        .collect::<Result<_>>()?;

    if file_schema.fields().len() > roots.len() {
        log::debug!(
            "Ignoring {} extra columns",
            file_schema.fields().len() - roots.len()
        );
    }
    Ok(ProjectionMask::roots(parquet_schema, roots))
}

/// Decode record batches into flat records, one batch per rayon task
pub fn records_from_batches(batches: &[RecordBatch]) -> Result<Vec<IndividualRecord>> {
    let decoded: Vec<Vec<IndividualRecord>> = batches
        .par_iter()
        .map(IndividualRecord::from_record_batch)
        .collect::<Result<_>>()?;
    Ok(decoded.into_iter().flatten().collect())
}

/// Read the pedigree columns of a Parquet file into record batches
pub fn read_pedigree_batches(path: &Path, config: &PedigreeConfig) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "loading pedigree parquet")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).with_path(path)?;
    let projection = pedigree_projection(builder.schema(), builder.parquet_schema())
        .map_err(|e| e.with_path(path))?;

    let reader = builder
        .with_projection(projection)
        .with_batch_size(config.effective_batch_size())
        .build()
        .with_path(path)?;

    let batches = reader
        .collect::<std::result::Result<Vec<RecordBatch>, _>>()
        .with_path(path)?;
    if batches.is_empty() {
        log_warning("Parquet file contains no rows", Some(path));
    }
    Ok(batches)
}

/// Load a pedigree from a Parquet file
pub fn load_pedigree_parquet(path: &Path, config: &PedigreeConfig) -> Result<Pedigree> {
    let operation = OperationLog::start("Loading pedigree parquet from", "loaded", path);

    let batches = read_pedigree_batches(path, config)?;
    let records = records_from_batches(&batches).map_err(|e| e.with_path(path))?;
    let pedigree = Pedigree::from_records(&records, config).map_err(|e| e.with_path(path))?;

    operation.finish(pedigree.len());
    Ok(pedigree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::save_pedigree_parquet;
    use arrow::array::Int32Array;
    use arrow::datatypes::{DataType, Field};
    use parquet::arrow::ArrowWriter;
    use std::sync::Arc;

    #[test]
    fn test_parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.parquet");
        let records = [
            IndividualRecord::new(1, 0, 0, 1),
            IndividualRecord::new(2, 0, 0, 2),
            IndividualRecord::new(3, 1, 2, 2),
        ];
        let config = PedigreeConfig::default();
        let pedigree = Pedigree::from_records(&records, &config).unwrap();

        save_pedigree_parquet(&pedigree, &path).unwrap();
        let loaded = load_pedigree_parquet(&path, &config).unwrap();
        assert_eq!(loaded, pedigree);
    }

    #[test]
    fn test_small_batches_are_merged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.parquet");
        let records: Vec<IndividualRecord> = (1..=10)
            .map(|id| IndividualRecord::new(id, 0, 0, 1))
            .collect();
        let config = PedigreeConfig {
            batch_size: 3,
            ..PedigreeConfig::default()
        };
        let pedigree = Pedigree::from_records(&records, &config).unwrap();
        save_pedigree_parquet(&pedigree, &path).unwrap();

        let batches = read_pedigree_batches(&path, &config).unwrap();
        assert!(batches.len() >= 2);
        let loaded = load_pedigree_parquet(&path, &config).unwrap();
        assert_eq!(loaded.len(), 10);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.parquet");
        let schema = Arc::new(Schema::new(vec![
            Field::new("ind", DataType::Int32, false),
            Field::new("father", DataType::Int32, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int32Array::from(vec![1])),
                Arc::new(Int32Array::from(vec![0])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_pedigree_parquet(&path, &PedigreeConfig::default()).unwrap_err();
        assert!(matches!(err.root(), PedigreeError::Schema(msg) if msg.contains("mother")));
    }
}
