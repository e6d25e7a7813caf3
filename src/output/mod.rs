//! Pedigree output
//!
//! Converts a pedigree into its tabular `[ind, father, mother, sex]` form and
//! persists it as a delimited text file or a Parquet file.

use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;

use crate::config::SaveConfig;
use crate::error::util::safe_create_file;
use crate::error::{Result, ResultExt};
use crate::models::{ArrowSchema, IndividualRecord, Matrix, Pedigree};
use crate::utils::OperationLog;

/// Column names of the tabular pedigree form
pub const PEDIGREE_COLUMNS: [&str; 4] = ["ind", "father", "mother", "sex"];

/// Returns the pedigree as rows of IDs, father IDs, mother IDs and sexes
///
/// Rows follow pedigree order; unknown parents are 0 and sexes use the codes
/// 0 (unknown), 1 (male) and 2 (female).
#[must_use]
pub fn output_pedigree(pedigree: &Pedigree) -> Matrix<i32> {
    let mut matrix = Matrix::new(pedigree.len(), PEDIGREE_COLUMNS.len());
    for (row, record) in pedigree.to_records().into_iter().enumerate() {
        matrix[(row, 0)] = record.ind;
        matrix[(row, 1)] = record.father;
        matrix[(row, 2)] = record.mother;
        matrix[(row, 3)] = record.sex;
    }
    matrix
}

/// Saves the pedigree to a tab-separated text file with a header line
pub fn save_pedigree(pedigree: &Pedigree, pedigree_file: impl AsRef<Path>) -> Result<()> {
    save_pedigree_with(pedigree, pedigree_file, &SaveConfig::default())
}

/// Saves the pedigree to a delimited text file
pub fn save_pedigree_with(
    pedigree: &Pedigree,
    pedigree_file: impl AsRef<Path>,
    config: &SaveConfig,
) -> Result<()> {
    let path = pedigree_file.as_ref();
    let operation = OperationLog::start("Saving pedigree to", "saved", path);

    let file = safe_create_file(path, "saving pedigree")?;
    let mut writer = BufWriter::new(file);
    let delimiter = config.delimiter.to_string();

    if config.header {
        writeln!(writer, "{}", PEDIGREE_COLUMNS.iter().join(&delimiter)).with_path(path)?;
    }
    let matrix = output_pedigree(pedigree);
    for row in matrix.iter_rows() {
        writeln!(writer, "{}", row.iter().join(&delimiter)).with_path(path)?;
    }
    writer.flush().with_path(path)?;

    operation.finish(matrix.rows());
    Ok(())
}

/// Arrow form of [`output_pedigree`]
pub fn pedigree_to_record_batch(pedigree: &Pedigree) -> Result<RecordBatch> {
    IndividualRecord::to_record_batch(&pedigree.to_records())
}

/// Saves the pedigree to a Parquet file with `ind`, `father`, `mother` and `sex` columns
pub fn save_pedigree_parquet(pedigree: &Pedigree, pedigree_file: impl AsRef<Path>) -> Result<()> {
    let path = pedigree_file.as_ref();
    let operation = OperationLog::start("Saving pedigree as parquet to", "saved", path);

    let batch = pedigree_to_record_batch(pedigree)?;
    let file = safe_create_file(path, "saving pedigree as parquet")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).with_path(path)?;
    writer.write(&batch).with_path(path)?;
    writer.close().with_path(path)?;

    operation.finish(batch.num_rows());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PedigreeConfig;

    fn family() -> Pedigree {
        let records = [
            IndividualRecord::new(10, 1, 2, 2),
            IndividualRecord::new(1, 0, 0, 1),
            IndividualRecord::new(2, 0, 0, 2),
        ];
        Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap()
    }

    #[test]
    fn test_output_pedigree_rows() {
        let matrix = output_pedigree(&family());
        assert_eq!((matrix.rows(), matrix.cols()), (3, 4));
        assert_eq!(matrix.row(0), Some(&[1, 0, 0, 1][..]));
        assert_eq!(matrix.row(2), Some(&[10, 1, 2, 2][..]));
    }

    #[test]
    fn test_output_empty_pedigree() {
        let matrix = output_pedigree(&Pedigree::default());
        assert_eq!((matrix.rows(), matrix.cols()), (0, 4));
    }

    #[test]
    fn test_save_pedigree_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.txt");
        save_pedigree(&family(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "ind\tfather\tmother\tsex\n1\t0\t0\t1\n2\t0\t0\t2\n10\t1\t2\t2\n"
        );
    }

    #[test]
    fn test_save_with_custom_delimiter_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.csv");
        let config = SaveConfig {
            delimiter: ',',
            header: false,
        };
        save_pedigree_with(&family(), &path, &config).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1,0,0,1\n2,0,0,2\n10,1,2,2\n");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("family.txt");
        assert!(save_pedigree(&family(), &path).is_err());
    }

    #[test]
    fn test_record_batch_matches_matrix() {
        let pedigree = family();
        let batch = pedigree_to_record_batch(&pedigree).unwrap();
        assert_eq!(batch.num_rows(), 3);
        let names: Vec<&str> = batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(names, PEDIGREE_COLUMNS);
    }
}
