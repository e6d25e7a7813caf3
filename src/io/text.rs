//! Delimited text pedigree files
//!
//! Reads the `ind father mother sex` format produced by
//! [`save_pedigree`](crate::output::save_pedigree). Fields may be separated by
//! tabs, commas, semicolons or runs of spaces; blank lines and `#` comments are
//! skipped and a leading non-numeric line is taken as the header.

use std::path::Path;

use crate::config::PedigreeConfig;
use crate::error::util::safe_read_to_string;
use crate::error::{PedigreeError, Result};
use crate::models::{IndividualRecord, Pedigree};
use crate::utils::OperationLog;

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|field| !field.is_empty())
}

/// Parse text content into flat records
pub fn parse_records(content: &str) -> Result<Vec<IndividualRecord>> {
    let mut records = Vec::new();
    let mut seen_data_or_header = false;

    for (position, line) in content.lines().enumerate() {
        let line_number = position + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = split_fields(trimmed).collect();
        let is_first = !seen_data_or_header;
        seen_data_or_header = true;

        if is_first && fields.first().is_some_and(|f| f.parse::<i32>().is_err()) {
            log::debug!("Skipping header line {line_number}: {trimmed}");
            continue;
        }

        if fields.len() != 4 {
            return Err(PedigreeError::Parse {
                line: line_number,
                message: format!("expected 4 fields, found {}", fields.len()),
            });
        }

        let mut values = [0_i32; 4];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.parse().map_err(|_| PedigreeError::Parse {
                line: line_number,
                message: format!("'{field}' is not an integer"),
            })?;
        }
        let [ind, father, mother, sex] = values;
        records.push(IndividualRecord::new(ind, father, mother, sex));
    }

    Ok(records)
}

/// Parse text content into a pedigree
pub fn parse_pedigree(content: &str, config: &PedigreeConfig) -> Result<Pedigree> {
    let records = parse_records(content)?;
    Pedigree::from_records(&records, config)
}

/// Load a pedigree from a delimited text file
pub fn load_pedigree(path: &Path, config: &PedigreeConfig) -> Result<Pedigree> {
    let operation = OperationLog::start("Loading pedigree from", "loaded", path);

    let content = safe_read_to_string(path, "loading pedigree")?;
    let pedigree = parse_pedigree(&content, config).map_err(|e| e.with_path(path))?;

    operation.finish(pedigree.len());
    Ok(pedigree)
}
