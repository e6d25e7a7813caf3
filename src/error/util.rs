//! Utility functions for error handling
//!
//! This module provides file helpers that attach the path and purpose of an
//! operation to any IO failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PedigreeError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(PedigreeError::io_error(io::ErrorKind::NotFound, "File not found")
            .with_path(path)
            .context(format!("Needed for: {purpose}")));
    }

    if !path.is_file() {
        return Err(
            PedigreeError::io_error(io::ErrorKind::InvalidInput, "Path is not a file")
                .with_path(path)
                .context(format!("Expected a file for: {purpose}")),
        );
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        PedigreeError::from(e).with_path(path).context(context)
    })
}

/// Create (or truncate) a file for writing with rich error information
///
/// The parent directory must already exist.
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(PedigreeError::io_error(
                io::ErrorKind::NotFound,
                "Parent directory does not exist",
            )
            .with_path(path)
            .context(format!("Needed for: {purpose}")));
        }
    }

    fs::File::create(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            _ => format!("Failed to create file for: {purpose}"),
        };
        PedigreeError::from(e).with_path(path).context(context)
    })
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for: {purpose}"),
            };
            Err(PedigreeError::from(e).with_path(path).context(context))
        }
    }
}
