//! Logging utilities
//!
//! This module provides standardized logging for file operations.

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Log an operation start with consistent format
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `path` - Path of the file that was operated on
/// * `items` - Number of individuals processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} individuals at {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} individuals at {}",
            operation,
            items,
            path.display()
        ),
    }
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Times a file operation, logging its start and completion
#[derive(Debug)]
pub struct OperationLog {
    operation: &'static str,
    path: PathBuf,
    start: Instant,
}

impl OperationLog {
    /// Log `start_message` and begin timing
    #[must_use]
    pub fn start(start_message: &str, operation: &'static str, path: &Path) -> Self {
        log_operation_start(start_message, path);
        Self {
            operation,
            path: path.to_path_buf(),
            start: Instant::now(),
        }
    }

    /// Log completion with the number of individuals handled
    pub fn finish(self, items: usize) {
        log_operation_complete(self.operation, &self.path, items, Some(self.start.elapsed()));
    }
}
