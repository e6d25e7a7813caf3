//! Logging utilities for file operations and progress tracking

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{OperationLog, log_operation_complete, log_operation_start, log_warning};
pub use progress::{create_spinner, finish_progress_bar};
