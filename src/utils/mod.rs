//! Shared utilities

pub mod logging;

pub use logging::{OperationLog, log_operation_complete, log_operation_start, log_warning};
