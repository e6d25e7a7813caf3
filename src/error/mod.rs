//! Error handling for pedigree construction, description and persistence.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Specialized error type for pedigree operations
#[derive(Debug, Error)]
pub enum PedigreeError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Error converting between records and Arrow batches
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Malformed line in a text pedigree
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Missing or mistyped column
    #[error("Schema error: {0}")]
    Schema(String),
    /// Identifier that can never name an individual
    #[error("Invalid individual ID {0}: 0 is reserved for unknown parents")]
    InvalidId(i32),
    /// The same ID listed more than once
    #[error("Individual {0} is listed more than once")]
    DuplicateIndividual(i32),
    /// A parent that is not part of the pedigree
    #[error("Individual {child} refers to unknown parent {parent}")]
    UnknownParent { child: i32, parent: i32 },
    /// A queried ID that is not part of the pedigree
    #[error("Individual {0} is not part of the pedigree")]
    UnknownIndividual(i32),
    /// An individual recorded as its own father or mother
    #[error("Individual {0} is recorded as its own parent")]
    SelfParent(i32),
    /// A parent whose recorded sex contradicts its role
    #[error("Individual {parent} is recorded as the {role} of {child} but has an incompatible sex")]
    SexMismatch {
        parent: i32,
        child: i32,
        role: &'static str,
    },
    /// Parentage that loops back on itself
    #[error("Parentage cycle detected involving individual {0}")]
    Cycle(i32),
    /// Rows of unequal length
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
    /// Matrix access outside its bounds
    #[error("Index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
    /// Any error wrapped with a description of what was being done
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<PedigreeError>,
    },
}

impl PedigreeError {
    /// Wrap this error with a description of the failed operation
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Wrap this error with the path it relates to
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        self.context(format!("Path: {}", path.display()))
    }

    /// Create an IO error from a message
    pub fn io_error(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        Self::Io(io::Error::new(kind, message.into()))
    }

    /// Walk through any context wrappers to the underlying error
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<serde_arrow::Error> for PedigreeError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<serde_json::Error> for PedigreeError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}

/// Extension trait to attach path context to results
pub trait ResultExt<T> {
    /// Attach the path a failed operation was working on
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E: Into<PedigreeError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| e.into().with_path(&path.into()))
    }
}

/// Result type for pedigree operations
pub type Result<T> = std::result::Result<T, PedigreeError>;
