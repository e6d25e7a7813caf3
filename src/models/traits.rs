//! Trait definitions for domain models
//!
//! This module defines the Arrow conversion trait shared by the pedigree
//! record models.

use crate::error::Result;
use arrow_schema::{FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// A trait for models that can be converted to and from Arrow `RecordBatch`.
pub trait ArrowSchema: Sized {
    /// Get the Arrow schema for this model
    fn schema() -> Schema;

    /// Convert a `RecordBatch` to a vector of this model
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>>;

    /// Convert a slice of this model to a `RecordBatch`
    fn to_record_batch(models: &[Self]) -> Result<RecordBatch>;

    /// Get the schema as Arc<Schema>
    fn schema_ref() -> Arc<Schema> {
        Arc::new(Self::schema())
    }

    /// Get the schema fields as a vector of `FieldRef`
    fn fields() -> Vec<FieldRef> {
        Self::schema().fields().iter().map(Arc::clone).collect()
    }
}
