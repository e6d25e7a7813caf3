//! Individual entity model
//!
//! An `Individual` is a node of a `Pedigree`: parents and children are stored
//! as indices into the owning pedigree. `IndividualRecord` is the flat
//! `ind, father, mother, sex` row used by every file format.

use crate::error::{PedigreeError, Result};
use crate::models::traits::ArrowSchema;
use crate::models::types::Sex;
use arrow::array::{Array, ArrayRef, AsArray, Int32Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Int32Type, Schema};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

/// Parent ID used for unknown parents in flat records
pub const UNKNOWN_PARENT: i32 = 0;

/// Flat pedigree row: individual ID, father ID, mother ID and sex code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndividualRecord {
    /// Individual ID
    pub ind: i32,
    /// Father ID, 0 if unknown
    pub father: i32,
    /// Mother ID, 0 if unknown
    pub mother: i32,
    /// Sex code (0 unknown, 1 male, 2 female)
    pub sex: i32,
}

impl IndividualRecord {
    #[must_use]
    pub const fn new(ind: i32, father: i32, mother: i32, sex: i32) -> Self {
        Self {
            ind,
            father,
            mother,
            sex,
        }
    }

    /// Father ID, or `None` if unknown
    #[must_use]
    pub const fn father_id(&self) -> Option<i32> {
        if self.father == UNKNOWN_PARENT {
            None
        } else {
            Some(self.father)
        }
    }

    /// Mother ID, or `None` if unknown
    #[must_use]
    pub const fn mother_id(&self) -> Option<i32> {
        if self.mother == UNKNOWN_PARENT {
            None
        } else {
            Some(self.mother)
        }
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        Sex::from(self.sex)
    }
}

impl ArrowSchema for IndividualRecord {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("ind", DataType::Int32, false),
            Field::new("father", DataType::Int32, false),
            Field::new("mother", DataType::Int32, false),
            Field::new("sex", DataType::Int32, false),
        ])
    }

    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let normalized = normalize_batch(batch)?;
        let records: Vec<Self> = serde_arrow::from_record_batch(&normalized)?;
        Ok(records)
    }

    fn to_record_batch(records: &[Self]) -> Result<RecordBatch> {
        let fields = Self::fields();
        Ok(serde_arrow::to_record_batch(&fields, &records)?)
    }
}

/// Project a batch onto the four pedigree columns as non-null `Int32`
///
/// Integer columns of any width are cast; null parents and sexes become 0.
fn normalize_batch(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(4);
    for field in IndividualRecord::schema().fields() {
        let name = field.name();
        let column = batch
            .column_by_name(name)
            .ok_or_else(|| PedigreeError::Schema(format!("Missing required column '{name}'")))?;
        if !column.data_type().is_integer() {
            return Err(PedigreeError::Schema(format!(
                "Column '{name}' has type {}, expected an integer type",
                column.data_type()
            )));
        }

        let cast_column = cast(column, &DataType::Int32)?;
        let values = cast_column.as_primitive::<Int32Type>();
        if name == "ind" && values.null_count() > 0 {
            return Err(PedigreeError::Schema(
                "Column 'ind' must not contain nulls".to_string(),
            ));
        }
        let filled = Int32Array::from_iter_values(
            values.iter().map(|value| value.unwrap_or(UNKNOWN_PARENT)),
        );
        columns.push(Arc::new(filled));
    }

    Ok(RecordBatch::try_new(IndividualRecord::schema_ref(), columns)?)
}

/// A member of a pedigree, linked to its relatives by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Individual ID
    pub id: i32,
    /// Index of the father in the pedigree
    pub father: Option<usize>,
    /// Index of the mother in the pedigree
    pub mother: Option<usize>,
    /// Sex of the individual
    pub sex: Sex,
    /// Indices of the children in the pedigree, in pedigree order
    pub children: SmallVec<[usize; 4]>,
    /// Position in pedigree order
    pub rank: usize,
}

impl Individual {
    #[must_use]
    pub fn new(id: i32, sex: Sex, rank: usize) -> Self {
        Self {
            id,
            father: None,
            mother: None,
            sex,
            children: SmallVec::new(),
            rank,
        }
    }

    /// Known parents, father first
    pub fn parents(&self) -> impl Iterator<Item = usize> + '_ {
        self.father.into_iter().chain(self.mother)
    }

    /// No known parent
    #[must_use]
    pub const fn is_founder(&self) -> bool {
        self.father.is_none() && self.mother.is_none()
    }

    /// Exactly one known parent
    #[must_use]
    pub const fn is_semi_founder(&self) -> bool {
        self.father.is_none() != self.mother.is_none()
    }

    /// No children
    #[must_use]
    pub fn is_proband(&self) -> bool {
        self.children.is_empty()
    }
}
