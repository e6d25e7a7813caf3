//! Domain models for genealogical pedigrees
//!
//! This module contains the pedigree entity, its individuals, the flat record
//! form used for persistence and the matrix type used for tabular output.

pub mod individual;
pub mod matrix;
pub mod pedigree;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use individual::{Individual, IndividualRecord, UNKNOWN_PARENT};
pub use matrix::Matrix;
pub use pedigree::Pedigree;
pub use traits::ArrowSchema;
pub use types::Sex;
