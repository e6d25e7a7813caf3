//! Algorithms over pedigrees
//!
//! Descriptors of pedigree structure and extraction of sub-pedigrees.

pub mod describe;
pub mod extract;

pub use describe::PedigreeSummary;
pub use extract::{ancestors_of, branching, descendants_of};
