//! Pedigree descriptors
//!
//! Counts, depths, path lengths, completeness, implex, occurrences and
//! coverage. Functions taking a slice of IDs return one value (or column) per
//! ID in the order given and fail with `UnknownIndividual` for IDs that are
//! not in the pedigree.

pub mod completeness;
pub mod counts;
pub mod occurrence;
pub mod paths;

pub use completeness::{
    completeness_variance, implex_variance, individual_completeness, individual_implex,
    mean_completeness, mean_implex,
};
pub use counts::{
    generation_depths, number_of_children, number_of_individuals, number_of_men,
    number_of_women, pedigree_depth,
};
pub use occurrence::{coverage, individual_occurrences, total_occurrences};
pub use paths::{
    max_ancestor_path_lengths, mean_ancestor_path_lengths, mean_pedigree_depth,
    mean_pedigree_depths, min_ancestor_path_lengths, min_common_ancestor_path_length,
    pedigree_depth_variance, pedigree_depth_variances,
};

use serde::Serialize;

use crate::error::Result;
use crate::models::Pedigree;

/// Headline figures for a pedigree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PedigreeSummary {
    pub individuals: usize,
    pub men: usize,
    pub women: usize,
    pub founders: usize,
    pub probands: usize,
    pub depth: usize,
    /// Mean expected genealogical depth of the probands
    pub mean_proband_depth: f64,
    /// Mean completeness of the probands' ancestry, by generation
    pub mean_completeness: Vec<f64>,
}

impl PedigreeSummary {
    /// Describe a pedigree, using every individual without children as a proband
    pub fn describe(pedigree: &Pedigree) -> Result<Self> {
        let probands = pedigree.proband_ids();
        Ok(Self {
            individuals: number_of_individuals(pedigree),
            men: number_of_men(pedigree),
            women: number_of_women(pedigree),
            founders: pedigree.founder_ids().len(),
            probands: probands.len(),
            depth: pedigree_depth(pedigree),
            mean_proband_depth: mean_pedigree_depth(pedigree, &probands)?,
            mean_completeness: mean_completeness(pedigree, &probands)?,
        })
    }

    /// Human-readable multi-line summary
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = String::from("Pedigree Summary:\n");
        report.push_str(&format!("  Individuals: {}\n", self.individuals));
        report.push_str(&format!("  Men: {}\n", self.men));
        report.push_str(&format!("  Women: {}\n", self.women));
        report.push_str(&format!("  Founders: {}\n", self.founders));
        report.push_str(&format!("  Probands: {}\n", self.probands));
        report.push_str(&format!("  Generations: {}\n", self.depth));
        report.push_str(&format!(
            "  Mean Genealogical Depth: {:.3}\n",
            self.mean_proband_depth
        ));
        for (generation, value) in self.mean_completeness.iter().enumerate() {
            report.push_str(&format!("  Completeness G{generation}: {value:.1}%\n"));
        }
        report
    }
}
