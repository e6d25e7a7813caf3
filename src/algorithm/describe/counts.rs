//! Population counts and generation depths

use crate::error::Result;
use crate::models::{Pedigree, Sex};

/// Number of individuals in the pedigree
#[must_use]
pub fn number_of_individuals(pedigree: &Pedigree) -> usize {
    pedigree.len()
}

/// Number of men in the pedigree
#[must_use]
pub fn number_of_men(pedigree: &Pedigree) -> usize {
    pedigree.iter().filter(|ind| ind.sex == Sex::Male).count()
}

/// Number of women in the pedigree
#[must_use]
pub fn number_of_women(pedigree: &Pedigree) -> usize {
    pedigree.iter().filter(|ind| ind.sex == Sex::Female).count()
}

/// Generation depth of every individual, indexed by rank
///
/// Founders have depth 1; everyone else is one deeper than their deepest parent.
#[must_use]
pub fn generation_depths(pedigree: &Pedigree) -> Vec<usize> {
    let mut depths = vec![1_usize; pedigree.len()];
    for rank in pedigree.parents_first_order() {
        let individual = pedigree.individual(rank);
        if let Some(deepest) = individual.parents().map(|parent| depths[parent]).max() {
            depths[rank] = deepest + 1;
        }
    }
    depths
}

/// Number of generations in the pedigree, 0 when empty
#[must_use]
pub fn pedigree_depth(pedigree: &Pedigree) -> usize {
    generation_depths(pedigree).into_iter().max().unwrap_or(0)
}

/// Number of children of each of the given individuals
pub fn number_of_children(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<usize>> {
    Ok(pedigree
        .indices_of(ids)?
        .into_iter()
        .map(|rank| pedigree.individual(rank).children.len())
        .collect())
}
