//! Ancestor occurrences and coverage

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::{Matrix, Pedigree};

/// Number of paths from `proband` up to each of its ancestors (itself included)
///
/// `position` gives each rank's place in parents-first order, so visiting the
/// ancestry from the highest position down handles children before parents.
fn path_counts(pedigree: &Pedigree, proband: usize, position: &[usize]) -> FxHashMap<usize, u64> {
    let mut ancestry: Vec<usize> = pedigree.ancestry(&[proband]).into_iter().collect();
    ancestry.sort_unstable_by_key(|&rank| std::cmp::Reverse(position[rank]));

    let mut counts: FxHashMap<usize, u64> = FxHashMap::default();
    counts.insert(proband, 1);
    for rank in ancestry {
        let paths = counts.get(&rank).copied().unwrap_or(0);
        for parent in pedigree.individual(rank).parents() {
            let entry = counts.entry(parent).or_insert(0);
            *entry = entry.saturating_add(paths);
        }
    }
    counts
}

fn positions(pedigree: &Pedigree) -> Vec<usize> {
    let mut position = vec![0; pedigree.len()];
    for (place, rank) in pedigree.parents_first_order().into_iter().enumerate() {
        position[rank] = place;
    }
    position
}

/// Occurrences of each ancestor in the genealogy of each proband, ancestors x probands
///
/// An occurrence is a distinct path from the proband up to the ancestor.
pub fn individual_occurrences(
    pedigree: &Pedigree,
    ancestors: &[i32],
    probands: &[i32],
) -> Result<Matrix<u64>> {
    let ancestor_ranks = pedigree.indices_of(ancestors)?;
    let proband_ranks = pedigree.indices_of(probands)?;
    let position = positions(pedigree);

    let columns: Vec<Vec<u64>> = proband_ranks
        .par_iter()
        .map(|&proband| {
            let counts = path_counts(pedigree, proband, &position);
            ancestor_ranks
                .iter()
                .map(|rank| counts.get(rank).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    let mut matrix = Matrix::new(ancestor_ranks.len(), proband_ranks.len());
    for (col, column) in columns.into_iter().enumerate() {
        for (row, count) in column.into_iter().enumerate() {
            matrix[(row, col)] = count;
        }
    }
    Ok(matrix)
}

/// Occurrences of each ancestor summed over all probands
pub fn total_occurrences(
    pedigree: &Pedigree,
    ancestors: &[i32],
    probands: &[i32],
) -> Result<Vec<u64>> {
    let matrix = individual_occurrences(pedigree, ancestors, probands)?;
    Ok(matrix
        .iter_rows()
        .map(|row| row.iter().fold(0_u64, |sum, &count| sum.saturating_add(count)))
        .collect())
}

/// Number of probands descending from (or equal to) each ancestor
pub fn coverage(pedigree: &Pedigree, probands: &[i32], ancestors: &[i32]) -> Result<Vec<usize>> {
    let proband_ranks = pedigree.indices_of(probands)?;
    let ancestor_ranks = pedigree.indices_of(ancestors)?;

    let ancestries: Vec<_> = proband_ranks
        .par_iter()
        .map(|&proband| pedigree.ancestry(&[proband]))
        .collect();

    Ok(ancestor_ranks
        .iter()
        .map(|rank| {
            ancestries
                .iter()
                .filter(|ancestry| ancestry.contains(rank))
                .count()
        })
        .collect())
}
