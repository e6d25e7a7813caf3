//! Completeness and implex indices per generation
//!
//! For each proband the ancestry is walked generation by generation, keeping
//! how many paths reach each ancestor. Completeness counts paths (ancestor
//! occurrences); implex counts distinct ancestors.

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;
use crate::models::{Matrix, Pedigree};

/// Ancestors of one proband by generation, with the number of paths reaching each
type GenerationProfile = Vec<FxHashMap<usize, u64>>;

fn generation_profile(pedigree: &Pedigree, rank: usize) -> GenerationProfile {
    let mut profile = Vec::new();
    let mut generation: FxHashMap<usize, u64> = FxHashMap::default();
    generation.insert(rank, 1);

    while !generation.is_empty() {
        let mut next: FxHashMap<usize, u64> = FxHashMap::default();
        for (&member, &paths) in &generation {
            for parent in pedigree.individual(member).parents() {
                let entry = next.entry(parent).or_insert(0);
                *entry = entry.saturating_add(paths);
            }
        }
        profile.push(generation);
        generation = next;
    }
    profile
}

fn profiles(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<GenerationProfile>> {
    let ranks = pedigree.indices_of(ids)?;
    Ok(ranks
        .par_iter()
        .map(|&rank| generation_profile(pedigree, rank))
        .collect())
}

/// Lay out per-proband series as a generations x probands matrix, padding with 0
fn to_matrix(series: Vec<Vec<f64>>) -> Matrix<f64> {
    let generations = series.iter().map(Vec::len).max().unwrap_or(0);
    let mut matrix = Matrix::new(generations, series.len());
    for (col, values) in series.into_iter().enumerate() {
        for (row, value) in values.into_iter().enumerate() {
            matrix[(row, col)] = value;
        }
    }
    matrix
}

fn percent_of_possible(count: f64, generation: usize) -> f64 {
    100.0 * count * 0.5_f64.powi(i32::try_from(generation).unwrap_or(i32::MAX))
}

/// Completeness of each proband's ancestry, generations x probands
///
/// Generation `g` holds `100 * paths_g / 2^g`; generation 0 is the proband.
pub fn individual_completeness(pedigree: &Pedigree, ids: &[i32]) -> Result<Matrix<f64>> {
    let series = profiles(pedigree, ids)?
        .into_iter()
        .map(|profile| {
            profile
                .iter()
                .enumerate()
                .map(|(g, generation)| {
                    let paths: u64 = generation.values().sum();
                    percent_of_possible(paths as f64, g)
                })
                .collect()
        })
        .collect();
    Ok(to_matrix(series))
}

/// Implex of each proband's ancestry, generations x probands
///
/// Generation `g` holds `100 * distinct_g / 2^g`. With `only_new_ancestors`
/// an ancestor is counted only in the first generation it appears in.
pub fn individual_implex(
    pedigree: &Pedigree,
    ids: &[i32],
    only_new_ancestors: bool,
) -> Result<Matrix<f64>> {
    let series = profiles(pedigree, ids)?
        .into_iter()
        .map(|profile| {
            let mut seen: FxHashSet<usize> = FxHashSet::default();
            profile
                .iter()
                .enumerate()
                .map(|(g, generation)| {
                    let distinct = if only_new_ancestors {
                        generation.keys().filter(|&&rank| seen.insert(rank)).count()
                    } else {
                        generation.len()
                    };
                    percent_of_possible(distinct as f64, g)
                })
                .collect()
        })
        .collect();
    Ok(to_matrix(series))
}

/// Mean of each generation (row) across probands
#[must_use]
pub fn row_means(matrix: &Matrix<f64>) -> Vec<f64> {
    matrix
        .iter_rows()
        .map(|row| {
            if row.is_empty() {
                f64::NAN
            } else {
                row.iter().sum::<f64>() / row.len() as f64
            }
        })
        .collect()
}

/// Sample variance (n - 1 denominator) of each generation across probands
///
/// Generations observed for fewer than two probands are NaN.
#[must_use]
pub fn row_variances(matrix: &Matrix<f64>) -> Vec<f64> {
    matrix
        .iter_rows()
        .map(|row| {
            if row.len() < 2 {
                return f64::NAN;
            }
            let n = row.len() as f64;
            let mean = row.iter().sum::<f64>() / n;
            row.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        })
        .collect()
}

/// Mean completeness per generation across probands
pub fn mean_completeness(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<f64>> {
    Ok(row_means(&individual_completeness(pedigree, ids)?))
}

/// Sample variance of completeness per generation across probands
pub fn completeness_variance(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<f64>> {
    Ok(row_variances(&individual_completeness(pedigree, ids)?))
}

/// Mean implex per generation across probands
pub fn mean_implex(pedigree: &Pedigree, ids: &[i32], only_new_ancestors: bool) -> Result<Vec<f64>> {
    Ok(row_means(&individual_implex(pedigree, ids, only_new_ancestors)?))
}

/// Sample variance of implex per generation across probands
pub fn implex_variance(
    pedigree: &Pedigree,
    ids: &[i32],
    only_new_ancestors: bool,
) -> Result<Vec<f64>> {
    Ok(row_variances(&individual_implex(pedigree, ids, only_new_ancestors)?))
}
