//! Genealogical path lengths and depths
//!
//! Path statistics are computed for the whole pedigree in one parents-first
//! pass and then selected for the requested individuals.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::error::{PedigreeError, Result};
use crate::models::Pedigree;

/// Statistics over every path from an individual up to the founders it descends from
#[derive(Debug, Clone, Copy, PartialEq)]
struct PathSummary {
    count: f64,
    total_length: f64,
    min: u32,
    max: u32,
}

impl PathSummary {
    const FOUNDER: Self = Self {
        count: 1.0,
        total_length: 0.0,
        min: 0,
        max: 0,
    };

    fn mean(&self) -> f64 {
        self.total_length / self.count
    }
}

fn path_summaries(pedigree: &Pedigree) -> Vec<PathSummary> {
    let mut summaries = vec![PathSummary::FOUNDER; pedigree.len()];
    for rank in pedigree.parents_first_order() {
        let individual = pedigree.individual(rank);
        if individual.is_founder() {
            continue;
        }
        let mut summary = PathSummary {
            count: 0.0,
            total_length: 0.0,
            min: u32::MAX,
            max: 0,
        };
        for parent in individual.parents() {
            let above = summaries[parent];
            summary.count += above.count;
            summary.total_length += above.total_length + above.count;
            summary.min = summary.min.min(above.min + 1);
            summary.max = summary.max.max(above.max + 1);
        }
        summaries[rank] = summary;
    }
    summaries
}

fn select<T: Copy>(pedigree: &Pedigree, ids: &[i32], values: &[T]) -> Result<Vec<T>> {
    Ok(pedigree
        .indices_of(ids)?
        .into_iter()
        .map(|rank| values[rank])
        .collect())
}

/// Shortest number of generations between each individual and a founder
pub fn min_ancestor_path_lengths(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<u32>> {
    let ranks = pedigree.indices_of(ids)?;
    let summaries = path_summaries(pedigree);
    Ok(ranks.into_iter().map(|rank| summaries[rank].min).collect())
}

/// Mean number of generations between each individual and its founders, over all paths
pub fn mean_ancestor_path_lengths(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<f64>> {
    let ranks = pedigree.indices_of(ids)?;
    let summaries = path_summaries(pedigree);
    Ok(ranks.into_iter().map(|rank| summaries[rank].mean()).collect())
}

/// Longest number of generations between each individual and a founder
pub fn max_ancestor_path_lengths(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<u32>> {
    let ranks = pedigree.indices_of(ids)?;
    let summaries = path_summaries(pedigree);
    Ok(ranks.into_iter().map(|rank| summaries[rank].max).collect())
}

/// Expected genealogical depth of each individual
///
/// Every ancestor occurrence `g` generations up contributes `0.5^g`.
pub fn mean_pedigree_depths(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<f64>> {
    let mut depths = vec![0.0_f64; pedigree.len()];
    for rank in pedigree.parents_first_order() {
        depths[rank] = pedigree
            .individual(rank)
            .parents()
            .map(|parent| 0.5 * (1.0 + depths[parent]))
            .sum();
    }
    select(pedigree, ids, &depths)
}

/// Mean expected genealogical depth over the given individuals, 0 when empty
pub fn mean_pedigree_depth(pedigree: &Pedigree, ids: &[i32]) -> Result<f64> {
    let depths = mean_pedigree_depths(pedigree, ids)?;
    if depths.is_empty() {
        return Ok(0.0);
    }
    Ok(depths.iter().sum::<f64>() / depths.len() as f64)
}

/// Variance of the genealogical depth of a group of probands
///
/// Walks up generation by generation, collecting parents with repetition.
/// Founders weigh fully and semi-founders by half, each scaled by `N * 2^g`.
pub fn pedigree_depth_variance(pedigree: &Pedigree, ids: &[i32]) -> Result<f64> {
    let ranks = pedigree.indices_of(ids)?;
    if ranks.is_empty() {
        return Ok(0.0);
    }
    let probands = ranks.len() as f64;

    let mut generation: FxHashMap<usize, f64> = FxHashMap::default();
    for rank in ranks {
        *generation.entry(rank).or_insert(0.0) += 1.0;
    }

    let mut mean = 0.0;
    let mut mean_square = 0.0;
    let mut number = 0_i32;
    while !generation.is_empty() {
        let weight = probands * 2_f64.powi(number);
        let g = f64::from(number);
        let mut next: FxHashMap<usize, f64> = FxHashMap::default();

        for (&rank, &multiplicity) in &generation {
            let individual = pedigree.individual(rank);
            let contribution = if individual.is_founder() {
                multiplicity
            } else if individual.is_semi_founder() {
                0.5 * multiplicity
            } else {
                0.0
            };
            mean += g * contribution / weight;
            mean_square += g * g * contribution / weight;

            for parent in individual.parents() {
                *next.entry(parent).or_insert(0.0) += multiplicity;
            }
        }

        generation = next;
        number += 1;
    }

    Ok(mean_square - mean * mean)
}

/// Depth variance of each individual taken alone
pub fn pedigree_depth_variances(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<f64>> {
    ids.iter()
        .map(|&id| pedigree_depth_variance(pedigree, &[id]))
        .collect()
}

/// Fewest generations from `rank` up to `ancestor`, if it is an ancestor (or itself)
fn generations_up(pedigree: &Pedigree, rank: usize, ancestor: usize) -> Option<u32> {
    let mut queue = VecDeque::from([(rank, 0_u32)]);
    let mut visited = rustc_hash::FxHashSet::default();
    while let Some((current, distance)) = queue.pop_front() {
        if current == ancestor {
            return Some(distance);
        }
        if !visited.insert(current) {
            continue;
        }
        for parent in pedigree.individual(current).parents() {
            queue.push_back((parent, distance + 1));
        }
    }
    None
}

/// Shortest genealogical distance between two individuals through a common ancestor
///
/// Returns `None` when `ancestor` is not in the ancestry of both individuals.
pub fn min_common_ancestor_path_length(
    pedigree: &Pedigree,
    first: i32,
    second: i32,
    ancestor: i32,
) -> Result<Option<u32>> {
    let lookup = |id| pedigree.index_of(id).ok_or(PedigreeError::UnknownIndividual(id));
    let (first, second, ancestor) = (lookup(first)?, lookup(second)?, lookup(ancestor)?);

    Ok(generations_up(pedigree, first, ancestor)
        .zip(generations_up(pedigree, second, ancestor))
        .map(|(up, down)| up + down))
}
