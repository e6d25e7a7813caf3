//! Sub-pedigree extraction

use rustc_hash::FxHashSet;

use crate::config::PedigreeConfig;
use crate::error::Result;
use crate::models::{IndividualRecord, Pedigree, UNKNOWN_PARENT};

/// IDs of the given individuals and all their ancestors, in pedigree order
pub fn ancestors_of(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<i32>> {
    let ranks = pedigree.indices_of(ids)?;
    Ok(in_pedigree_order(pedigree, &pedigree.ancestry(&ranks)))
}

/// IDs of the given individuals and all their descendants, in pedigree order
pub fn descendants_of(pedigree: &Pedigree, ids: &[i32]) -> Result<Vec<i32>> {
    let ranks = pedigree.indices_of(ids)?;
    Ok(in_pedigree_order(pedigree, &pedigree.descent(&ranks)))
}

fn in_pedigree_order(pedigree: &Pedigree, ranks: &FxHashSet<usize>) -> Vec<i32> {
    pedigree
        .iter()
        .filter(|ind| ranks.contains(&ind.rank))
        .map(|ind| ind.id)
        .collect()
}

/// Extract the branches linking probands to ancestors
///
/// Keeps every individual that is an ancestor (or self) of a proband and a
/// descendant (or self) of an ancestor. Probands default to all individuals
/// without children and ancestors to all founders. Links to parents outside
/// the branch are dropped.
pub fn branching(
    pedigree: &Pedigree,
    probands: Option<&[i32]>,
    ancestors: Option<&[i32]>,
) -> Result<Pedigree> {
    let proband_ids = probands.map_or_else(|| pedigree.proband_ids(), <[i32]>::to_vec);
    let ancestor_ids = ancestors.map_or_else(|| pedigree.founder_ids(), <[i32]>::to_vec);

    let upward = pedigree.ancestry(&pedigree.indices_of(&proband_ids)?);
    let downward = pedigree.descent(&pedigree.indices_of(&ancestor_ids)?);

    let kept = |rank: usize| upward.contains(&rank) && downward.contains(&rank);
    let parent_id = |parent: Option<usize>| {
        parent
            .filter(|&rank| kept(rank))
            .map_or(UNKNOWN_PARENT, |rank| pedigree.individual(rank).id)
    };

    let records: Vec<IndividualRecord> = pedigree
        .iter()
        .filter(|ind| kept(ind.rank))
        .map(|ind| {
            IndividualRecord::new(
                ind.id,
                parent_id(ind.father),
                parent_id(ind.mother),
                ind.sex.code(),
            )
        })
        .collect();

    log::debug!(
        "Branching kept {} of {} individuals",
        records.len(),
        pedigree.len()
    );

    // The source pedigree is already validated; keep its order as is.
    let config = PedigreeConfig {
        sort: false,
        add_missing_parents: false,
        validate_sex: false,
        ..PedigreeConfig::default()
    };
    Pedigree::from_records(&records, &config)
}
