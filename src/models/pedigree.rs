//! Pedigree model
//!
//! A `Pedigree` owns its individuals in pedigree order and resolves parent
//! and child links by index. Construction validates the records and, unless
//! disabled, sorts individuals so that every parent precedes its children.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::PedigreeConfig;
use crate::error::{PedigreeError, Result};
use crate::models::individual::{Individual, IndividualRecord, UNKNOWN_PARENT};
use crate::models::types::Sex;

/// A genealogy: individuals linked to their parents and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pedigree {
    individuals: Vec<Individual>,
    index: FxHashMap<i32, usize>,
}

impl Pedigree {
    /// Build a pedigree from flat records
    ///
    /// # Errors
    /// Returns an error if an ID is 0 or duplicated, a parent is missing (and
    /// `add_missing_parents` is off), an individual is its own parent, a
    /// parent's sex contradicts its role (with `validate_sex`), or the
    /// parentage contains a cycle.
    pub fn from_records(records: &[IndividualRecord], config: &PedigreeConfig) -> Result<Self> {
        let mut records = records.to_vec();

        let mut index: FxHashMap<i32, usize> =
            FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
        for (position, record) in records.iter().enumerate() {
            if record.ind == UNKNOWN_PARENT {
                return Err(PedigreeError::InvalidId(record.ind));
            }
            if index.insert(record.ind, position).is_some() {
                return Err(PedigreeError::DuplicateIndividual(record.ind));
            }
        }

        Self::resolve_missing_parents(&mut records, &mut index, config)?;

        if config.validate_sex {
            for record in &records {
                if let Some(father) = record.father_id() {
                    if !records[index[&father]].sex().can_be_father() {
                        return Err(PedigreeError::SexMismatch {
                            parent: father,
                            child: record.ind,
                            role: "father",
                        });
                    }
                }
                if let Some(mother) = record.mother_id() {
                    if !records[index[&mother]].sex().can_be_mother() {
                        return Err(PedigreeError::SexMismatch {
                            parent: mother,
                            child: record.ind,
                            role: "mother",
                        });
                    }
                }
            }
        }

        let order = Self::topological_order(&records, &index)?;
        let order = if config.sort {
            order
        } else {
            (0..records.len()).collect()
        };

        let pedigree = Self::link(&records, &order);
        log::debug!(
            "Built pedigree with {} individuals ({} founders)",
            pedigree.len(),
            pedigree.iter().filter(|ind| ind.is_founder()).count()
        );
        Ok(pedigree)
    }

    /// Check parents exist, appending founders for missing ones when allowed
    fn resolve_missing_parents(
        records: &mut Vec<IndividualRecord>,
        index: &mut FxHashMap<i32, usize>,
        config: &PedigreeConfig,
    ) -> Result<()> {
        let listed = records.len();
        for position in 0..listed {
            let record = records[position];
            if record.father_id().is_some() && record.father == record.mother {
                return Err(PedigreeError::SexMismatch {
                    parent: record.father,
                    child: record.ind,
                    role: "father and mother",
                });
            }
            for (parent, sex) in [
                (record.father_id(), Sex::Male),
                (record.mother_id(), Sex::Female),
            ] {
                let Some(parent) = parent else { continue };
                if parent == record.ind {
                    return Err(PedigreeError::SelfParent(record.ind));
                }
                if index.contains_key(&parent) {
                    continue;
                }
                if !config.add_missing_parents {
                    return Err(PedigreeError::UnknownParent {
                        child: record.ind,
                        parent,
                    });
                }
                log::debug!("Adding missing parent {parent} of {} as a founder", record.ind);
                index.insert(parent, records.len());
                records.push(IndividualRecord::new(
                    parent,
                    UNKNOWN_PARENT,
                    UNKNOWN_PARENT,
                    sex.code(),
                ));
            }
        }
        Ok(())
    }

    /// Stable parents-first order; fails on cycles
    fn topological_order(
        records: &[IndividualRecord],
        index: &FxHashMap<i32, usize>,
    ) -> Result<Vec<usize>> {
        let mut pending_parents = vec![0_u8; records.len()];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
        for (position, record) in records.iter().enumerate() {
            for parent in [record.father_id(), record.mother_id()].into_iter().flatten() {
                children[index[&parent]].push(position);
                pending_parents[position] += 1;
            }
        }

        let mut ready: BTreeSet<usize> = pending_parents
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == 0)
            .map(|(position, _)| position)
            .collect();
        let mut order = Vec::with_capacity(records.len());

        while let Some(position) = ready.pop_first() {
            order.push(position);
            for &child in &children[position] {
                pending_parents[child] -= 1;
                if pending_parents[child] == 0 {
                    ready.insert(child);
                }
            }
        }

        if order.len() < records.len() {
            let stuck = pending_parents
                .iter()
                .position(|&count| count > 0)
                .map_or(UNKNOWN_PARENT, |position| {
                    records[Self::cycle_member(records, index, &pending_parents, position)].ind
                });
            return Err(PedigreeError::Cycle(stuck));
        }
        Ok(order)
    }

    /// Walk unresolved parent links from `start` until a record repeats
    ///
    /// Every record left with pending parents has a parent that is also
    /// unresolved, so the walk always closes on a cycle.
    fn cycle_member(
        records: &[IndividualRecord],
        index: &FxHashMap<i32, usize>,
        pending_parents: &[u8],
        start: usize,
    ) -> usize {
        let mut visited = FxHashSet::default();
        let mut current = start;
        while visited.insert(current) {
            let record = &records[current];
            let next = [record.father_id(), record.mother_id()]
                .into_iter()
                .flatten()
                .map(|parent| index[&parent])
                .find(|&parent| pending_parents[parent] > 0);
            match next {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current
    }

    /// Materialize individuals in the given order with index links
    fn link(records: &[IndividualRecord], order: &[usize]) -> Self {
        let mut individuals: Vec<Individual> = order
            .iter()
            .enumerate()
            .map(|(rank, &position)| {
                let record = &records[position];
                Individual::new(record.ind, record.sex(), rank)
            })
            .collect();

        let mut index: FxHashMap<i32, usize> =
            FxHashMap::with_capacity_and_hasher(individuals.len(), Default::default());
        for (rank, individual) in individuals.iter().enumerate() {
            index.insert(individual.id, rank);
        }

        for (rank, &position) in order.iter().enumerate() {
            let record = &records[position];
            let father = record.father_id().map(|id| index[&id]);
            let mother = record.mother_id().map(|id| index[&id]);
            individuals[rank].father = father;
            individuals[rank].mother = mother;
            for parent in father.into_iter().chain(mother) {
                individuals[parent].children.push(rank);
            }
        }

        Self { individuals, index }
    }

    /// Number of individuals
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Look up an individual by ID
    #[must_use]
    pub fn get(&self, id: i32) -> Option<&Individual> {
        self.index.get(&id).map(|&rank| &self.individuals[rank])
    }

    /// Position of an individual in pedigree order
    #[must_use]
    pub fn index_of(&self, id: i32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Positions of the given individuals
    ///
    /// # Errors
    /// Returns `UnknownIndividual` for the first ID not in the pedigree.
    pub fn indices_of(&self, ids: &[i32]) -> Result<Vec<usize>> {
        ids.iter()
            .map(|&id| self.index_of(id).ok_or(PedigreeError::UnknownIndividual(id)))
            .collect()
    }

    /// Individual at a position in pedigree order
    ///
    /// # Panics
    /// Panics if `rank` is out of bounds.
    #[must_use]
    pub fn individual(&self, rank: usize) -> &Individual {
        &self.individuals[rank]
    }

    /// All individuals in pedigree order
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    fn require(&self, id: i32) -> Result<&Individual> {
        self.get(id).ok_or(PedigreeError::UnknownIndividual(id))
    }

    /// Father's ID, `None` if unknown
    pub fn father_id(&self, id: i32) -> Result<Option<i32>> {
        Ok(self.require(id)?.father.map(|rank| self.individuals[rank].id))
    }

    /// Mother's ID, `None` if unknown
    pub fn mother_id(&self, id: i32) -> Result<Option<i32>> {
        Ok(self.require(id)?.mother.map(|rank| self.individuals[rank].id))
    }

    /// Children's IDs in pedigree order
    pub fn children_ids(&self, id: i32) -> Result<Vec<i32>> {
        Ok(self
            .require(id)?
            .children
            .iter()
            .map(|&rank| self.individuals[rank].id)
            .collect())
    }

    /// IDs of individuals without children, in pedigree order
    #[must_use]
    pub fn proband_ids(&self) -> Vec<i32> {
        self.iter()
            .filter(|ind| ind.is_proband())
            .map(|ind| ind.id)
            .collect()
    }

    /// IDs of individuals without any known parent, in pedigree order
    #[must_use]
    pub fn founder_ids(&self) -> Vec<i32> {
        self.iter()
            .filter(|ind| ind.is_founder())
            .map(|ind| ind.id)
            .collect()
    }

    /// Flat records in pedigree order
    #[must_use]
    pub fn to_records(&self) -> Vec<IndividualRecord> {
        self.iter()
            .map(|ind| {
                IndividualRecord::new(
                    ind.id,
                    ind.father.map_or(UNKNOWN_PARENT, |rank| self.individuals[rank].id),
                    ind.mother.map_or(UNKNOWN_PARENT, |rank| self.individuals[rank].id),
                    ind.sex.code(),
                )
            })
            .collect()
    }

    /// Ranks of the given individuals and all their ancestors
    #[must_use]
    pub fn ancestry(&self, ranks: &[usize]) -> FxHashSet<usize> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<usize> = ranks.to_vec();
        while let Some(rank) = stack.pop() {
            if seen.insert(rank) {
                stack.extend(self.individuals[rank].parents());
            }
        }
        seen
    }

    /// Ranks of the given individuals and all their descendants
    #[must_use]
    pub fn descent(&self, ranks: &[usize]) -> FxHashSet<usize> {
        let mut seen = FxHashSet::default();
        let mut stack: Vec<usize> = ranks.to_vec();
        while let Some(rank) = stack.pop() {
            if seen.insert(rank) {
                stack.extend(self.individuals[rank].children.iter().copied());
            }
        }
        seen
    }

    /// Whether every known parent precedes its children
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.iter()
            .all(|ind| ind.parents().all(|parent| parent < ind.rank))
    }

    /// Ranks ordered so that every parent comes before its children
    ///
    /// This is the identity for sorted pedigrees.
    #[must_use]
    pub fn parents_first_order(&self) -> Vec<usize> {
        if self.is_sorted() {
            return (0..self.len()).collect();
        }

        let mut pending: Vec<usize> = self.iter().map(|ind| ind.parents().count()).collect();
        let mut ready: BTreeSet<usize> = pending
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == 0)
            .map(|(rank, _)| rank)
            .collect();
        let mut order = Vec::with_capacity(self.len());
        while let Some(rank) = ready.pop_first() {
            order.push(rank);
            for &child in &self.individuals[rank].children {
                pending[child] -= 1;
                if pending[child] == 0 {
                    ready.insert(child);
                }
            }
        }
        order
    }
}

impl<'a> IntoIterator for &'a Pedigree {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
