use pedkit::{IndividualRecord, Pedigree, PedigreeConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generate a random acyclic pedigree as flat records
///
/// IDs run from 1 to `size`; the first `founders` individuals have no parents
/// and every later individual draws each parent from earlier individuals of
/// the matching sex with probability `parent_probability`.
pub fn random_records(
    seed: u64,
    size: i32,
    founders: i32,
    parent_probability: f64,
) -> Vec<IndividualRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut men = Vec::new();
    let mut women = Vec::new();
    let mut records = Vec::with_capacity(size as usize);

    for id in 1..=size {
        let sex = if id % 2 == 0 { 2 } else { 1 };
        let (mut father, mut mother) = (0, 0);
        if id > founders {
            if !men.is_empty() && rng.random_bool(parent_probability) {
                father = men[rng.random_range(0..men.len())];
            }
            if !women.is_empty() && rng.random_bool(parent_probability) {
                mother = women[rng.random_range(0..women.len())];
            }
        }
        records.push(IndividualRecord::new(id, father, mother, sex));
        if sex == 1 {
            men.push(id);
        } else {
            women.push(id);
        }
    }
    records
}

/// Random records in a shuffled order
pub fn shuffled_records(seed: u64, size: i32, founders: i32) -> Vec<IndividualRecord> {
    let mut records = random_records(seed, size, founders, 0.85);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    records.shuffle(&mut rng);
    records
}

/// A random pedigree built with the default configuration
pub fn random_pedigree(seed: u64, size: i32) -> Pedigree {
    let records = shuffled_records(seed, size, size / 10 + 2);
    Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap()
}
