#[cfg(test)]
mod tests {
    use crate::utils::{random_pedigree, random_records, shuffled_records};
    use pedkit::{IndividualRecord, Pedigree, PedigreeConfig, PedigreeError, Sex};
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_input_is_sorted_parents_first() {
        for seed in 0..5 {
            let records = shuffled_records(seed, 300, 20);
            let pedigree = Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap();

            assert_eq!(pedigree.len(), 300);
            assert!(pedigree.is_sorted());
            for individual in &pedigree {
                for parent in individual.parents() {
                    assert!(parent < individual.rank);
                    assert!(pedigree.individual(parent).children.contains(&individual.rank));
                }
            }
        }
    }

    #[test]
    fn test_records_survive_construction() {
        let records = shuffled_records(11, 200, 15);
        let pedigree = Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap();

        let before: HashSet<IndividualRecord> = records.into_iter().collect();
        let after: HashSet<IndividualRecord> = pedigree.to_records().into_iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_is_stable_for_sorted_input() {
        let records = random_records(3, 100, 10, 0.9);
        let pedigree = Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap();
        let ids: Vec<i32> = pedigree.iter().map(|ind| ind.id).collect();
        let expected: Vec<i32> = (1..=100).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_probands_and_founders_partition_roles() {
        let pedigree = random_pedigree(5, 250);
        for id in pedigree.proband_ids() {
            assert!(pedigree.children_ids(id).unwrap().is_empty());
        }
        for id in pedigree.founder_ids() {
            assert_eq!(pedigree.father_id(id).unwrap(), None);
            assert_eq!(pedigree.mother_id(id).unwrap(), None);
        }
    }

    #[test]
    fn test_parent_sexes_are_consistent() {
        let pedigree = random_pedigree(8, 150);
        for individual in &pedigree {
            if let Some(father) = individual.father {
                assert_eq!(pedigree.individual(father).sex, Sex::Male);
            }
            if let Some(mother) = individual.mother {
                assert_eq!(pedigree.individual(mother).sex, Sex::Female);
            }
        }
    }

    #[test]
    fn test_missing_parent_policy() {
        let records = [IndividualRecord::new(10, 20, 0, 1)];
        let err = Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap_err();
        assert!(matches!(err, PedigreeError::UnknownParent { child: 10, parent: 20 }));

        let config = PedigreeConfig {
            add_missing_parents: true,
            ..PedigreeConfig::default()
        };
        let pedigree = Pedigree::from_records(&records, &config).unwrap();
        assert_eq!(pedigree.father_id(10).unwrap(), Some(20));
        assert_eq!(pedigree.index_of(20), Some(0));
    }

    #[test]
    fn test_same_parent_for_both_roles_is_rejected() {
        let records = [
            IndividualRecord::new(1, 0, 0, 0),
            IndividualRecord::new(2, 1, 1, 0),
        ];
        let err = Pedigree::from_records(&records, &PedigreeConfig::default()).unwrap_err();
        assert!(matches!(err, PedigreeError::SexMismatch { parent: 1, child: 2, .. }));
    }
}
