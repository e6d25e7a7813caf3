#[cfg(test)]
mod tests {
    use crate::utils::random_pedigree;
    use pedkit::algorithm::describe::*;
    use pedkit::branching;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_men_and_women_add_up() {
        let pedigree = random_pedigree(31, 300);
        assert_eq!(
            number_of_men(&pedigree) + number_of_women(&pedigree),
            number_of_individuals(&pedigree)
        );
    }

    #[test]
    fn test_path_length_ordering() {
        let pedigree = random_pedigree(32, 400);
        let ids: Vec<i32> = pedigree.iter().map(|ind| ind.id).collect();
        let min = min_ancestor_path_lengths(&pedigree, &ids).unwrap();
        let mean = mean_ancestor_path_lengths(&pedigree, &ids).unwrap();
        let max = max_ancestor_path_lengths(&pedigree, &ids).unwrap();
        let depth = pedigree_depth(&pedigree);

        for i in 0..ids.len() {
            assert!(f64::from(min[i]) <= mean[i] + EPSILON);
            assert!(mean[i] <= f64::from(max[i]) + EPSILON);
            assert!((max[i] as usize) < depth);
        }
    }

    #[test]
    fn test_depth_variance_with_semi_founders() {
        let pedigree = random_pedigree(36, 300);
        assert!(pedigree.iter().any(|ind| ind.is_semi_founder()));

        let probands = pedigree.proband_ids();
        let each = pedigree_depth_variances(&pedigree, &probands).unwrap();
        for (id, variance) in probands.iter().zip(&each) {
            assert!(*variance >= -EPSILON);
            let alone = pedigree_depth_variance(&pedigree, &[*id]).unwrap();
            assert!((alone - variance).abs() < EPSILON);
        }
        assert!(pedigree_depth_variance(&pedigree, &probands).unwrap() >= -EPSILON);
    }

    #[test]
    fn test_expected_depth_is_sum_of_completeness() {
        let pedigree = random_pedigree(33, 400);
        let probands = pedigree.proband_ids();
        let depths = mean_pedigree_depths(&pedigree, &probands).unwrap();
        let completeness = individual_completeness(&pedigree, &probands).unwrap();

        for (col, depth) in depths.iter().enumerate() {
            let from_completeness: f64 = completeness
                .column(col)
                .iter()
                .skip(1)
                .map(|percent| percent / 100.0)
                .sum();
            assert!((depth - from_completeness).abs() < EPSILON);
        }
    }

    #[test]
    fn test_implex_never_exceeds_completeness() {
        let pedigree = random_pedigree(34, 300);
        let probands = pedigree.proband_ids();
        let completeness = individual_completeness(&pedigree, &probands).unwrap();
        let implex = individual_implex(&pedigree, &probands, false).unwrap();
        let new_only = individual_implex(&pedigree, &probands, true).unwrap();

        for ((c, i), n) in completeness
            .as_slice()
            .iter()
            .zip(implex.as_slice())
            .zip(new_only.as_slice())
        {
            assert!(*i <= *c + EPSILON);
            assert!(*n <= *i + EPSILON);
            assert!(*c <= 100.0 + EPSILON);
        }
    }

    #[test]
    fn test_coverage_matches_occurrences() {
        let pedigree = random_pedigree(35, 250);
        let probands = pedigree.proband_ids();
        let founders = pedigree.founder_ids();

        let occurrences = individual_occurrences(&pedigree, &founders, &probands).unwrap();
        let covered = coverage(&pedigree, &probands, &founders).unwrap();
        for (row, count) in occurrences.iter_rows().zip(covered) {
            assert_eq!(row.iter().filter(|&&paths| paths > 0).count(), count);
        }
    }

    #[test]
    fn test_branching_keeps_proband_descriptors() {
        let pedigree = random_pedigree(36, 300);
        let proband = pedigree.proband_ids()[0];
        let branch = branching(&pedigree, Some(&[proband][..]), None).unwrap();

        assert_eq!(
            mean_pedigree_depths(&branch, &[proband]).unwrap(),
            mean_pedigree_depths(&pedigree, &[proband]).unwrap()
        );
        assert_eq!(
            individual_completeness(&branch, &[proband]).unwrap(),
            individual_completeness(&pedigree, &[proband]).unwrap()
        );
        assert_eq!(branch.proband_ids(), vec![proband]);
    }

    #[test]
    fn test_summary_describes_random_pedigree() {
        let pedigree = random_pedigree(37, 200);
        let summary = PedigreeSummary::describe(&pedigree).unwrap();
        assert_eq!(summary.individuals, 200);
        assert_eq!(summary.founders, pedigree.founder_ids().len());
        assert_eq!(summary.mean_completeness.first().copied(), Some(100.0));
    }
}
