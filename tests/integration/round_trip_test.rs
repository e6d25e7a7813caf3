#[cfg(test)]
mod tests {
    use crate::utils::random_pedigree;
    use pedkit::{
        PedigreeConfig, SaveConfig, load_pedigree, load_pedigree_auto, load_pedigree_parquet,
        load_pedigree_parquet_async, output_pedigree, save_pedigree, save_pedigree_parquet,
        save_pedigree_with,
    };

    #[test]
    fn test_text_round_trip_preserves_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.tsv");
        let pedigree = random_pedigree(21, 500);

        save_pedigree(&pedigree, &path).unwrap();
        let loaded = load_pedigree(&path, &PedigreeConfig::default()).unwrap();

        assert_eq!(loaded, pedigree);
        assert_eq!(output_pedigree(&loaded), output_pedigree(&pedigree));
    }

    #[test]
    fn test_csv_without_header_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.csv");
        let pedigree = random_pedigree(22, 120);
        let config = SaveConfig {
            delimiter: ',',
            header: false,
        };

        save_pedigree_with(&pedigree, &path, &config).unwrap();
        let loaded = load_pedigree_auto(&path, &PedigreeConfig::default()).unwrap();
        assert_eq!(loaded, pedigree);
    }

    #[test]
    fn test_parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.parquet");
        let pedigree = random_pedigree(23, 400);

        save_pedigree_parquet(&pedigree, &path).unwrap();
        let loaded = load_pedigree_parquet(&path, &PedigreeConfig::default()).unwrap();
        assert_eq!(loaded, pedigree);

        let auto = load_pedigree_auto(&path, &PedigreeConfig::default()).unwrap();
        assert_eq!(auto, pedigree);
    }

    #[tokio::test]
    async fn test_async_parquet_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pedigree.parquet");
        let pedigree = random_pedigree(24, 300);

        save_pedigree_parquet(&pedigree, &path).unwrap();
        let loaded = load_pedigree_parquet_async(&path, &PedigreeConfig::default())
            .await
            .unwrap();
        assert_eq!(loaded, pedigree);
    }

    #[test]
    fn test_matrix_rows_follow_pedigree_order() {
        let pedigree = random_pedigree(25, 80);
        let matrix = output_pedigree(&pedigree);

        assert_eq!(matrix.rows(), pedigree.len());
        assert_eq!(matrix.cols(), 4);
        for (row, individual) in matrix.iter_rows().zip(&pedigree) {
            assert_eq!(row[0], individual.id);
            assert_eq!(row[1], pedigree.father_id(individual.id).unwrap().unwrap_or(0));
            assert_eq!(row[2], pedigree.mother_id(individual.id).unwrap().unwrap_or(0));
            assert_eq!(row[3], individual.sex.code());
        }
    }
}
