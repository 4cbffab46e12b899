// ============================================================
// Layer 2: InspectUseCase
// ============================================================
// Parses the input exactly like `convert` would, but writes
// nothing. Useful to check a file (field counts, numbers,
// capacity) and see which id each label will receive.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::loader::CsvDatasetLoader;
use crate::domain::{dataset::DatasetInfo, traits::DatasetSource};

pub struct InspectUseCase {
    input: PathBuf,
    num_features: usize,
    capacity: Option<usize>,
}

impl InspectUseCase {
    pub fn new(input: impl Into<PathBuf>, num_features: usize, capacity: Option<usize>) -> Self {
        Self {
            input: input.into(),
            num_features,
            capacity,
        }
    }

    pub fn execute(&self) -> Result<DatasetInfo> {
        let dataset = CsvDatasetLoader::new(&self.input)
            .with_num_features(self.num_features)
            .with_capacity(self.capacity)
            .load()
            .with_context(|| format!("Failed to inspect '{}'", self.input.display()))?;

        let info = dataset.info();
        tracing::info!(
            "'{}': {} samples, {} features, {} classes",
            self.input.display(),
            info.num_samples,
            info.num_features,
            info.num_classes
        );
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reports_counts_and_classes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("iris.data");
        fs::write(
            &input,
            "6.3,3.3,6.0,2.5,Iris-virginica\n5.1,3.5,1.4,0.2,Iris-setosa\n\n",
        )
        .unwrap();

        let info = InspectUseCase::new(&input, 4, Some(150)).execute().unwrap();

        assert_eq!(info.num_samples, 2);
        assert_eq!(info.num_classes, 2);
        assert_eq!(info.classes, vec!["Iris-virginica", "Iris-setosa"]);
        // Nothing but the input in the directory
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_input_fails_with_path() {
        let err = InspectUseCase::new("/definitely/not/here.data", 4, None)
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.data"));
    }
}
