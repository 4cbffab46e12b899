// ============================================================
// Layer 6: Dataset Info Store
// ============================================================
// Persists the DatasetInfo summary as pretty-printed JSON:
//
//   {
//     "num_samples": 150,
//     "num_features": 4,
//     "num_classes": 3,
//     "classes": ["Iris-setosa", "Iris-versicolor", "Iris-virginica"]
//   }
//
// `classes[id]` is the label behind id `id` in the label dump,
// so consumers can map the integer labels back to names.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::dataset::DatasetInfo;

pub struct DatasetInfoStore {
    path: PathBuf,
}

impl DatasetInfoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the summary, replacing any previous file
    pub fn save(&self, info: &DatasetInfo) -> Result<()> {
        let json = serde_json::to_string_pretty(info)?;

        fs::write(&self.path, json + "\n")
            .with_context(|| format!("Cannot write dataset info to '{}'", self.path.display()))?;

        tracing::debug!("Saved dataset info to '{}'", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_listed_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        let info = DatasetInfo {
            num_samples: 3,
            num_features: 4,
            num_classes: 2,
            classes: vec!["Iris-setosa".into(), "Iris-versicolor".into()],
        };

        DatasetInfoStore::new(&path).save(&info).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["num_samples"], 3);
        assert_eq!(json["classes"][0], "Iris-setosa");
        assert_eq!(json["classes"][1], "Iris-versicolor");
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetInfoStore::new(dir.path().join("no_such_dir").join("info.json"));
        let info = DatasetInfo {
            num_samples: 0,
            num_features: 4,
            num_classes: 0,
            classes: Vec::new(),
        };
        let err = store.save(&info).unwrap_err();
        assert!(err.to_string().contains("Cannot write dataset info"));
    }
}
