// ============================================================
// Layer 3: Encoded Dataset
// ============================================================
// The two arrays produced by a conversion run:
//
//   FeatureMatrix: shape (num_records × num_features), row-major,
//                  row order = input line order
//   LabelVector:   one integer id per record
//
// Row i of the matrix and entry i of the vector always describe
// the same input record.

use serde::{Deserialize, Serialize};

// ─── FeatureMatrix ────────────────────────────────────────────────────────────
/// Largest number of values reserved before the first row arrives
const MAX_RESERVED_VALUES: usize = 1 << 20;

/// Dense 2D array of feature values with a fixed column count.
/// Stored flat so rows are contiguous slices.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    num_features: usize,
    num_rows: usize,
    values: Vec<f64>,
}

impl FeatureMatrix {
    /// Empty matrix with `num_features` columns
    pub fn new(num_features: usize) -> Self {
        Self {
            num_features,
            num_rows: 0,
            values: Vec::new(),
        }
    }

    /// Empty matrix with room for `rows` rows before reallocating.
    /// The reservation is skipped when it would overflow or exceed
    /// `MAX_RESERVED_VALUES`; the matrix then grows on demand.
    pub fn with_capacity(num_features: usize, rows: usize) -> Self {
        let reserve = num_features
            .checked_mul(rows)
            .filter(|&n| n <= MAX_RESERVED_VALUES)
            .unwrap_or(0);
        Self {
            num_features,
            num_rows: 0,
            values: Vec::with_capacity(reserve),
        }
    }

    /// Append one row.
    ///
    /// # Panics
    /// Panics if the row width differs from the matrix width.
    /// Callers validate field counts before building rows.
    pub fn push_row(&mut self, row: &[f64]) {
        assert_eq!(
            row.len(),
            self.num_features,
            "row has {} values, matrix has {} columns",
            row.len(),
            self.num_features
        );
        self.values.extend_from_slice(row);
        self.num_rows += 1;
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.num_rows {
            return None;
        }
        let start = index * self.num_features;
        Some(&self.values[start..start + self.num_features])
    }

    /// Iterate rows in input order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.num_rows).map(move |i| {
            let start = i * self.num_features;
            &self.values[start..start + self.num_features]
        })
    }
}

// ─── LabelVector ──────────────────────────────────────────────────────────────
/// One dense label id per record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelVector(Vec<usize>);

impl LabelVector {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    pub fn push(&mut self, id: usize) {
        self.0.push(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for LabelVector {
    fn from(ids: Vec<usize>) -> Self {
        Self(ids)
    }
}

// ─── DatasetInfo ──────────────────────────────────────────────────────────────
/// Summary of an encoded dataset. `classes[id]` is the label that
/// was assigned `id`, so this doubles as a persisted form of the
/// label dictionary for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub num_samples: usize,
    pub num_features: usize,
    pub num_classes: usize,
    pub classes: Vec<String>,
}

// ─── EncodedDataset ───────────────────────────────────────────────────────────
/// Output of one parse-and-encode pass
#[derive(Debug, Clone)]
pub struct EncodedDataset {
    pub features: FeatureMatrix,
    pub labels: LabelVector,
    /// Label names ordered by id
    pub classes: Vec<String>,
}

impl EncodedDataset {
    pub fn num_samples(&self) -> usize {
        self.labels.len()
    }

    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            num_samples: self.num_samples(),
            num_features: self.features.num_features(),
            num_classes: self.classes.len(),
            classes: self.classes.clone(),
        }
    }
}
