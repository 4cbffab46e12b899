// ============================================================
// Layer 3: Record Domain Type
// ============================================================
// A single parsed input line: the numeric features in column
// order followed by the categorical label string.
//
// Example line:  5.1,3.5,1.4,0.2,Iris-setosa
//   features = [5.1, 3.5, 1.4, 0.2]
//   label    = "Iris-setosa"

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Feature values, in the order they appear on the line
    pub features: Vec<f64>,

    /// The trailing categorical field
    pub label: String,
}

impl Record {
    pub fn new(features: Vec<f64>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }
}
