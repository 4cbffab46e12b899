// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Turns a delimited text file into an EncodedDataset.
//
//   iris.data
//       │
//       ▼
//   csv::Reader        → splits fields, trims them, tracks lines
//       │
//       ▼
//   BlankRecordFilter  → skips blank and whitespace-only lines
//       │
//       ▼
//   split_record       → 4 floats + 1 label string per line
//       │
//       ▼
//   CsvDatasetLoader   → fills the matrix, encodes labels,
//                        enforces the record capacity
//
// Everything runs in a single pass over the input.

/// Blank-line detection on csv records
pub mod preprocessor;

/// csv-backed loader implementing DatasetSource
pub mod loader;
