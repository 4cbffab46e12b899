// ============================================================
// iris-prep: crate root
// ============================================================
// Converts a labelled comma-separated dataset (numeric features
// followed by one categorical label per line) into two text
// dumps: a feature matrix and a dense integer label vector.
//
//   cli          → Layer 1, argument parsing and output
//   application  → Layer 2, convert / inspect workflows
//   domain       → Layer 3, records, label ids, arrays, traits
//   data         → Layer 4, csv parsing and encoding
//   infra        → Layer 6, array printing and file writing
//   error        → typed failures shared by Layers 3-6

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;
