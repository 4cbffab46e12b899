// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust types describing a labelled tabular dataset.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing or formatting of arrays
//   - Only structs, enums, and traits
//
// Everything here can be unit tested without touching disk.

// One parsed input line
pub mod record;

// First-seen-order label -> id mapping
pub mod label_dictionary;

// Feature matrix, label vector, and the encoded dataset
pub mod dataset;

// Core abstractions (traits) that other layers implement
pub mod traits;
