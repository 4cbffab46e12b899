// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The application layer talks to these traits, not to concrete
// loaders or printers, so a different input format or a
// different dump format can be plugged in without touching the
// conversion workflow.
//
//   CsvDatasetLoader implements DatasetSource
//   FeatureMatrix / LabelVector implement ArrayText (in infra)

use crate::domain::dataset::EncodedDataset;
use crate::error::ConvertResult;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce an encoded dataset in one pass.
pub trait DatasetSource {
    /// Read the whole source and return the feature matrix,
    /// label vector and id-ordered class names.
    fn load(&self) -> ConvertResult<EncodedDataset>;
}

// ─── ArrayText ────────────────────────────────────────────────────────────────
/// Any array that can be printed in bracketed, comma-separated form.
pub trait ArrayText {
    /// Render the array, wrapping lines longer than `max_line_width`.
    /// The result carries no trailing newline.
    fn array_text(&self, max_line_width: usize) -> String;
}
