// ============================================================
// Layer 4: Blank Record Filter
// ============================================================
// Decides which records the csv reader hands back are really
// blank lines.
//
// The reader already drops empty lines ("", "\r"), but a line of
// only spaces or tabs comes back as one field that is empty after
// trimming. Those are blank too and must not consume a row.
// A line such as "," has two (empty) fields and is NOT blank; it
// fails later with a field-count error.

use csv::StringRecord;

pub struct BlankRecordFilter;

impl BlankRecordFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn is_blank(&self, record: &StringRecord) -> bool {
        record.len() == 1 && record[0].trim().is_empty()
    }
}

impl Default for BlankRecordFilter {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_blank() {
        let f = BlankRecordFilter::new();
        assert!(f.is_blank(&StringRecord::from(vec![""])));
        assert!(f.is_blank(&StringRecord::from(vec!["   \t"])));
    }

    #[test]
    fn test_empty_fields_are_not_blank() {
        let f = BlankRecordFilter::new();
        assert!(!f.is_blank(&StringRecord::from(vec!["", ""])));
        assert!(!f.is_blank(&StringRecord::from(vec!["1,2"])));
        assert!(!f.is_blank(&StringRecord::from(vec!["x"])));
    }
}
