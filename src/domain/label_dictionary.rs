// ============================================================
// Layer 3: Label Dictionary
// ============================================================
// Maps each distinct label string to a dense integer id.
//
// Ids are handed out in order of FIRST APPEARANCE, not sorted:
//   "Iris-setosa"      → 0
//   "Iris-versicolor"  → 1
//   "Iris-setosa"      → 0   (already known, id reused)
//   "Iris-virginica"   → 2
//
// An entry is written exactly once. There is no update or
// removal, so the id of a label never changes during a run.
// The dictionary is owned by whoever runs the conversion and
// dropped when the run ends.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LabelDictionary {
    /// label → id lookup
    ids: HashMap<String, usize>,

    /// id → label, indexed by id
    names: Vec<String>,
}

impl LabelDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `label`, assigning the next free id
    /// (the current size of the dictionary) on first encounter.
    pub fn encode(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }

        let id = self.names.len();
        self.ids.insert(label.to_string(), id);
        self.names.push(label.to_string());
        tracing::debug!("New label {:?} assigned id {}", label, id);
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the dictionary, keeping only the id-ordered names
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_first_appearance() {
        let mut dict = LabelDictionary::new();
        assert_eq!(dict.encode("b"), 0);
        assert_eq!(dict.encode("a"), 1);
        assert_eq!(dict.encode("c"), 2);
        // Not sorted: "a" keeps the id it got second
        assert_eq!(dict.into_names(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_repeated_label_reuses_id() {
        let mut dict = LabelDictionary::new();
        let first = dict.encode("Iris-setosa");
        dict.encode("Iris-versicolor");
        assert_eq!(dict.encode("Iris-setosa"), first);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_names_indexed_by_id() {
        let mut dict = LabelDictionary::new();
        assert!(dict.is_empty());
        let x = dict.encode("x");
        let y = dict.encode("y");
        let names = dict.into_names();
        assert_eq!(names[x], "x");
        assert_eq!(names[y], "y");
    }
}
