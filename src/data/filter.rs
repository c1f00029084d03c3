use std::fmt;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Selector: the chosen workout type, or "All"
// ---------------------------------------------------------------------------

/// A workout-type filter value.
///
/// Comparison is on the trimmed, lower-cased text; `"all"` in any case or
/// padding selects every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    label: String,
    key: String,
}

impl Selector {
    pub const ALL_LABEL: &'static str = "All";

    pub fn new(value: &str) -> Self {
        Selector {
            label: value.to_string(),
            key: fold(value),
        }
    }

    pub fn all() -> Self {
        Self::new(Self::ALL_LABEL)
    }

    pub fn is_all(&self) -> bool {
        self.key == "all"
    }

    /// The value as the user picked it.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The normalized comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a record's workout type passes this selector.
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_all() {
            return true;
        }
        match record.workout_type.as_deref() {
            Some(t) if !t.is_empty() => fold(t) == self.key,
            _ => false,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Return the records that pass `selector`, in dataset order.
pub fn filter_records<'a>(dataset: &'a Dataset, selector: &Selector) -> Vec<&'a Record> {
    if selector.is_all() {
        return dataset.records.iter().collect();
    }
    dataset
        .records
        .iter()
        .filter(|r| selector.matches(r))
        .collect()
}
