use serde::{Deserialize, Serialize};

/// An inclusive identifier range with a label.
///
/// Exclusion rules leave `label_digits` unset. Generic-label rules use it to
/// say how many trailing digits of the ID follow the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRule {
    pub range_start: u64,
    pub range_end: u64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_digits: Option<usize>,
}

impl RangeRule {
    pub fn new(range_start: u64, range_end: u64, label: impl Into<String>) -> Self {
        Self {
            range_start,
            range_end,
            label: label.into(),
            label_digits: None,
        }
    }

    #[must_use]
    pub fn with_label_digits(mut self, digits: usize) -> Self {
        self.label_digits = Some(digits);
        self
    }

    pub fn contains(&self, id: u64) -> bool {
        self.range_start <= id && id <= self.range_end
    }

    pub fn overlaps(&self, other: &RangeRule) -> bool {
        self.range_start <= other.range_end && other.range_start <= self.range_end
    }
}
