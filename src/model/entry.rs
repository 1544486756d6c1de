//! Tagged diff entries and summary counts

use serde::{Deserialize, Serialize};

/// A value present in only one of the two sources
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "change", content = "value", rename_all = "lowercase")]
pub enum DiffEntry {
    /// Present only in the updated source
    Added(String),
    /// Present only in the original source
    Dropped(String),
}

impl DiffEntry {
    /// The value this entry refers to
    pub fn value(&self) -> &str {
        match self {
            DiffEntry::Added(v) | DiffEntry::Dropped(v) => v,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, DiffEntry::Added(_))
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, DiffEntry::Dropped(_))
    }

    /// The value if this is an added entry
    pub fn added(&self) -> Option<&str> {
        match self {
            DiffEntry::Added(v) => Some(v),
            DiffEntry::Dropped(_) => None,
        }
    }

    /// The value if this is a dropped entry
    pub fn dropped(&self) -> Option<&str> {
        match self {
            DiffEntry::Dropped(v) => Some(v),
            DiffEntry::Added(_) => None,
        }
    }
}

/// Counts and ordered entries for one comparison
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Distinct values in the original source
    pub original_count: usize,
    /// Distinct values in the updated source
    pub updated_count: usize,
    pub added_count: usize,
    pub dropped_count: usize,
    /// Added entries first, then dropped entries
    pub entries: Vec<DiffEntry>,
}

impl DiffSummary {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.added_count > 0 || self.dropped_count > 0
    }

    /// Get only added values
    pub fn added(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(DiffEntry::added)
    }

    /// Get only dropped values
    pub fn dropped(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(DiffEntry::dropped)
    }
}
