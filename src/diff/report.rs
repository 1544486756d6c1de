//! Assembly of tagged entries and summary counts

use crate::model::{DiffEntry, DiffSummary, ValueSet};

use super::set_ops::union;

/// Tag every changed value and order the entries for display.
///
/// `dropped` and `added` must come from [`super::SetDiff::compute`] over
/// `original` and `updated`.
pub fn build_report(
    original: &ValueSet,
    updated: &ValueSet,
    dropped: &ValueSet,
    added: &ValueSet,
) -> DiffSummary {
    let mut entries: Vec<DiffEntry> = union(dropped, added)
        .into_iter()
        .map(|value| {
            if dropped.contains(&value) {
                DiffEntry::Dropped(value)
            } else {
                DiffEntry::Added(value)
            }
        })
        .collect();

    // Stable: added rows first, each group keeps set order
    entries.sort_by_key(|entry| !entry.is_added());

    DiffSummary {
        original_count: original.len(),
        updated_count: updated.len(),
        added_count: added.len(),
        dropped_count: dropped.len(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::SetDiff;

    fn set(values: &[&str]) -> ValueSet {
        values.iter().copied().collect()
    }

    fn report(original: &[&str], updated: &[&str]) -> DiffSummary {
        let original = set(original);
        let updated = set(updated);
        let diff = SetDiff::compute(&original, &updated);
        build_report(&original, &updated, &diff.dropped, &diff.added)
    }

    #[test]
    fn test_counts() {
        let summary = report(&["1", "2", "3"], &["2", "3", "4"]);
        assert_eq!(summary.original_count, 3);
        assert_eq!(summary.updated_count, 3);
        assert_eq!(summary.added_count, 1);
        assert_eq!(summary.dropped_count, 1);
        assert_eq!(
            summary.entries,
            vec![DiffEntry::Added("4".into()), DiffEntry::Dropped("1".into())]
        );
    }

    #[test]
    fn test_added_before_dropped() {
        let summary = report(&["a", "b", "c"], &["c", "x", "y"]);
        assert_eq!(
            summary.entries,
            vec![
                DiffEntry::Added("x".into()),
                DiffEntry::Added("y".into()),
                DiffEntry::Dropped("a".into()),
                DiffEntry::Dropped("b".into()),
            ]
        );
        assert_eq!(summary.added().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(summary.dropped().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_identical_sets() {
        let summary = report(&["1", "2"], &["2", "1"]);
        assert!(summary.entries.is_empty());
        assert!(!summary.has_changes());
        assert_eq!(summary.added_count, 0);
        assert_eq!(summary.dropped_count, 0);
    }
}
