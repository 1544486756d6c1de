//! Set difference and union over column values

use crate::model::ValueSet;

/// Values present in `a` but absent from `b`, in `a`'s order
pub fn difference(a: &ValueSet, b: &ValueSet) -> ValueSet {
    a.iter().filter(|value| !b.contains(value)).collect()
}

/// Values present in either set: `a`'s values first, then new ones from `b`
pub fn union(a: &ValueSet, b: &ValueSet) -> ValueSet {
    let mut out = a.clone();
    out.extend(b.iter());
    out
}

/// Values dropped from and added to an original set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDiff {
    /// In the original only
    pub dropped: ValueSet,
    /// In the updated only
    pub added: ValueSet,
}

impl SetDiff {
    /// Compare two value sets. The results are disjoint by construction.
    pub fn compute(original: &ValueSet, updated: &ValueSet) -> Self {
        Self {
            dropped: difference(original, updated),
            added: difference(updated, original),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty() && self.added.is_empty()
    }
}
