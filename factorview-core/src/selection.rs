//! The mutable set of kept factor indices.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The set of factor indices a user has chosen to keep.
///
/// Indices are signed: scripted input may introduce values outside
/// `[0, n_factors)` (including negatives), and those are tolerated here —
/// set semantics dedupe, nothing is clamped. Range validation happens at
/// reconstruction time, when the indices are actually used against a
/// factorization.
///
/// The complement ([`unselected`](Self::unselected)) is derived on every
/// call and never stored, so it cannot drift out of sync with the
/// selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionSet {
    kept: BTreeSet<i64>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an index to the selection.
    pub fn insert(&mut self, index: i64) {
        self.kept.insert(index);
    }

    /// Removes an index from the selection; absent indices are a no-op.
    pub fn remove(&mut self, index: i64) {
        self.kept.remove(&index);
    }

    /// Puts every index in `indices` into state `keep`.
    ///
    /// Used when reconciling a page of checkboxes against intent: checked
    /// slots are inserted, unchecked slots removed.
    pub fn bulk_set<I: IntoIterator<Item = i64>>(&mut self, indices: I, keep: bool) {
        for index in indices {
            if keep {
                self.kept.insert(index);
            } else {
                self.kept.remove(&index);
            }
        }
    }

    /// Merges a parsed script result into the selection (additive union).
    pub fn merge(&mut self, indices: &BTreeSet<i64>) {
        self.kept.extend(indices);
    }

    /// Empties the selection unconditionally.
    pub fn clear(&mut self) {
        self.kept.clear();
    }

    /// Whether `index` is currently kept.
    #[must_use]
    pub fn contains(&self, index: i64) -> bool {
        self.kept.contains(&index)
    }

    /// Number of kept indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kept.len()
    }

    /// True when nothing is kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    /// Iterates the kept indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.kept.iter().copied()
    }

    /// The derived complement: `{0, …, total-1}` minus the selection.
    ///
    /// Recomputed from the current selection on every call.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn unselected(&self, total: usize) -> BTreeSet<i64> {
        (0..total as i64).filter(|i| !self.kept.contains(i)).collect()
    }
}

impl FromIterator<i64> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            kept: iter.into_iter().collect(),
        }
    }
}
