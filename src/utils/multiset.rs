use std::collections::BTreeMap;

/// Counts of the items available to a puzzle.
///
/// Used for input numbers and for letters alike: a candidate is acceptable
/// only if it never needs more copies of an item than the multiset holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> Multiset<T> {
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Total number of items, counting repeats
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Whether every item of `other` is available in at least the same quantity
    pub fn contains(&self, other: &Multiset<T>) -> bool {
        other
            .counts
            .iter()
            .all(|(item, &needed)| needed <= self.count(item))
    }

    /// Whether the union of two sorted slices fits in this multiset.
    ///
    /// Both slices must be sorted ascending; they are merged run by run
    /// without allocating.
    pub fn admits_sorted(&self, left: &[T], right: &[T]) -> bool {
        let (mut i, mut j) = (0, 0);
        loop {
            let item = match (left.get(i), right.get(j)) {
                (Some(a), Some(b)) => {
                    if a <= b {
                        a
                    } else {
                        b
                    }
                }
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => return true,
            };

            let mut run = 0;
            while left.get(i) == Some(item) {
                i += 1;
                run += 1;
            }
            while right.get(j) == Some(item) {
                j += 1;
                run += 1;
            }

            if run > self.count(item) {
                return false;
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for item in iter {
            *counts.entry(item).or_insert(0) += 1;
        }
        Self { counts }
    }
}
