//! The set of cells the player currently has selected.
//!
//! Order is irrelevant: cells can be clicked in any order and the reading
//! direction is reconstructed later from the geometry of the set.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: BTreeSet<usize>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `idx` if absent, remove it if present. Returns whether `idx` is
    /// selected afterwards.
    pub fn toggle(&mut self, idx: usize) -> bool {
        if self.cells.remove(&idx) {
            false
        } else {
            self.cells.insert(idx);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, idx: usize) -> bool {
        self.cells.contains(&idx)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Selection { cells: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();
        assert!(selection.toggle(5));
        assert!(selection.contains(5));
        assert_eq!(selection.len(), 1);
        assert!(!selection.toggle(5));
        assert!(!selection.contains(5));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut selection: Selection = [1, 2, 3].into_iter().collect();
        assert_eq!(selection.len(), 3);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_iter_is_sorted_and_distinct() {
        let selection: Selection = [9, 1, 4, 1].into_iter().collect();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 4, 9]);
    }
}
