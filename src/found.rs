//! Found-state tracking: which words have been found in the current build,
//! and which cells their paths cover.
//!
//! Both only grow until [`FoundSet::clear`], which is called when the grid is
//! rebuilt.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundSet {
    /// Normalized forms, in the order they were found.
    order: Vec<String>,
    words: HashSet<String>,
    cells: HashSet<usize>,
}

impl FoundSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `plain` as found along the cell indices in `path`.
    ///
    /// Returns `false` (and changes nothing) if the word was already found.
    pub fn insert(&mut self, plain: &str, path: impl IntoIterator<Item = usize>) -> bool {
        if !self.words.insert(plain.to_string()) {
            return false;
        }
        self.order.push(plain.to_string());
        self.cells.extend(path);
        true
    }

    #[must_use]
    pub fn contains(&self, plain: &str) -> bool {
        self.words.contains(plain)
    }

    /// True if `idx` lies on the path of some found word.
    #[must_use]
    pub fn is_cell_found(&self, idx: usize) -> bool {
        self.cells.contains(&idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Normalized forms in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.words.clear();
        self.cells.clear();
    }
}
