//! The match validator: turn the current selection into a verdict.
//!
//! # Pipeline
//!
//! 1. Fewer than two selected cells → [`Outcome::TooShort`].
//! 2. Resolve the cells into a straight line ([`crate::line`]) →
//!    [`Outcome::NotAStraightLine`] if they are not collinear.
//! 3. Expand the line into its full path ([`crate::path`]).
//! 4. Every path cell must be selected *or* already covered by a found word →
//!    [`Outcome::NotContiguous`] otherwise. This lets a player select only the
//!    new letters of a word that crosses one found earlier.
//! 5. Read the path's letters start to end, then end to start, and look both
//!    up in the catalog → [`Outcome::NoWordMatch`] if neither is a target.
//! 6. Already found → [`Outcome::AlreadyFound`].
//! 7. Otherwise record it → [`Outcome::NewMatch`].
//!
//! Only step 7 changes anything (the [`FoundSet`]). Every outcome is a normal
//! result, never an error.

use crate::catalog::{TargetWord, WordCatalog};
use crate::found::FoundSet;
use crate::grid::{Cell, Grid};
use crate::line::resolve_line;
use crate::path::line_path;
use crate::selection::Selection;
use log::debug;

/// Result of validating one selection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Fewer than two cells were selected.
    TooShort,
    /// The cells do not lie on one horizontal, vertical or 45° line.
    NotAStraightLine,
    /// The line has a gap: some cell between the ends is neither selected
    /// nor part of a found word.
    NotContiguous,
    /// The line's letters do not spell a target word in either direction.
    NoWordMatch,
    /// The line spells a word that was found before.
    AlreadyFound { word: TargetWord },
    /// A new word; `path` runs from the line's start to its end.
    NewMatch { word: TargetWord, path: Vec<Cell> },
}

impl Outcome {
    /// Stable machine-readable name of the outcome kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::TooShort => "too_short",
            Outcome::NotAStraightLine => "not_a_straight_line",
            Outcome::NotContiguous => "not_contiguous",
            Outcome::NoWordMatch => "no_word_match",
            Outcome::AlreadyFound { .. } => "already_found",
            Outcome::NewMatch { .. } => "new_match",
        }
    }

    /// Short user-facing notification text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Outcome::TooShort => "Select at least 2 adjacent letters".to_string(),
            Outcome::NotAStraightLine => "The selection is not a straight line".to_string(),
            Outcome::NotContiguous => "Letters are missing in between or not adjacent".to_string(),
            Outcome::NoWordMatch => "The selection does not match any target word".to_string(),
            Outcome::AlreadyFound { word } => format!("{} was already found", word.display),
            Outcome::NewMatch { word, .. } => format!("Well done! You found: {}", word.display),
        }
    }

    #[must_use]
    pub fn is_new_match(&self) -> bool {
        matches!(self, Outcome::NewMatch { .. })
    }

    /// The word involved, for `AlreadyFound` and `NewMatch`.
    #[must_use]
    pub fn word(&self) -> Option<&TargetWord> {
        match self {
            Outcome::AlreadyFound { word } | Outcome::NewMatch { word, .. } => Some(word),
            _ => None,
        }
    }

    /// The path of a new match.
    #[must_use]
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Outcome::NewMatch { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Validate `selection` against the catalog, recording a new match in `found`.
pub fn validate(
    selection: &Selection,
    grid: &Grid,
    catalog: &WordCatalog,
    found: &mut FoundSet,
) -> Outcome {
    if selection.len() < 2 {
        return Outcome::TooShort;
    }

    let Some(cells) = selection
        .iter()
        .map(|idx| grid.cell_at(idx))
        .collect::<Option<Vec<Cell>>>()
    else {
        debug!("selection contains cells outside the {0}x{0} grid", grid.size());
        return Outcome::NotAStraightLine;
    };

    let Some(line) = resolve_line(&cells) else {
        return Outcome::NotAStraightLine;
    };
    let Some(path) = line_path(&line) else {
        return Outcome::NotAStraightLine;
    };
    debug!("{} line from {} to {} ({} cells)", line.shape, line.start, line.end, path.len());

    let mut letters = String::with_capacity(path.len());
    for &cell in &path {
        let (Some(idx), Some(letter)) = (grid.index_of(cell), grid.letter(cell)) else {
            return Outcome::NotAStraightLine;
        };
        if !selection.contains(idx) && !found.is_cell_found(idx) {
            debug!("gap at {cell}");
            return Outcome::NotContiguous;
        }
        letters.push(letter);
    }

    let Some(word) = catalog.lookup_either_way(&letters) else {
        debug!("\"{letters}\" is not a target word");
        return Outcome::NoWordMatch;
    };

    if found.contains(&word.plain) {
        return Outcome::AlreadyFound { word: word.clone() };
    }

    found.insert(&word.plain, path.iter().filter_map(|&cell| grid.index_of(cell)));
    Outcome::NewMatch { word: word.clone(), path }
}
