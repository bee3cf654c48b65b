//! Error types for building a puzzle, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (B001-B009) for documentation lookup:
//!
//! - B001: `GridTooSmall` (Grid side below the minimum)
//! - B002: `WrongRowCount` (Number of rows differs from the grid side)
//! - B003: `WrongRowLength` (A row has the wrong number of letters)
//! - B004: `InvalidGridChar` (A grid cell is not an uppercase letter A-Z)
//! - B005: `EmptyCatalog` (No target words)
//! - B006: `WordTooShort` (A target word normalizes to fewer than two letters)
//! - B007: `InvalidWordChars` (A target word contains something other than letters)
//! - B008: `DuplicateWord` (Two target words share a normalized form)
//! - B009: `CellOutOfRange` (A cell index is outside the grid)
//!
//! Building a puzzle is the one hard failure; `CellOutOfRange` additionally
//! guards index-based calls into a session. Validating a selection never
//! returns an error; see [`crate::validator::Outcome`] for those results.
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::BuildError;
//! use wordsearch::grid::Grid;
//!
//! match Grid::from_rows(&["AB", "C"]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, BuildError::WrongRowLength { row: 1, .. }));
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use crate::grid::MIN_GRID_SIZE;

/// Everything that can go wrong while building a grid or a word catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Grid side {size} is too small (minimum is {})", MIN_GRID_SIZE)]
    GridTooSmall { size: usize },

    #[error("Expected {expected} rows but got {actual}")]
    WrongRowCount { expected: usize, actual: usize },

    #[error("Row {row} has {actual} letters (expected {expected})")]
    WrongRowLength { row: usize, expected: usize, actual: usize },

    #[error("Invalid character '{invalid_char}' at row {row}, column {col} (only A-Z allowed)")]
    InvalidGridChar { row: usize, col: usize, invalid_char: char },

    #[error("Word list is empty")]
    EmptyCatalog,

    #[error("Word \"{word}\" is too short (at least 2 letters required)")]
    WordTooShort { word: String },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only letters allowed)")]
    InvalidWordChars { word: String, invalid_char: char },

    #[error("Word \"{word}\" appears more than once (as \"{normalized}\")")]
    DuplicateWord { word: String, normalized: String },

    #[error("Cell index {index} is out of range for a {size}x{size} grid")]
    CellOutOfRange { index: usize, size: usize },
}

impl BuildError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::GridTooSmall { .. } => "B001",
            BuildError::WrongRowCount { .. } => "B002",
            BuildError::WrongRowLength { .. } => "B003",
            BuildError::InvalidGridChar { .. } => "B004",
            BuildError::EmptyCatalog => "B005",
            BuildError::WordTooShort { .. } => "B006",
            BuildError::InvalidWordChars { .. } => "B007",
            BuildError::DuplicateWord { .. } => "B008",
            BuildError::CellOutOfRange { .. } => "B009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BuildError::GridTooSmall { .. } => "Grid side below the minimum",
            BuildError::WrongRowCount { .. } => "Number of rows differs from the grid side",
            BuildError::WrongRowLength { .. } => "A row has the wrong number of letters",
            BuildError::InvalidGridChar { .. } => "A grid cell is not an uppercase letter A-Z",
            BuildError::EmptyCatalog => "No target words",
            BuildError::WordTooShort { .. } => "A target word normalizes to fewer than two letters",
            BuildError::InvalidWordChars { .. } => "A target word contains something other than letters",
            BuildError::DuplicateWord { .. } => "Two target words share a normalized form",
            BuildError::CellOutOfRange { .. } => "A cell index is outside the grid",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BuildError::GridTooSmall { .. } => "A word-search grid must be square with at least two rows, since every target word spans at least two cells.",
            BuildError::WrongRowCount { .. } => "The grid is square: the number of rows must equal the length of the first row.",
            BuildError::WrongRowLength { .. } => "Every row must contain exactly as many letters as there are rows.",
            BuildError::InvalidGridChar { .. } => "Grid cells hold single uppercase letters without diacritics. Pasted presets are normalized first, so this usually means a digit, punctuation or a stray space inside a row.",
            BuildError::EmptyCatalog => "A puzzle needs at least one target word, otherwise it could never be completed.",
            BuildError::WordTooShort { .. } => "Selections shorter than two cells are always rejected, so a one-letter word could never be found.",
            BuildError::InvalidWordChars { .. } => "Target words are compared against grid letters after removing accents and upper-casing, so they may contain only letters.",
            BuildError::DuplicateWord { .. } => "Two entries normalize to the same letters (for example \"Pasión\" and \"PASION\"). Only one of them could ever be found, so the catalog is rejected.",
            BuildError::CellOutOfRange { .. } => "Cell indices are computed as y*N+x and must be smaller than N*N.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BuildError::GridTooSmall { .. } => Some("Provide at least two rows of two letters each"),
            BuildError::WrongRowCount { .. } | BuildError::WrongRowLength { .. } => {
                Some("Paste N lines of N letters each (e.g., 12 lines of 12 letters)")
            }
            BuildError::InvalidGridChar { .. } => Some("Use only the letters A-Z in grid rows"),
            BuildError::EmptyCatalog => Some("Add at least one target word"),
            BuildError::WordTooShort { .. } => Some("Remove single-letter words from the word list"),
            BuildError::InvalidWordChars { .. } => Some("Remove spaces, digits and punctuation from target words"),
            BuildError::DuplicateWord { .. } => Some("Remove the repeated word from the word list"),
            BuildError::CellOutOfRange { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
