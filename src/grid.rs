//! `grid` — the immutable N×N letter matrix a puzzle is played on.
//!
//! Cells are addressed either by coordinates `(x, y)` (column, row) or by the
//! linear index `y * N + x`. Both forms are interchangeable through
//! [`Grid::index_of`] and [`Grid::cell_at`].
//!
//! A grid can be built from rows already in memory ([`Grid::from_rows`]) or
//! from pasted text ([`Grid::parse_preset`]), which is what a "load preset"
//! button hands us. On native builds [`Grid::load_from_path`] reads the same
//! text format from disk.

use crate::errors::BuildError;
use crate::normalize::{normalize, GridChar};
use std::fmt;

/// Smallest supported grid side.
pub const MIN_GRID_SIZE: usize = 2;

/// A cell position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Square letter matrix. Every cell holds an uppercase letter A-Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Row-major; `letters[y * size + x]`.
    letters: Vec<char>,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// The side `N` is taken from the first row; there must be exactly `N`
    /// rows of exactly `N` letters each, all in A-Z.
    ///
    /// # Errors
    ///
    /// Returns the first shape or character problem found, scanning rows top
    /// to bottom.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, BuildError> {
        let size = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if size < MIN_GRID_SIZE {
            return Err(BuildError::GridTooSmall { size });
        }
        if rows.len() != size {
            return Err(BuildError::WrongRowCount { expected: size, actual: rows.len() });
        }

        let mut letters = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != size {
                return Err(BuildError::WrongRowLength { row, expected: size, actual });
            }
            for (col, c) in line.chars().enumerate() {
                if !c.is_grid_letter() {
                    return Err(BuildError::InvalidGridChar { row, col, invalid_char: c });
                }
                letters.push(c);
            }
        }

        Ok(Grid { size, letters })
    }

    /// Parse pasted preset text: one row per line (`\n` or `\r\n`).
    ///
    /// Each line is trimmed and normalized (accents stripped, upper-cased)
    /// before the shape check, so "ñandú" style input is accepted as "NANDU".
    /// Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_rows`].
    pub fn parse_preset(text: &str) -> Result<Grid, BuildError> {
        let rows: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(normalize)
            .collect();
        Grid::from_rows(&rows)
    }

    /// Native-only convenience method: read a preset file and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if the file cannot be read or does not hold a
    /// valid grid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Grid> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read preset from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_preset(&data)?)
    }

    /// Side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, `N * N`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Linear index of `cell`; `None` when the cell is off the grid.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.y * self.size + cell.x)
    }

    /// Coordinates of linear index `idx`; `None` when `idx >= N * N`.
    #[must_use]
    pub fn cell_at(&self, idx: usize) -> Option<Cell> {
        (idx < self.letters.len()).then(|| Cell::new(idx % self.size, idx / self.size))
    }

    #[must_use]
    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.index_of(cell).and_then(|idx| self.letter_at(idx))
    }

    #[must_use]
    pub fn letter_at(&self, idx: usize) -> Option<char> {
        self.letters.get(idx).copied()
    }

    /// The rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.letters.chunks(self.size).map(|row| row.iter().collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.letters.chunks(self.size) {
            let spaced: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

impl From<BuildError> for std::io::Error {
    fn from(be: BuildError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, be.to_string())
    }
}
