//! `session` — one playthrough of a puzzle.
//!
//! A [`Session`] owns everything that changes while playing: the current
//! selection and the found words. The grid and the catalog are fixed for a
//! build and replaced together by [`Session::build`], which also resets the
//! mutable state. Nothing here is global; a front end keeps one `Session`
//! and routes its events into it.
//!
//! # Examples
//!
//! ```
//! use wordsearch::grid::Cell;
//! use wordsearch::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(&["SOL", "XXX", "XXX"], &["Sol"], SessionConfig::default())?;
//! for x in 0..3 {
//!     session.toggle_cell_at(Cell::new(x, 0))?;
//! }
//! let report = session.validate();
//! assert!(report.outcome.is_new_match());
//! assert!(report.completed);
//! assert_eq!(session.progress().to_string(), "1 / 1 found");
//! # Ok::<(), wordsearch::errors::BuildError>(())
//! ```

use crate::catalog::{TargetWord, WordCatalog};
use crate::errors::BuildError;
use crate::found::FoundSet;
use crate::grid::{Cell, Grid};
use crate::selection::Selection;
use crate::validator::{validate, Outcome};
use log::{debug, info};
use std::fmt;

/// Caller policy for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Empty the selection after every validation, whatever the outcome.
    /// When false, the selection is kept and the caller clears it.
    pub clear_selection: bool,
    /// Revealed in the report of the validation that completes the puzzle.
    pub secret_message: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { clear_selection: true, secret_message: None }
    }
}

/// Found words out of total words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Progress {
    pub found: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found == self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {} found", self.found, self.total)
    }
}

/// What a front end needs after one validation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidateReport {
    pub outcome: Outcome,
    pub progress: Progress,
    /// True only for the validation that found the last word.
    pub completed: bool,
    /// The configured secret message, present only when `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_message: Option<String>,
}

/// Flat, front-end shaped form of a [`ValidateReport`]: the outcome with its
/// message and the found path as linear indices for marking cells.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub outcome: Outcome,
    pub message: String,
    /// Empty unless the outcome is a new match.
    pub path_indices: Vec<usize>,
    pub progress: Progress,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_message: Option<String>,
}

impl ReportView {
    #[must_use]
    pub fn new(report: ValidateReport, grid: &Grid) -> Self {
        let path_indices = report
            .outcome
            .path()
            .map(|path| path.iter().filter_map(|&cell| grid.index_of(cell)).collect())
            .unwrap_or_default();
        ReportView {
            message: report.outcome.message(),
            outcome: report.outcome,
            path_indices,
            progress: report.progress,
            completed: report.completed,
            secret_message: report.secret_message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    catalog: WordCatalog,
    selection: Selection,
    found: FoundSet,
    config: SessionConfig,
}

impl Session {
    /// Build a new session.
    ///
    /// # Errors
    ///
    /// Returns the first problem with the grid rows, then with the words.
    pub fn new<R: AsRef<str>, W: AsRef<str>>(
        rows: &[R],
        words: &[W],
        config: SessionConfig,
    ) -> Result<Session, BuildError> {
        let grid = Grid::from_rows(rows)?;
        let catalog = WordCatalog::new(words)?;
        Ok(Session::from_parts(grid, catalog, config))
    }

    /// Start a session from an already-built grid and catalog.
    #[must_use]
    pub fn from_parts(grid: Grid, catalog: WordCatalog, config: SessionConfig) -> Session {
        info!("built {0}x{0} grid with {1} target words", grid.size(), catalog.len());
        Session {
            grid,
            catalog,
            selection: Selection::new(),
            found: FoundSet::new(),
            config,
        }
    }

    /// Replace grid and words, clearing the selection and found words.
    ///
    /// # Errors
    ///
    /// On failure the session is left exactly as it was.
    pub fn build<R: AsRef<str>, W: AsRef<str>>(
        &mut self,
        rows: &[R],
        words: &[W],
    ) -> Result<(), BuildError> {
        let grid = Grid::from_rows(rows)?;
        let catalog = WordCatalog::new(words)?;
        self.replace(grid, catalog);
        Ok(())
    }

    /// Replace only the grid (e.g. a pasted preset), keeping the words.
    ///
    /// # Errors
    ///
    /// On failure the session is left exactly as it was.
    pub fn load_preset(&mut self, text: &str) -> Result<(), BuildError> {
        let grid = Grid::parse_preset(text)?;
        let catalog = self.catalog.clone();
        self.replace(grid, catalog);
        Ok(())
    }

    /// Start over on the same grid and words.
    pub fn restart(&mut self) {
        info!("restarting {0}x{0} grid", self.grid.size());
        self.selection.clear();
        self.found.clear();
    }

    fn replace(&mut self, grid: Grid, catalog: WordCatalog) {
        info!("rebuilt {0}x{0} grid with {1} target words", grid.size(), catalog.len());
        self.grid = grid;
        self.catalog = catalog;
        self.selection.clear();
        self.found.clear();
    }

    /// Toggle cell `idx` in the selection; returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// `CellOutOfRange` if `idx` is not a cell of the grid.
    pub fn toggle_cell(&mut self, idx: usize) -> Result<bool, BuildError> {
        if idx >= self.grid.cell_count() {
            return Err(BuildError::CellOutOfRange { index: idx, size: self.grid.size() });
        }
        Ok(self.selection.toggle(idx))
    }

    /// [`Session::toggle_cell`] by coordinates.
    ///
    /// # Errors
    ///
    /// `CellOutOfRange` if `cell` is off the grid.
    pub fn toggle_cell_at(&mut self, cell: Cell) -> Result<bool, BuildError> {
        let size = self.grid.size();
        let idx = self.grid.index_of(cell).ok_or(BuildError::CellOutOfRange {
            index: cell.y.saturating_mul(size).saturating_add(cell.x),
            size,
        })?;
        self.toggle_cell(idx)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Validate the current selection.
    pub fn validate(&mut self) -> ValidateReport {
        let was_complete = self.is_complete();
        let outcome = validate(&self.selection, &self.grid, &self.catalog, &mut self.found);
        debug!("validated {} cells: {}", self.selection.len(), outcome.kind());

        if self.config.clear_selection {
            self.selection.clear();
        }

        let completed = !was_complete && outcome.is_new_match() && self.is_complete();
        if completed {
            info!("all {} words found", self.catalog.len());
        }
        ValidateReport {
            outcome,
            progress: self.progress(),
            completed,
            secret_message: if completed { self.config.secret_message.clone() } else { None },
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress { found: self.found.len(), total: self.catalog.len() }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// Found words in discovery order.
    pub fn found_words(&self) -> impl Iterator<Item = &TargetWord> {
        self.found.iter().filter_map(|plain| self.catalog.get(plain))
    }

    #[must_use]
    pub fn is_cell_found(&self, idx: usize) -> bool {
        self.found.is_cell_found(idx)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}
