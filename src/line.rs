//! Line resolution: decide whether an unordered set of cells lies on one
//! straight line, and if so, which two cells are its ends.
//!
//! Four line shapes are supported, tried in this order:
//!
//! | shape        | invariant shared by every cell | direction  |
//! |--------------|--------------------------------|------------|
//! | horizontal   | `y`                            | `(1, 0)`   |
//! | vertical     | `x`                            | `(0, 1)`   |
//! | diagonal `\` | `x - y`                        | `(1, 1)`   |
//! | diagonal `/` | `x + y`                        | `(1, -1)`  |
//!
//! The ends come from the bounding box of the selection (leftmost and
//! rightmost cell, or topmost and bottommost for vertical lines), so the
//! result never depends on the order in which the cells were picked.
//! Whether the cells *between* the ends are present is not checked here;
//! see [`crate::path`] and [`crate::validator`].

use crate::grid::Cell;
use std::fmt;

/// Unit step between consecutive cells of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

impl Direction {
    #[must_use]
    pub const fn new(dx: isize, dy: isize) -> Self {
        Direction { dx, dy }
    }

    /// True for the eight compass steps, false for `(0, 0)` or anything longer.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        (-1..=1).contains(&self.dx) && (-1..=1).contains(&self.dy) && (self.dx, self.dy) != (0, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineShape {
    Horizontal,
    Vertical,
    /// `x - y` constant: top-left to bottom-right.
    DiagonalDown,
    /// `x + y` constant: bottom-left to top-right.
    DiagonalUp,
}

impl fmt::Display for LineShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            LineShape::Horizontal => "horizontal",
            LineShape::Vertical => "vertical",
            LineShape::DiagonalDown => "diagonal down",
            LineShape::DiagonalUp => "diagonal up",
        };
        write!(f, "{s}")
    }
}

/// A straight line through the grid, from `start` to `end` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LineDescription {
    pub shape: LineShape,
    pub direction: Direction,
    pub start: Cell,
    pub end: Cell,
}

struct BoundingBox {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl BoundingBox {
    fn of(cells: &[Cell]) -> Option<BoundingBox> {
        let first = cells.first()?;
        let mut bb = BoundingBox { min_x: first.x, max_x: first.x, min_y: first.y, max_y: first.y };
        for c in &cells[1..] {
            bb.min_x = bb.min_x.min(c.x);
            bb.max_x = bb.max_x.max(c.x);
            bb.min_y = bb.min_y.min(c.y);
            bb.max_y = bb.max_y.max(c.y);
        }
        Some(bb)
    }
}

fn signum(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// True when `key` gives the same value for every cell.
fn all_share<K: PartialEq>(cells: &[Cell], key: impl Fn(&Cell) -> K) -> bool {
    let mut keys = cells.iter().map(key);
    match keys.next() {
        Some(first) => keys.all(|k| k == first),
        None => false,
    }
}

fn x_minus_y(c: &Cell) -> isize {
    c.x as isize - c.y as isize
}

fn x_plus_y(c: &Cell) -> isize {
    c.x as isize + c.y as isize
}

/// Build the description for a line whose ends are already known; `None` if
/// they coincide or are not 0°, 45° or 90° apart.
fn line_between(shape: LineShape, start: Cell, end: Cell) -> Option<LineDescription> {
    if start == end {
        return None;
    }
    let dx = start.x.abs_diff(end.x);
    let dy = start.y.abs_diff(end.y);
    if dx != 0 && dy != 0 && dx != dy {
        return None;
    }
    let direction = Direction::new(signum(start.x, end.x), signum(start.y, end.y));
    Some(LineDescription { shape, direction, start, end })
}

/// Resolve `cells` into a straight line, or `None` if they are not collinear
/// along one of the four supported shapes.
///
/// Needs at least two distinct cells; fewer yields `None`.
#[must_use]
pub fn resolve_line(cells: &[Cell]) -> Option<LineDescription> {
    if cells.len() < 2 {
        return None;
    }
    let bb = BoundingBox::of(cells)?;

    if all_share(cells, |c| c.y) {
        let y = bb.min_y;
        return line_between(LineShape::Horizontal, Cell::new(bb.min_x, y), Cell::new(bb.max_x, y));
    }

    if all_share(cells, |c| c.x) {
        let x = bb.min_x;
        return line_between(LineShape::Vertical, Cell::new(x, bb.min_y), Cell::new(x, bb.max_y));
    }

    if all_share(cells, x_minus_y) {
        let k = x_minus_y(&cells[0]);
        let start_y = usize::try_from(bb.min_x as isize - k).ok()?;
        let end_y = usize::try_from(bb.max_x as isize - k).ok()?;
        return line_between(
            LineShape::DiagonalDown,
            Cell::new(bb.min_x, start_y),
            Cell::new(bb.max_x, end_y),
        );
    }

    if all_share(cells, x_plus_y) {
        let k = x_plus_y(&cells[0]);
        let start_y = usize::try_from(k - bb.min_x as isize).ok()?;
        let end_y = usize::try_from(k - bb.max_x as isize).ok()?;
        return line_between(
            LineShape::DiagonalUp,
            Cell::new(bb.min_x, start_y),
            Cell::new(bb.max_x, end_y),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_horizontal() {
        let line = resolve_line(&cells(&[(4, 2), (1, 2), (3, 2)])).unwrap();
        assert_eq!(line.shape, LineShape::Horizontal);
        assert_eq!(line.start, Cell::new(1, 2));
        assert_eq!(line.end, Cell::new(4, 2));
        assert_eq!(line.direction, Direction::new(1, 0));
    }

    #[test]
    fn test_vertical() {
        let line = resolve_line(&cells(&[(3, 5), (3, 0)])).unwrap();
        assert_eq!(line.shape, LineShape::Vertical);
        assert_eq!(line.start, Cell::new(3, 0));
        assert_eq!(line.end, Cell::new(3, 5));
        assert_eq!(line.direction, Direction::new(0, 1));
    }

    #[test]
    fn test_diagonal_down() {
        let line = resolve_line(&cells(&[(4, 3), (2, 1), (3, 2)])).unwrap();
        assert_eq!(line.shape, LineShape::DiagonalDown);
        assert_eq!(line.start, Cell::new(2, 1));
        assert_eq!(line.end, Cell::new(4, 3));
        assert_eq!(line.direction, Direction::new(1, 1));
    }

    #[test]
    fn test_diagonal_up() {
        let line = resolve_line(&cells(&[(2, 9), (5, 6), (11, 0)])).unwrap();
        assert_eq!(line.shape, LineShape::DiagonalUp);
        assert_eq!(line.start, Cell::new(2, 9));
        assert_eq!(line.end, Cell::new(11, 0));
        assert_eq!(line.direction, Direction::new(1, -1));
    }

    #[test]
    fn test_two_adjacent_diagonal_cells() {
        let line = resolve_line(&cells(&[(1, 1), (0, 2)])).unwrap();
        assert_eq!(line.shape, LineShape::DiagonalUp);
        assert_eq!(line.start, Cell::new(0, 2));
        assert_eq!(line.end, Cell::new(1, 1));
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = cells(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let mut shuffled = cells(&[(2, 2), (0, 0), (3, 3), (1, 1)]);
        assert_eq!(resolve_line(&forward), resolve_line(&shuffled));
        shuffled.reverse();
        assert_eq!(resolve_line(&forward), resolve_line(&shuffled));
    }

    #[test]
    fn test_not_a_line() {
        // knight's move
        assert_eq!(resolve_line(&cells(&[(0, 0), (1, 2)])), None);
        // L shape
        assert_eq!(resolve_line(&cells(&[(0, 0), (1, 0), (1, 1)])), None);
        // two points on a diagonal plus one off it
        assert_eq!(resolve_line(&cells(&[(0, 0), (2, 2), (3, 2)])), None);
    }

    #[test]
    fn test_too_few_cells() {
        assert_eq!(resolve_line(&[]), None);
        assert_eq!(resolve_line(&cells(&[(3, 3)])), None);
    }

    #[test]
    fn test_repeated_single_cell_is_not_a_line() {
        assert_eq!(resolve_line(&cells(&[(3, 3), (3, 3)])), None);
    }

    #[test]
    fn test_direction_is_unit() {
        assert!(Direction::new(1, -1).is_unit());
        assert!(Direction::new(0, 1).is_unit());
        assert!(!Direction::new(0, 0).is_unit());
        assert!(!Direction::new(2, 0).is_unit());
    }
}
