//! Path building: expand a line into every cell it crosses.

use crate::grid::Cell;
use crate::line::{Direction, LineDescription};

/// All cells from `start` to `end` inclusive, stepping by `direction`.
///
/// The walk takes exactly `max(|Δx|, |Δy|)` steps. If `direction` is not a
/// unit step, or stepping that many times from `start` does not land on
/// `end`, there is no such path and `None` is returned instead of walking
/// off forever.
#[must_use]
pub fn build_path(start: Cell, end: Cell, direction: Direction) -> Option<Vec<Cell>> {
    let steps = start.x.abs_diff(end.x).max(start.y.abs_diff(end.y));
    if steps == 0 {
        return Some(vec![start]);
    }
    if !direction.is_unit() {
        return None;
    }

    let mut path = Vec::with_capacity(steps + 1);
    let (mut x, mut y) = (start.x as isize, start.y as isize);
    for _ in 0..=steps {
        path.push(Cell::new(usize::try_from(x).ok()?, usize::try_from(y).ok()?));
        x += direction.dx;
        y += direction.dy;
    }

    (path.last() == Some(&end)).then_some(path)
}

/// [`build_path`] over a resolved line.
#[must_use]
pub fn line_path(line: &LineDescription) -> Option<Vec<Cell>> {
    build_path(line.start, line.end, line.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::resolve_line;

    #[test]
    fn test_horizontal_path() {
        let path = build_path(Cell::new(1, 0), Cell::new(4, 0), Direction::new(1, 0)).unwrap();
        assert_eq!(
            path,
            vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(3, 0), Cell::new(4, 0)]
        );
    }

    #[test]
    fn test_diagonal_up_path() {
        let path = build_path(Cell::new(0, 3), Cell::new(3, 0), Direction::new(1, -1)).unwrap();
        assert_eq!(
            path,
            vec![Cell::new(0, 3), Cell::new(1, 2), Cell::new(2, 1), Cell::new(3, 0)]
        );
    }

    #[test]
    fn test_path_length() {
        let path = build_path(Cell::new(2, 2), Cell::new(2, 9), Direction::new(0, 1)).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path.first(), Some(&Cell::new(2, 2)));
        assert_eq!(path.last(), Some(&Cell::new(2, 9)));
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(
            build_path(Cell::new(5, 5), Cell::new(5, 5), Direction::new(1, 0)),
            Some(vec![Cell::new(5, 5)])
        );
    }

    #[test]
    fn test_inconsistent_direction_terminates() {
        // pointing away from the end
        assert_eq!(build_path(Cell::new(1, 0), Cell::new(4, 0), Direction::new(-1, 0)), None);
        // wrong axis
        assert_eq!(build_path(Cell::new(1, 0), Cell::new(4, 0), Direction::new(0, 1)), None);
        // not a unit step
        assert_eq!(build_path(Cell::new(0, 0), Cell::new(4, 0), Direction::new(2, 0)), None);
        assert_eq!(build_path(Cell::new(0, 0), Cell::new(4, 0), Direction::new(0, 0)), None);
        // ends not on a 45 degree line
        assert_eq!(build_path(Cell::new(0, 0), Cell::new(3, 1), Direction::new(1, 1)), None);
    }

    #[test]
    fn test_line_path_covers_gaps() {
        let line = resolve_line(&[Cell::new(6, 1), Cell::new(2, 1)]).unwrap();
        let path = line_path(&line).unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.contains(&Cell::new(4, 1)));
    }
}
