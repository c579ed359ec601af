//! The distance estimate that guides the search.

use crate::{Cell, Cost};

/// The Manhattan distance between `a` and `b`.
///
/// Never overestimates the cost of a 4-directional Path when every step costs at least 1.
///
/// ## Examples
/// ```
/// use grid_astar::heuristic;
///
/// assert_eq!(heuristic((10, 10), (5, 5)), 10);
/// assert_eq!(heuristic((-10, -10), (5, 5)), 30);
/// ```
pub fn heuristic(a: Cell, b: Cell) -> Cost {
    let (x1, y1) = a;
    let (x2, y2) = b;
    x1.abs_diff(x2) + y1.abs_diff(y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_numbers() {
        assert_eq!(heuristic((10, 10), (5, 5)), 10);
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(heuristic((-10, -10), (5, 5)), 30);
    }

    #[test]
    fn symmetric_and_zero_only_on_same_cell() {
        let cells = [(0, 0), (3, -2), (-7, 4), (3, 4), (0, 1)];
        for &a in cells.iter() {
            for &b in cells.iter() {
                assert_eq!(heuristic(a, b), heuristic(b, a));
                assert_eq!(heuristic(a, b) == 0, a == b);
            }
        }
    }
}
