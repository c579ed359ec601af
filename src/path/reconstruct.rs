use crate::{grid::CameFrom, Cell, PathError};

/// Walks the predecessor links of a search back from `goal` to `start`.
///
/// Returns the Cells from `start` to `goal`, both inclusive.
///
/// ## Errors
/// - [`PathError::Unreachable`] if the search never reached `goal`.
/// - [`PathError::BrokenChain`] if the links end or loop before arriving at `start`.
pub fn reconstruct_path(came_from: &CameFrom, start: Cell, goal: Cell) -> Result<Vec<Cell>, PathError> {
    if !came_from.contains_key(&goal) {
        return Err(PathError::Unreachable { start, goal });
    }

    let mut path = vec![];
    let mut current = goal;

    while current != start {
        // a valid chain visits every Cell at most once
        if path.len() >= came_from.len() {
            return Err(PathError::BrokenChain { at: current });
        }
        path.push(current);
        current = match came_from.get(&current) {
            Some(Some(prev)) => *prev,
            _ => return Err(PathError::BrokenChain { at: current }),
        };
    }
    path.push(start);
    path.reverse();
    Ok(path)
}
