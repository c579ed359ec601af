use super::Grid;
use crate::{heuristic, reconstruct_path, Cell, CellMap, Cost, Path, PathError, PriorityQueue};

/// Upper bound for the capacity reserved up front, the maps grow past it as needed
const MAX_SIZE_HINT: usize = 4096;

/// For every reached Cell, the Cell it was reached from. The start maps to `None`.
pub type CameFrom = CellMap<Option<Cell>>;
/// For every reached Cell, the lowest known cost of getting there from the start.
pub type CostSoFar = CellMap<Cost>;

/// Runs A* on `grid` from `start` towards `goal`.
///
/// Returns the predecessor links and the cost of every Cell that was reached. The search stops as
/// soon as `goal` is expanded, at which point `cost_so_far[&goal]` is the lowest possible cost.
/// If `goal` cannot be reached the search runs until the Frontier is exhausted and the returned
/// maps simply do not contain `goal`; [`reconstruct_path`] then fails with
/// [`PathError::Unreachable`].
///
/// `start` itself is never checked against the bounds or the Walls of the Grid.
pub fn a_star_search(grid: &Grid, start: Cell, goal: Cell) -> (CameFrom, CostSoFar) {
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    let size_hint = grid.width().saturating_mul(grid.height()).min(MAX_SIZE_HINT);

    let mut frontier = PriorityQueue::with_capacity(size_hint / 2);
    let mut came_from = CameFrom::with_capacity(size_hint);
    let mut cost_so_far = CostSoFar::with_capacity(size_hint);

    frontier.put(start, 0);
    came_from.insert(start, None);
    cost_so_far.insert(start, 0);

    let mut all_neighbors = Vec::with_capacity(4);

    #[cfg(feature = "log")]
    let mut expanded = 0usize;

    re_trace!("a_star setup", timer);

    while let Some(current) = frontier.pop() {
        if current == goal {
            break;
        }
        #[cfg(feature = "log")]
        {
            expanded += 1;
        }

        let current_cost = cost_so_far[&current];

        all_neighbors.clear();
        grid.neighbors_into(current, &mut all_neighbors);

        for &next in all_neighbors.iter() {
            let new_cost = current_cost + grid.cost(current, next);
            let improved = match cost_so_far.get(&next) {
                Some(&prev_cost) => new_cost < prev_cost,
                None => true,
            };
            if improved {
                cost_so_far.insert(next, new_cost);
                frontier.put(next, new_cost + heuristic(goal, next));
                came_from.insert(next, Some(current));
            }
        }
    }

    re_trace!("a_star main loop", timer);

    #[cfg(feature = "log")]
    log::debug!(
        "a_star_search {:?} -> {:?}: expanded {} cells, reached {}, cost {:?}",
        start,
        goal,
        expanded,
        cost_so_far.len(),
        cost_so_far.get(&goal)
    );

    re_trace!("a_star total", outer_timer);

    (came_from, cost_so_far)
}

/// Searches for the cheapest Path from `start` to `goal`.
///
/// This is [`a_star_search`] followed by [`reconstruct_path`], with the cost of the goal attached
/// to the resulting [`Path`].
///
/// ## Errors
/// [`PathError::Unreachable`] if there is no way from `start` to `goal`.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Path<Cell>, PathError> {
    let (came_from, cost_so_far) = a_star_search(grid, start, goal);

    let cost = match cost_so_far.get(&goal) {
        Some(&cost) => cost,
        None => {
            #[cfg(feature = "log")]
            log::debug!("find_path: {:?} is unreachable from {:?}", goal, start);
            return Err(PathError::Unreachable { start, goal });
        }
    };

    let steps = reconstruct_path(&came_from, start, goal)?;
    Ok(Path::new(steps, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Terrain;

    fn path_cost(grid: &Grid, steps: &[Cell]) -> Cost {
        steps.windows(2).map(|w| grid.cost(w[0], w[1])).sum()
    }

    #[test]
    fn basic() {
        // 0 = empty, 1 = swamp, 2 = wall
        let tiles: [[usize; 5]; 5] = [
            [0, 2, 0, 0, 0],
            [0, 2, 2, 2, 2],
            [0, 1, 0, 0, 0],
            [0, 1, 0, 2, 0],
            [0, 0, 0, 2, 0],
        ];
        const COST_MAP: [Terrain; 3] = [Terrain::Open, Terrain::Weighted(10), Terrain::Wall];

        let grid = Grid::from_terrain(5, 5, |(x, y)| COST_MAP[tiles[y as usize][x as usize]]);

        // (4, 4) is reachable
        let path = find_path(&grid, (0, 0), (4, 4)).unwrap();
        assert_eq!(path.start(), Some((0, 0)));
        assert_eq!(path.goal(), Some((4, 4)));
        // down the left column, along the bottom row, then around the wall on the right
        assert_eq!(path.cost(), 12);
        assert_eq!(path_cost(&grid, &path), path.cost());

        // (2, 0) is not reachable
        assert_eq!(
            find_path(&grid, (0, 0), (2, 0)),
            Err(PathError::Unreachable {
                start: (0, 0),
                goal: (2, 0)
            })
        );
    }

    #[test]
    fn start_is_goal() {
        let grid = Grid::new(3, 3);
        let (came_from, cost_so_far) = a_star_search(&grid, (1, 1), (1, 1));
        assert_eq!(came_from.len(), 1);
        assert_eq!(cost_so_far[&(1, 1)], 0);

        let path = find_path(&grid, (1, 1), (1, 1)).unwrap();
        assert_eq!(&path[..], &[(1, 1)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn short_search_on_huge_grid() {
        let grid = Grid::new(100_000, 100_000);
        let path = find_path(&grid, (0, 0), (1, 0)).unwrap();
        assert_eq!(&path[..], &[(0, 0), (1, 0)]);
        assert_eq!(path.cost(), 1);

        let grid = Grid::new(usize::MAX, usize::MAX);
        let (came_from, cost_so_far) = a_star_search(&grid, (0, 0), (0, 0));
        assert_eq!(came_from.len(), 1);
        assert_eq!(cost_so_far[&(0, 0)], 0);
    }

    #[test]
    fn straight_line() {
        let grid = Grid::new(5, 1);
        let (came_from, cost_so_far) = a_star_search(&grid, (0, 0), (4, 0));
        assert_eq!(cost_so_far[&(4, 0)], 4);
        assert_eq!(came_from[&(0, 0)], None);
        assert_eq!(came_from[&(4, 0)], Some((3, 0)));
        assert_eq!(
            reconstruct_path(&came_from, (0, 0), (4, 0)).unwrap(),
            [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn equal_priorities_expand_smaller_cells_first() {
        // every monotone path costs the same, (0, 1) is taken off the Frontier before (1, 0)
        let grid = Grid::new(3, 3);
        let path = find_path(&grid, (0, 0), (2, 2)).unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(&path[..], &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn prefers_cheaper_route() {
        // two corridors around a block of walls, the upper one is muddy
        // . 3 3 3 .
        // . # # # .
        // . . . . .
        let grid = Grid::new(5, 3)
            .with_walls([(1, 1), (2, 1), (3, 1)])
            .with_weights([((1, 0), 3), ((2, 0), 3), ((3, 0), 3)]);

        let path = find_path(&grid, (0, 0), (4, 0)).unwrap();
        assert_eq!(path.cost(), 8);
        assert!(!path.contains(&(2, 0)));
        assert_eq!(
            &path[..],
            &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (4, 1), (4, 0)]
        );
    }

    #[test]
    fn heavier_detour_never_lowers_cost() {
        // . 2 2 2 .
        // S # # # G
        // . w w w .
        let base = Grid::new(5, 3)
            .with_walls([(1, 1), (2, 1), (3, 1)])
            .with_weights([((1, 0), 2), ((2, 0), 2), ((3, 0), 2)]);

        let costs: Vec<Cost> = (1..6)
            .map(|weight| {
                let grid = base
                    .clone()
                    .with_weights([((1, 2), weight), ((2, 2), weight), ((3, 2), weight)]);
                find_path(&grid, (0, 1), (4, 1)).unwrap().cost()
            })
            .collect();

        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(costs, [6, 9, 9, 9, 9]);
    }

    #[test]
    fn revisits_cells_with_better_cost() {
        // (0, 0) is first reached through (0, 1) for 4, and later through (1, 0) for 3
        // . . . .
        // 2 . S .
        // 8 . . .
        let grid = Grid::new(4, 3).with_weights([((0, 1), 2), ((0, 2), 8)]);
        let (came_from, cost_so_far) = a_star_search(&grid, (2, 1), (0, 2));
        assert_eq!(cost_so_far[&(0, 0)], 3);
        assert_eq!(came_from[&(0, 0)], Some((1, 0)));
        assert_eq!(cost_so_far[&(0, 2)], 10);
        assert_eq!(came_from[&(0, 2)], Some((1, 2)));
    }

    #[test]
    fn unreachable_leaves_goal_out() {
        let grid = Grid::new(5, 5).with_walls([(2, 1), (1, 2), (3, 2), (2, 3)]);
        let (came_from, cost_so_far) = a_star_search(&grid, (0, 0), (2, 2));
        assert!(!came_from.contains_key(&(2, 2)));
        assert!(!cost_so_far.contains_key(&(2, 2)));
        // everything outside the ring was explored
        assert_eq!(cost_so_far.len(), 25 - 5);
        assert_eq!(
            reconstruct_path(&came_from, (0, 0), (2, 2)),
            Err(PathError::Unreachable {
                start: (0, 0),
                goal: (2, 2)
            })
        );
    }

    #[test]
    fn idempotent() {
        let grid = Grid::new(6, 6)
            .with_walls([(2, 0), (2, 1), (2, 2), (4, 5), (4, 4), (4, 3)])
            .with_weights([((1, 4), 3), ((3, 3), 2)]);
        let first = a_star_search(&grid, (0, 0), (5, 5));
        let second = a_star_search(&grid, (0, 0), (5, 5));
        assert_eq!(first, second);
    }
}
