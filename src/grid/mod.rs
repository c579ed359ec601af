//! The Grid and the search running on it.

mod a_star;
pub use a_star::{a_star_search, find_path, CameFrom, CostSoFar};

use crate::{Cell, CellMap, CellSet, Cost};

use std::fmt;

/// The Weight of every Cell that was not given one explicitly
pub const DEFAULT_WEIGHT: Cost = 1;

/// How a single Cell can be traversed, as reported to [`Grid::from_terrain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terrain {
    /// Walkable with the default Weight
    Open,
    /// Walkable, but entering it costs the given Weight
    Weighted(Cost),
    /// Never walkable
    Wall,
}

/// A rectangular Grid of Cells with Walls and per-Cell Weights.
///
/// Cells range from `(0, 0)` to `(width - 1, height - 1)`. Walls may also be placed outside of
/// that range, they simply have no effect there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    walls: CellSet,
    weights: CellMap<Cost>,
}

impl Grid {
    /// Creates an empty Grid without Walls where every Cell has the default Weight of 1
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            walls: CellSet::default(),
            weights: CellMap::default(),
        }
    }

    /// Creates a Grid by asking `classify` about every Cell in bounds.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::{Grid, Terrain};
    ///
    /// // 0 = empty, 1 = dirt, 2 = rock
    /// let tiles = [
    ///     [0, 2, 0],
    ///     [1, 1, 0],
    /// ];
    ///
    /// let grid = Grid::from_terrain(3, 2, |(x, y)| match tiles[y as usize][x as usize] {
    ///     0 => Terrain::Open,
    ///     1 => Terrain::Weighted(2),
    ///     _ => Terrain::Wall,
    /// });
    ///
    /// assert!(!grid.passable((1, 0)));
    /// assert_eq!(grid.cost((0, 0), (0, 1)), 2);
    /// assert_eq!(grid.cost((0, 0), (2, 1)), 1);
    /// ```
    pub fn from_terrain(width: usize, height: usize, mut classify: impl FnMut(Cell) -> Terrain) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height as isize {
            for x in 0..width as isize {
                match classify((x, y)) {
                    Terrain::Open => {}
                    Terrain::Weighted(weight) => grid.set_weight((x, y), weight),
                    Terrain::Wall => grid.add_wall((x, y)),
                }
            }
        }
        grid
    }

    /// Adds all the given Walls
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Cell>) -> Grid {
        self.walls.extend(walls);
        self
    }

    /// Assigns all the given Weights
    pub fn with_weights(mut self, weights: impl IntoIterator<Item = (Cell, Cost)>) -> Grid {
        self.weights.extend(weights);
        self
    }

    /// Marks `cell` as a Wall
    pub fn add_wall(&mut self, cell: Cell) {
        self.walls.insert(cell);
    }

    /// Removes the Wall at `cell`. Returns `false` if there was none.
    pub fn remove_wall(&mut self, cell: Cell) -> bool {
        self.walls.remove(&cell)
    }

    /// Sets the cost of stepping onto `cell`
    pub fn set_weight(&mut self, cell: Cell, weight: Cost) {
        self.weights.insert(cell, weight);
    }

    /// The width of the Grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the Grid
    pub fn height(&self) -> usize {
        self.height
    }

    /// All the Walls of the Grid
    pub fn walls(&self) -> &CellSet {
        &self.walls
    }

    /// `true` if `cell` is a Wall
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// The Weight of `cell`, which is [`DEFAULT_WEIGHT`] unless set otherwise
    pub fn weight(&self, cell: Cell) -> Cost {
        self.weights.get(&cell).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// `true` if `0 <= x < width` and `0 <= y < height`
    pub fn in_bounds(&self, (x, y): Cell) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// `true` if `cell` is not a Wall. Does not check the bounds.
    pub fn passable(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// The in-bounds, passable Cells next to `cell`, in the order east, north, west, south.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::Grid;
    ///
    /// let grid = Grid::new(5, 5);
    /// assert_eq!(grid.neighbors((2, 2)), [(3, 2), (2, 1), (1, 2), (2, 3)]);
    /// assert_eq!(grid.neighbors((0, 0)), [(1, 0), (0, 1)]);
    /// ```
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut target = Vec::with_capacity(4);
        self.neighbors_into(cell, &mut target);
        target
    }

    /// Same as [`neighbors`](Grid::neighbors), but appends to an existing buffer
    pub fn neighbors_into(&self, (x, y): Cell, target: &mut Vec<Cell>) {
        let candidates = [(x + 1, y), (x, y - 1), (x - 1, y), (x, y + 1)];
        target.extend(
            candidates
                .into_iter()
                .filter(|&c| self.in_bounds(c))
                .filter(|&c| self.passable(c)),
        );
    }

    /// The cost of stepping from `_from` onto `to`. Only the destination matters.
    pub fn cost(&self, _from: Cell, to: Cell) -> Cost {
        self.weight(to)
    }
}

impl fmt::Display for Grid {
    /// One line per row: `#` for Walls, the Weight for Cells heavier than 1 (`+` above 9) and
    /// `.` for everything else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                let symbol = if self.is_wall((x, y)) {
                    '#'
                } else {
                    match self.weight((x, y)) {
                        0..=1 => '.',
                        w @ 2..=9 => char::from_digit(w as u32, 10).unwrap_or('+'),
                        _ => '+',
                    }
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
