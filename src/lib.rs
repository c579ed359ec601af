#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path between two Cells on a weighted Grid.
//!
//! ## Introduction
//! The Grid is a rectangle of `width * height` Cells. Some Cells are Walls and can never be
//! entered, the others have a Weight that is paid whenever a Path steps onto them (1 unless
//! stated otherwise). Movement is 4-directional: east, north, west and south.
//!
//! The search is a plain A* using the Manhattan distance as its Heuristic. Since every Weight is
//! at least 1, that Heuristic never overestimates, so the first time the goal is taken off the
//! Frontier its cost is optimal.
//!
//! ## Examples
//! Creating a Grid and finding a Path:
//! ```
//! use grid_astar::prelude::*;
//!
//! // .  #  .  .
//! // .  #  .  .
//! // .  5  .  .
//! // .  .  .  #
//! let grid = Grid::new(4, 4)
//!     .with_walls([(1, 0), (1, 1), (3, 3)])
//!     .with_weights([((1, 2), 5)]);
//!
//! let path = find_path(&grid, (0, 0), (2, 0)).unwrap();
//!
//! assert_eq!(path.start(), Some((0, 0)));
//! assert_eq!(path.goal(), Some((2, 0)));
//! // walking around the weighted Cell is cheaper than crossing it
//! assert!(!path.contains(&(1, 2)));
//! assert_eq!(path.cost(), 8);
//! ```
//!
//! The two underlying steps can also be called separately, which gives access to the cost of
//! every Cell that was reached during the search:
//! ```
//! use grid_astar::prelude::*;
//!
//! let grid = Grid::new(5, 5);
//! let (came_from, cost_so_far) = a_star_search(&grid, (0, 0), (4, 4));
//!
//! assert_eq!(cost_so_far[&(4, 4)], 8);
//!
//! let steps = reconstruct_path(&came_from, (0, 0), (4, 4)).unwrap();
//! assert_eq!(steps.len(), 9);
//! ```
//!
//! A goal that cannot be reached is reported as an Error instead of a partial Path:
//! ```
//! use grid_astar::prelude::*;
//!
//! let grid = Grid::new(3, 3).with_walls([(1, 0), (0, 1), (2, 1), (1, 2)]);
//!
//! assert_eq!(
//!     find_path(&grid, (0, 0), (1, 1)),
//!     Err(PathError::Unreachable { start: (0, 0), goal: (1, 1) })
//! );
//! ```
//!
//! ## Features
//! - `log`: emit the outcome and timings of every search through the [`log`](https://docs.rs/log) crate.

/// A shorthand for Cells on the grid
pub type Cell = (isize, isize);

/// A HashMap keyed by [`Cell`]
pub type CellMap<V> = hashbrown::HashMap<Cell, V>;
/// A HashSet of [`Cell`]s
pub type CellSet = hashbrown::HashSet<Cell>;

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod error;
pub use error::PathError;

pub mod frontier;
pub use frontier::PriorityQueue;

pub mod heuristic;
pub use heuristic::heuristic;

pub mod grid;
pub use grid::{a_star_search, find_path, CameFrom, CostSoFar, Grid, Terrain};

pub mod path;
pub use path::{reconstruct_path, Cost, Path};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        a_star_search, find_path, heuristic, reconstruct_path, Cell, CellMap, CellSet, Cost,
        Grid, Path, PathError, PriorityQueue, Terrain,
    };
}
