use crate::Cell;

/// The ways in which turning a search result into a Path can fail.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The search never reached `goal`, so there is no predecessor chain to follow.
    #[error("no path found from {start:?} to {goal:?}")]
    Unreachable {
        /// Where the Path was supposed to start
        start: Cell,
        /// The Cell that could not be reached
        goal: Cell,
    },
    /// The predecessor chain stopped (or went in circles) at `at` before arriving at the start.
    ///
    /// This only happens when the predecessor map was built for a different start Cell or was
    /// modified after the search.
    #[error("predecessor chain is broken at {at:?}")]
    BrokenChain {
        /// The last Cell that could be visited
        at: Cell,
    },
}
