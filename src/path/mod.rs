//! Paths and how they are rebuilt from the result of a search.

mod generic_path;
pub use generic_path::Path;

mod reconstruct;
pub use reconstruct::reconstruct_path;

/// The Type used for Weights and the accumulated cost of Paths
pub type Cost = usize;
