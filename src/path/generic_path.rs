use super::Cost;

use std::ops::Deref;

/// A Path through the Grid, from the start Cell to the goal Cell (both inclusive), together with
/// the total cost of walking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P: Copy> Path<P> {
    /// Creates a Path from its ordered steps and total cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// Creates a Path by copying the steps out of a slice
    pub fn from_slice(path: &[P], cost: Cost) -> Path<P> {
        Path::new(path.to_vec(), cost)
    }

    /// The total cost of walking the Path: the sum of the Weights of every step after the start
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Cells on the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no Cells at all
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The first Cell of the Path
    pub fn start(&self) -> Option<P> {
        self.path.first().copied()
    }

    /// The last Cell of the Path
    pub fn goal(&self) -> Option<P> {
        self.path.last().copied()
    }

    /// Iterates over the Cells from start to goal
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}
