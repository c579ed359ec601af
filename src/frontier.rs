//! The min-priority Frontier used by the search.

use crate::Cost;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A Queue that always hands out the pending item with the lowest priority first.
///
/// Entries are ordered by `(priority, item)`, so items with the same priority come out in their
/// natural order (lexicographic for [`Cell`](crate::Cell)s). Inserting the same item more than
/// once is allowed, every copy is kept until it is taken out again.
///
/// ## Examples
/// ```
/// use grid_astar::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.put('a', 9);
/// queue.put('b', 1);
/// queue.put('c', 5);
///
/// assert_eq!(queue.get(), 'b');
/// assert_eq!(queue.get(), 'c');
/// assert_eq!(queue.get(), 'a');
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T: Ord> {
    elements: BinaryHeap<Reverse<(Cost, T)>>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty Queue
    pub fn new() -> Self {
        PriorityQueue {
            elements: BinaryHeap::new(),
        }
    }

    /// Creates an empty Queue with space for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            elements: BinaryHeap::with_capacity(capacity),
        }
    }

    /// `true` if there is nothing left to [`get`](PriorityQueue::get)
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The number of pending entries, duplicates included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Inserts `item` with the given priority. Lower priorities are handed out first.
    pub fn put(&mut self, item: T, priority: Cost) {
        self.elements.push(Reverse((priority, item)));
    }

    /// Removes and returns the item with the lowest priority.
    ///
    /// ## Panics
    /// If the Queue is empty. Check [`is_empty`](PriorityQueue::is_empty) first or use
    /// [`pop`](PriorityQueue::pop).
    #[track_caller]
    pub fn get(&mut self) -> T {
        self.pop().expect("get called on an empty PriorityQueue")
    }

    /// Removes and returns the item with the lowest priority, or `None` if the Queue is empty
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop().map(|Reverse((_, item))| item)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
