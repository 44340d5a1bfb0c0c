use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue with lazy deletion for label-setting searches
///
/// Entries are never updated in place: a better priority for an element is
/// pushed as a new entry, and outdated entries are discarded when they reach
/// the front (see [`MinQueue::pop_live`]). Among equal priorities the smallest
/// element is popped first.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
    /// Number of entries dropped by `pop_live`
    discarded: usize,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            discarded: 0,
        }
    }

    /// Creates a new empty priority queue with space for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
            discarded: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the queue, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, element: V, priority: P) {
        self.heap.push(Reverse((priority, element)));
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, element))| (element, priority))
    }

    /// Removes entries until one satisfies `is_live`, and returns it.
    /// Entries rejected along the way are counted in [`MinQueue::discarded`].
    pub fn pop_live<F>(&mut self, mut is_live: F) -> Option<(V, P)>
    where
        F: FnMut(V, P) -> bool,
    {
        while let Some((element, priority)) = self.pop() {
            if is_live(element, priority) {
                return Some((element, priority));
            }
            self.discarded += 1;
        }
        None
    }

    /// Returns the entry with the lowest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, element))| (*element, *priority))
    }

    /// Number of stale entries dropped so far
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.discarded = 0;
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
