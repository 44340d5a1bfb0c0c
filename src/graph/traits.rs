use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Identifier of a node: any ordered, hashable key
///
/// The ordering is what makes searches deterministic: among equally distant
/// nodes, the one with the lowest key is always finalized first.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Edge weight type
pub trait Weight: Copy + Ord + Debug + Zero + Add<Output = Self> {
    /// Returns true if the weight can be used by a label-setting search,
    /// i.e. it is non-negative and finite
    fn is_admissible(&self) -> bool;

    /// Adds two weights, returning `None` when the sum cannot be represented
    /// (integer overflow, or a float sum that is no longer finite)
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn is_admissible(&self) -> bool {
                    true
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn is_admissible(&self) -> bool {
                    *self >= 0
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

unsigned_weight!(u8, u16, u32, u64, u128, usize);
signed_weight!(i8, i16, i32, i64, i128, isize);

impl Weight for OrderedFloat<f32> {
    fn is_admissible(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

impl Weight for OrderedFloat<f64> {
    fn is_admissible(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    fn checked_sum(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(OrderedFloat(sum))
    }
}

/// Trait representing a weighted directed graph keyed by `N`
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all nodes, in no particular order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges from a node
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Checks every edge weight, reporting the inadmissible edge with the
    /// lowest `(from, to)` pair
    fn validate_weights(&self) -> Result<()> {
        let mut offending: Option<(&N, &N, W)> = None;

        for from in self.nodes() {
            for (to, weight) in self.outgoing_edges(from) {
                if weight.is_admissible() {
                    continue;
                }
                let lower = match offending {
                    None => true,
                    Some((f, t, _)) => (from, to) < (f, t),
                };
                if lower {
                    offending = Some((from, to, weight));
                }
            }
        }

        match offending {
            None => Ok(()),
            Some((from, to, weight)) => Err(Error::InvalidWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            }),
        }
    }
}

/// Trait for building graphs
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adds a node without edges; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge, registering both endpoints as nodes.
    ///
    /// Returns true if the edge is new, false if an existing edge had its
    /// weight replaced. Weights are not checked here; searches validate them.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;
}
