use std::fmt;

use crate::graph::Weight;

/// Tentative or final distance of a node from the search source
///
/// `Unreachable` compares greater than every finite distance, so the derived
/// ordering is exactly the one a label-setting search needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// Length of the shortest known path
    Finite(W),
    /// No path known (or none exists once the search has finished)
    Unreachable,
}

impl<W: Weight> Distance<W> {
    /// The distance of the source to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns the finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// Extends this distance by one edge, or returns `None` if the new
    /// length is not representable by `W`
    pub fn extend(self, weight: W) -> Option<Self> {
        match self {
            Distance::Finite(w) => w.checked_sum(weight).map(Distance::Finite),
            Distance::Unreachable => Some(Distance::Unreachable),
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        match value {
            Some(w) => Distance::Finite(w),
            None => Distance::Unreachable,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => w.fmt(f),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn test_unreachable_orders_above_finite() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(1u32) < Distance::Finite(2u32));
        assert_eq!(
            vec![Distance::Unreachable, Distance::Finite(3), Distance::Finite(1)]
                .into_iter()
                .min(),
            Some(Distance::Finite(1u8))
        );
    }

    #[test]
    fn test_extend() {
        assert_eq!(Distance::<u32>::zero().extend(4), Some(Distance::Finite(4)));
        assert_eq!(Distance::<u32>::Unreachable.extend(4), Some(Distance::Unreachable));
        assert_eq!(Distance::Finite(250u8).extend(10), None);
        assert_eq!(Distance::Finite(OrderedFloat(f64::MAX)).extend(OrderedFloat(f64::MAX)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Distance::Finite(OrderedFloat(2.5f64)).to_string(), "2.5");
        assert_eq!(Distance::<u32>::Unreachable.to_string(), "inf");
    }
}
