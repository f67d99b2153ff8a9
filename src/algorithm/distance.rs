use num_traits::{PrimInt, Saturating, Unsigned};
use std::cmp::Ordering;
use std::fmt;

/// A distance from the source vertex: either a finite weight sum or the
/// "infinitely far" sentinel
///
/// Modeled as a tagged value rather than a numeric maximum so that relaxation
/// never performs arithmetic on the sentinel. The derived ordering places
/// every finite distance below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// A known distance from the source
    Finite(W),
    /// Not (yet) reached from the source
    Infinite,
}

impl<W> Distance<W>
where
    W: PrimInt + Unsigned + Saturating,
{
    /// Adds an edge weight to this distance
    ///
    /// `Infinite` absorbs any weight, and finite additions saturate at the
    /// weight type's maximum instead of wrapping.
    pub fn plus(self, weight: W) -> Self {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Returns true if this is a finite distance
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite distance, or `None` for `Infinite`
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// A vertex paired with its current best known distance from the source
///
/// This is the entry type the shortest-path engine keeps in the addressable
/// heap. Ordering is by distance first, then vertex ID, so ties among equal
/// distances break deterministically regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEstimate<W> {
    /// The vertex this estimate belongs to
    pub vertex: usize,

    /// Current best known distance from the source
    pub distance: Distance<W>,
}

impl<W> DistanceEstimate<W> {
    /// Creates an estimate for a vertex not yet reached from the source
    pub fn unreached(vertex: usize) -> Self {
        DistanceEstimate {
            vertex,
            distance: Distance::Infinite,
        }
    }

    /// Creates an estimate with a known finite distance
    pub fn finite(vertex: usize, distance: W) -> Self {
        DistanceEstimate {
            vertex,
            distance: Distance::Finite(distance),
        }
    }
}

impl<W: Ord> Ord for DistanceEstimate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl<W: Ord> PartialOrd for DistanceEstimate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
