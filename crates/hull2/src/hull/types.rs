//! Hull configuration: which turns pop a chain vertex, and how turns are evaluated.

use super::scalar::Orientation;

/// Treatment of input points lying on a hull edge (strictly between two vertices).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Minimal vertex set: pop on `cross <= 0`. Only the endpoints of a
    /// collinear run survive.
    Drop,
    /// Every boundary point: pop on `cross < 0`.
    Keep,
}

impl CollinearPolicy {
    /// Whether a chain vertex followed by a turn `o` must be removed.
    #[inline]
    pub(crate) fn pops(self, o: Orientation) -> bool {
        match self {
            CollinearPolicy::Drop => o != Orientation::CounterClockwise,
            CollinearPolicy::Keep => o == Orientation::Clockwise,
        }
    }
}

/// How the sign of the cross product is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Plain arithmetic in the scalar's widened type. Exact for integers; for
    /// floats, near-collinear triples may be misclassified.
    Fast,
    /// Adaptive exact orientation for floats (Shewchuk). Same as `Fast` for integers.
    Exact,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    pub collinear: CollinearPolicy,
    pub predicate: Predicate,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            collinear: CollinearPolicy::Drop,
            predicate: Predicate::Fast,
        }
    }
}
