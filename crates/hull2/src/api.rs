//! Curated re-exports for callers outside the crate (CLI, bindings).
//!
//! Prefer these over reaching into submodules so call sites stay stable when
//! the module layout moves.

pub use crate::geometry::{cross, parallelogram_area, shoelace_area};
pub use crate::hull::{
    compute_hull, compute_hull_with, orient, CollinearPolicy, Hull, HullCfg, HullError,
    HullScalar, Orientation, Predicate,
};
pub use crate::sample::{uniform_points, ReplayToken, SampleBox};
