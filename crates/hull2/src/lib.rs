//! Convex hulls of planar point sets.
//!
//! The only algorithmic content is Andrew's monotone chain (`hull`). Everything
//! else in the workspace (CLI, sampling, bindings) is glue around it.
//!
//! API Policy
//! - The crate is small on purpose: one hull routine, its configuration, and a
//!   `Hull` value type with the derived queries renderers need.
//! - Coordinates are `nalgebra::Vector2<T>` for any `T: HullScalar`.

pub mod api;
pub mod geometry;
pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compute_hull, compute_hull_with, Hull, HullCfg, HullError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        compute_hull, compute_hull_with, orient, CollinearPolicy, Hull, HullCfg, HullError,
        HullScalar, Orientation, Predicate,
    };
    pub use crate::sample::{uniform_points, ReplayToken, SampleBox};
    pub use nalgebra::Vector2 as Vec2;
}
