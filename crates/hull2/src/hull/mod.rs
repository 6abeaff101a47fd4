//! Planar convex hull (Andrew's monotone chain).
//!
//! Purpose
//! - Turn an unordered point multiset into its hull boundary in canonical form:
//!   distinct vertices, counterclockwise, starting at the lexicographically
//!   smallest point, no repeated closing vertex.
//! - Keep the turn predicate explicit (`Predicate`) and the treatment of points
//!   lying on hull edges a policy (`CollinearPolicy`), not a hardcoded choice.
//!
//! Numerics
//! - `f64`/`f32` evaluate the cross product in `f64` (`Predicate::Fast`) or with
//!   adaptive exact arithmetic (`Predicate::Exact`).
//! - `i32` widens to `i128`; the sign is exact for every input.
//!
//! Code cross-refs: `compute_hull_with`, `Hull`, `HullScalar::cross_sign`

mod chain;
mod error;
mod polygon;
mod scalar;
mod types;

pub use chain::{compute_hull, compute_hull_with};
pub use error::HullError;
pub use polygon::Hull;
pub use scalar::{orient, HullScalar, Orientation};
pub use types::{CollinearPolicy, HullCfg, Predicate};
