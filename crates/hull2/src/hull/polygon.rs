//! `Hull`: the vertex sequence plus the queries consumers ask of it.

use nalgebra::Vector2;

use super::chain::compute_hull_with;
use super::error::HullError;
use super::scalar::{orient, HullScalar, Orientation};
use super::types::{HullCfg, Predicate};
use crate::geometry::shoelace_area;

/// Convex hull vertices in canonical order (see `compute_hull_with`).
///
/// Invariants:
/// - Distinct vertices, counterclockwise, first vertex lexicographically smallest.
/// - No repeated closing vertex; `closed_ring` adds it for renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull<T: HullScalar> {
    vertices: Vec<Vector2<T>>,
}

impl<T: HullScalar> Hull<T> {
    pub fn from_points(points: &[Vector2<T>], cfg: HullCfg) -> Result<Self, HullError> {
        compute_hull_with(points, cfg).map(|vertices| Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<T>] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Fewer than 3 vertices: no enclosed area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }
    pub fn into_vec(self) -> Vec<Vector2<T>> {
        self.vertices
    }

    /// Vertices followed by the first vertex again.
    pub fn closed_ring(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.vertices
            .iter()
            .copied()
            .chain(self.vertices.first().copied())
    }

    /// Shoelace area in `f64`; positive for every non-degenerate hull.
    pub fn signed_area(&self) -> f64 {
        let ring: Vec<Vector2<f64>> = self
            .vertices
            .iter()
            .map(|v| Vector2::new(v.x.to_f64(), v.y.to_f64()))
            .collect();
        shoelace_area(&ring)
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: Vector2<T>, predicate: Predicate) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [v] => *v == p,
            [a, b] => {
                orient(*a, *b, p, predicate) == Orientation::Collinear
                    && between(p.x, a.x, b.x)
                    && between(p.y, a.y, b.y)
            }
            vs => (0..vs.len()).all(|k| {
                orient(vs[k], vs[(k + 1) % vs.len()], p, predicate) != Orientation::Clockwise
            }),
        }
    }
}

impl<T: HullScalar> AsRef<[Vector2<T>]> for Hull<T> {
    fn as_ref(&self) -> &[Vector2<T>] {
        &self.vertices
    }
}

#[inline]
fn between<T: HullScalar>(v: T, a: T, b: T) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo <= v && v <= hi
}
