//! Coordinate types accepted by the hull and the orientation predicate.

use std::cmp::Ordering;

use nalgebra::{Scalar, Vector2};

use super::types::Predicate;
use crate::geometry::cross;

/// Turn direction of an ordered triple `(o, a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// `cross(o, a, b) > 0` (left turn).
    CounterClockwise,
    /// `cross(o, a, b) = 0`.
    Collinear,
    /// `cross(o, a, b) < 0` (right turn).
    Clockwise,
}

impl Orientation {
    #[inline]
    fn from_sign(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Orientation::CounterClockwise,
            Ordering::Equal => Orientation::Collinear,
            Ordering::Less => Orientation::Clockwise,
        }
    }
}

/// A coordinate type the monotone chain can sort, dedup, and orient.
pub trait HullScalar: Scalar + Copy + PartialOrd {
    /// False for values the hull cannot order (NaN, ±∞).
    fn is_valid(self) -> bool;
    /// Representative used for dedup and sorting (`-0.0` becomes `0.0`).
    fn canonical(self) -> Self;
    /// Total order; agrees with `==` on valid, canonical values.
    fn cmp_coord(self, other: Self) -> Ordering;
    fn to_f64(self) -> f64;
    /// Sign of `cross(o, a, b) = (a - o) × (b - o)`.
    fn cross_sign(
        o: Vector2<Self>,
        a: Vector2<Self>,
        b: Vector2<Self>,
        predicate: Predicate,
    ) -> Ordering;
}

/// Orientation of `(o, a, b)`: counterclockwise iff `b` lies left of the ray o→a.
#[inline]
pub fn orient<T: HullScalar>(
    o: Vector2<T>,
    a: Vector2<T>,
    b: Vector2<T>,
    predicate: Predicate,
) -> Orientation {
    Orientation::from_sign(T::cross_sign(o, a, b, predicate))
}

#[inline]
fn sign_f64(v: f64) -> Ordering {
    v.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

#[inline]
fn robust_coord(p: Vector2<f64>) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

#[inline]
fn orient_value(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>, predicate: Predicate) -> f64 {
    match predicate {
        Predicate::Fast => cross(o, a, b),
        // orient2d(pa, pb, pc) > 0 iff pa, pb, pc are counterclockwise.
        Predicate::Exact => robust::orient2d(robust_coord(o), robust_coord(a), robust_coord(b)),
    }
}

/// Power of two bringing every coordinate of the triple below 2^500, so that
/// differences and their products stay finite.
fn downscale(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let m = [o.x, o.y, a.x, a.y, b.x, b.y]
        .iter()
        .fold(0.0f64, |m, v| m.max(v.abs()));
    // m = 0 gives log2 = -inf, which saturates to i32::MIN
    let k = (m.log2().ceil() as i32).saturating_sub(500).max(0);
    2.0f64.powi(-k)
}

fn cross_sign_f64(
    o: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    predicate: Predicate,
) -> Ordering {
    if predicate == Predicate::Fast {
        let v = cross(o, a, b);
        if v.is_finite() {
            return sign_f64(v);
        }
    }
    // Differences overflow near the ends of the f64 range, as do the error
    // bounds of orient2d, so Exact always runs on the scaled triple (s = 1 for
    // ordinary magnitudes). Power-of-two scaling is exact barring underflow.
    let s = downscale(o, a, b);
    sign_f64(orient_value(o * s, a * s, b * s, predicate))
}

impl HullScalar for f64 {
    #[inline]
    fn is_valid(self) -> bool {
        self.is_finite()
    }
    #[inline]
    fn canonical(self) -> Self {
        self + 0.0
    }
    #[inline]
    fn cmp_coord(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn cross_sign(
        o: Vector2<f64>,
        a: Vector2<f64>,
        b: Vector2<f64>,
        predicate: Predicate,
    ) -> Ordering {
        cross_sign_f64(o, a, b, predicate)
    }
}

impl HullScalar for f32 {
    #[inline]
    fn is_valid(self) -> bool {
        self.is_finite()
    }
    #[inline]
    fn canonical(self) -> Self {
        self + 0.0
    }
    #[inline]
    fn cmp_coord(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
    #[inline]
    fn cross_sign(
        o: Vector2<f32>,
        a: Vector2<f32>,
        b: Vector2<f32>,
        predicate: Predicate,
    ) -> Ordering {
        // f32 -> f64 is lossless, so Exact stays exact after widening.
        let w = |p: Vector2<f32>| Vector2::new(f64::from(p.x), f64::from(p.y));
        cross_sign_f64(w(o), w(a), w(b), predicate)
    }
}

impl HullScalar for i32 {
    #[inline]
    fn is_valid(self) -> bool {
        true
    }
    #[inline]
    fn canonical(self) -> Self {
        self
    }
    #[inline]
    fn cmp_coord(self, other: Self) -> Ordering {
        self.cmp(&other)
    }
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
    #[inline]
    fn cross_sign(
        o: Vector2<i32>,
        a: Vector2<i32>,
        b: Vector2<i32>,
        _predicate: Predicate,
    ) -> Ordering {
        // |differences| < 2^32, |products| < 2^64: no overflow in i128.
        let w = |v: i32| i128::from(v);
        let lhs = (w(a.x) - w(o.x)) * (w(b.y) - w(o.y));
        let rhs = (w(a.y) - w(o.y)) * (w(b.x) - w(o.x));
        lhs.cmp(&rhs)
    }
}
