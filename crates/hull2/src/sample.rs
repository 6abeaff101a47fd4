//! Seeded uniform point clouds (demo inputs, benches, tests).
//!
//! Model
//! - Independent uniform draws in an axis-aligned box; the default box is the
//!   unit square, matching the reference demo (20 points in `[0, 1]²`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the k-th cloud of a run can be regenerated on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box `[min, max)` per coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Default for SampleBox {
    fn default() -> Self {
        Self {
            min: Vector2::new(0.0, 0.0),
            max: Vector2::new(1.0, 1.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points uniformly from `bounds`.
///
/// A box with `min == max` on an axis yields that constant coordinate; the
/// bounds are not reordered, so `min > max` samples from `(max, min]`.
pub fn uniform_points(n: usize, bounds: SampleBox, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let span = bounds.max - bounds.min;
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Vector2::new(bounds.min.x + u * span.x, bounds.min.y + v * span.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic_and_index_sensitive() {
        let tok = ReplayToken { seed: 42, index: 0 };
        let a = uniform_points(20, SampleBox::default(), tok);
        let b = uniform_points(20, SampleBox::default(), tok);
        assert_eq!(a, b);
        let c = uniform_points(20, SampleBox::default(), ReplayToken { index: 1, ..tok });
        assert_ne!(a, c);
    }

    #[test]
    fn points_stay_in_box() {
        let bounds = SampleBox {
            min: Vector2::new(-2.0, 3.0),
            max: Vector2::new(1.0, 3.5),
        };
        let pts = uniform_points(500, bounds, ReplayToken { seed: 7, index: 3 });
        assert_eq!(pts.len(), 500);
        for p in pts {
            assert!((-2.0..1.0).contains(&p.x));
            assert!((3.0..3.5).contains(&p.y));
        }
    }

    #[test]
    fn zero_points() {
        let tok = ReplayToken { seed: 1, index: 1 };
        assert!(uniform_points(0, SampleBox::default(), tok).is_empty());
    }
}
