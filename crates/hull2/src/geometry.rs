use nalgebra::{Matrix2, Vector2};

/// `det[a b]`: signed area of the parallelogram spanned by `a` and `b`,
/// positive when `b` is counterclockwise of `a`.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    Matrix2::from_columns(&[a, b]).determinant()
}

/// Scalar 2D cross product of `a - o` and `b - o`.
///
/// Positive if `(o, a, b)` turns counterclockwise, negative for clockwise,
/// zero for collinear.
#[inline]
pub fn cross(o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Signed area of a polygon given as an open ring (shoelace formula).
///
/// Pre: vertices in traversal order, first vertex not repeated at the end.
/// Post: positive for counterclockwise rings, 0 for fewer than 3 vertices.
pub fn shoelace_area(ring: &[Vector2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let twice: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(p, q)| parallelogram_area(*p, *q))
        .sum();
    0.5 * twice
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn parallelogram_sign_follows_rotation() {
        let e1 = vector![2.0, 0.0];
        let e2 = vector![0.5, 3.0];
        assert_eq!(parallelogram_area(e1, e2), 6.0);
        assert_eq!(parallelogram_area(e2, e1), -6.0);
        assert_eq!(parallelogram_area(e1, e1 * -4.0), 0.0);
    }

    #[test]
    fn cross_sign_matches_turn_direction() {
        let o = vector![0.0, 0.0];
        let a = vector![1.0, 0.0];
        assert!(cross(o, a, vector![1.0, 1.0]) > 0.0);
        assert!(cross(o, a, vector![1.0, -1.0]) < 0.0);
        assert_eq!(cross(o, a, vector![2.0, 0.0]), 0.0);
        // cross(o, a, b) equals the parallelogram area of (a - o, b - o)
        let o = vector![0.25, -1.0];
        let b = vector![0.3, 0.9];
        assert!((cross(o, a, b) - parallelogram_area(a - o, b - o)).abs() < 1e-12);
    }

    #[test]
    fn shoelace_unit_square_orientation() {
        let ccw = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!((shoelace_area(&ccw) - 1.0).abs() < 1e-12);
        let mut cw = ccw;
        cw.reverse();
        assert!((shoelace_area(&cw) + 1.0).abs() < 1e-12);
        assert_eq!(shoelace_area(&ccw[..2]), 0.0);
    }

    #[test]
    fn shoelace_is_translation_invariant() {
        let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![1.0, 3.0]];
        let shift = vector![-2.5, 7.0];
        let moved: Vec<_> = tri.iter().map(|p| p + shift).collect();
        assert!((shoelace_area(&tri) - 6.0).abs() < 1e-12);
        assert!((shoelace_area(&moved) - 6.0).abs() < 1e-12);
    }
}
