use std::cmp::Ordering;

use nalgebra::Vector2;

use super::error::HullError;
use super::scalar::{orient, HullScalar, Orientation};
use super::types::{CollinearPolicy, HullCfg, Predicate};

/// Convex hull with the default configuration (collinear edge points dropped,
/// fast predicate).
pub fn compute_hull<T: HullScalar>(
    points: &[Vector2<T>],
) -> Result<Vec<Vector2<T>>, HullError> {
    compute_hull_with(points, HullCfg::default())
}

/// Andrew's monotone chain.
///
/// Pre: coordinates are finite; otherwise `HullError::InvalidCoordinate` names
/// the first offending input index.
/// Post: distinct vertices in counterclockwise order starting at the
/// lexicographically smallest point, without a repeated closing vertex.
/// Fewer than 3 distinct points are returned in lexicographic order.
pub fn compute_hull_with<T: HullScalar>(
    points: &[Vector2<T>],
    cfg: HullCfg,
) -> Result<Vec<Vector2<T>>, HullError> {
    let pts = normalize(points)?;
    Ok(monotone_chain(&pts, cfg))
}

/// Validate, canonicalize, sort lexicographically, dedup.
fn normalize<T: HullScalar>(points: &[Vector2<T>]) -> Result<Vec<Vector2<T>>, HullError> {
    let mut pts = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_valid() && p.y.is_valid()) {
            return Err(HullError::InvalidCoordinate {
                index,
                x: p.x.to_f64(),
                y: p.y.to_f64(),
            });
        }
        pts.push(Vector2::new(p.x.canonical(), p.y.canonical()));
    }
    pts.sort_unstable_by(lex_cmp);
    pts.dedup();
    Ok(pts)
}

#[inline]
fn lex_cmp<T: HullScalar>(a: &Vector2<T>, b: &Vector2<T>) -> Ordering {
    a.x.cmp_coord(b.x).then_with(|| a.y.cmp_coord(b.y))
}

/// Pre: `pts` sorted lexicographically and distinct.
fn monotone_chain<T: HullScalar>(pts: &[Vector2<T>], cfg: HullCfg) -> Vec<Vector2<T>> {
    if pts.len() <= 1 {
        return pts.to_vec();
    }
    // A Keep chain over a single line would walk back over the interior points.
    if cfg.collinear == CollinearPolicy::Keep && all_collinear(pts, cfg.predicate) {
        return pts.to_vec();
    }
    let mut lower = half_chain(pts.iter(), pts.len(), cfg);
    let mut upper = half_chain(pts.iter().rev(), pts.len(), cfg);
    // each chain ends where the other starts
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// One pass of the chain: lower hull for a left-to-right sweep, upper hull for
/// right-to-left.
fn half_chain<'a, T, I>(sweep: I, capacity: usize, cfg: HullCfg) -> Vec<Vector2<T>>
where
    T: HullScalar,
    I: Iterator<Item = &'a Vector2<T>>,
{
    let mut chain: Vec<Vector2<T>> = Vec::with_capacity(capacity);
    for &p in sweep {
        while chain.len() >= 2 {
            let turn = orient(chain[chain.len() - 2], chain[chain.len() - 1], p, cfg.predicate);
            if !cfg.collinear.pops(turn) {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

fn all_collinear<T: HullScalar>(pts: &[Vector2<T>], predicate: Predicate) -> bool {
    let first = pts[0];
    let last = pts[pts.len() - 1];
    pts.iter()
        .all(|&p| orient(first, last, p, predicate) == Orientation::Collinear)
}
