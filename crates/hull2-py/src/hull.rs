//! Hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{cfg_from_flags, map_hull_err, points_from_py, points_to_py};
use hull2::{compute_hull_with, Hull};
use pyo3::prelude::*;

/// Convex hull of `points`, counterclockwise from the lexicographically smallest vertex.
/// Raises ValueError on NaN/inf coordinates.
#[pyfunction]
#[pyo3(signature = (points, keep_collinear = false, exact = false))]
pub fn compute_hull(
    points: Vec<(f64, f64)>,
    keep_collinear: bool,
    exact: bool,
) -> PyResult<Vec<(f64, f64)>> {
    let pts = points_from_py(points);
    let cfg = cfg_from_flags(keep_collinear, exact);
    let hull = compute_hull_with(&pts, cfg).map_err(map_hull_err)?;
    Ok(points_to_py(&hull))
}

/// Signed (shoelace) area of the hull of `points`; 0 for degenerate hulls.
#[pyfunction]
#[pyo3(signature = (points, exact = false))]
pub fn hull_area(points: Vec<(f64, f64)>, exact: bool) -> PyResult<f64> {
    let pts = points_from_py(points);
    let hull = Hull::from_points(&pts, cfg_from_flags(false, exact)).map_err(map_hull_err)?;
    Ok(hull.signed_area())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_hull, m)?)?;
    m.add_function(wrap_pyfunction!(hull_area, m)?)?;
    Ok(())
}
