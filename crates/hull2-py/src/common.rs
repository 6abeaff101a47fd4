use hull2::{HullCfg, HullError, Vec2};
use hull2::api::{CollinearPolicy, Predicate};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: Vec<(f64, f64)>) -> Vec<Vec2<f64>> {
    points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect()
}

pub fn points_to_py(points: &[Vec2<f64>]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

pub fn cfg_from_flags(keep_collinear: bool, exact: bool) -> HullCfg {
    HullCfg {
        collinear: if keep_collinear {
            CollinearPolicy::Keep
        } else {
            CollinearPolicy::Drop
        },
        predicate: if exact {
            Predicate::Exact
        } else {
            Predicate::Fast
        },
    }
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
