//! PyO3 bindings for `hull2`.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as `(x, y)` tuples; the hull
//!   comes back in the same shape, counterclockwise, first vertex not repeated.
//! - Plotting stays on the Python side (close the ring by appending `hull[0]`).

use pyo3::prelude::*;

mod common;
mod hull;

#[pymodule]
fn hull2_native(_py: Python, m: &PyModule) -> PyResult<()> {
    hull::register(m)?;
    Ok(())
}
