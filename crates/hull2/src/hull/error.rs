use std::fmt;

/// Errors surfaced by hull construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HullError {
    /// A coordinate is NaN or infinite; `index` is the position in the input.
    InvalidCoordinate { index: usize, x: f64, y: f64 },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InvalidCoordinate { index, x, y } => write!(
                f,
                "invalid coordinate at input index {index}: ({x}, {y}) is not finite"
            ),
        }
    }
}

impl std::error::Error for HullError {}
