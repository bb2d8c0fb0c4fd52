//! Coordinates of the forward CDF and their text form.
//!
//! One coordinate per line, two whitespace-separated floats `x y`.

use crate::sampling::errors::SamplingError;

/// A point `(x, y)` on the forward piecewise-linear CDF.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Parses one input line into a [`Coordinate`].
///
/// `line` is 1-based and only used for error reporting. Returns `Ok(None)`
/// for a whitespace-only line.
///
/// # Errors
/// - [`SamplingError::Parse`] unless the line holds exactly two floats.
/// - [`SamplingError::NonFiniteCoordinate`] for `inf`/`nan` fields.
pub fn parse_line(line: usize, content: &str) -> Result<Option<Coordinate>, SamplingError> {
    let content = content.trim_end_matches(&['\n', '\r'][..]);
    let mut fields = content.split_whitespace();

    let (x, y) = match (fields.next(), fields.next(), fields.next()) {
        (None, _, _) => return Ok(None),
        (Some(x), Some(y), None) => (x, y),
        _ => return Err(malformed(line, content)),
    };

    let x: f64 = x.parse().map_err(|_| malformed(line, content))?;
    let y: f64 = y.parse().map_err(|_| malformed(line, content))?;

    if !x.is_finite() || !y.is_finite() {
        return Err(SamplingError::NonFiniteCoordinate { line, x, y });
    }
    Ok(Some(Coordinate { x, y }))
}

fn malformed(line: usize, content: &str) -> SamplingError {
    SamplingError::Parse { line, content: content.to_string() }
}
