//! Sampling error types.
//!
//! ┌ construction : `InvalidSegment`, `NonFiniteCoordinate`, `Parse`, `Io`
//! ├ evaluation   : `InsufficientData`, `OutOfRange`
//! └ internal     : `NotFound` (contiguity invariant broken)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("invalid segment ({x1}, {y1})-({x2}, {y2}): endpoints must satisfy x1 <= x2 and y1 <= y2")]
    InvalidSegment { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("insufficient data: got {got} coordinates, need at least 2")]
    InsufficientData { got: usize },

    #[error("query {got} out of range [{y_min}, {y_max})")]
    OutOfRange { got: f64, y_min: f64, y_max: f64 },

    #[error("no segment contains {target}")]
    NotFound { target: f64 },

    #[error("non-finite coordinate ({x}, {y}) on line {line}")]
    NonFiniteCoordinate { line: usize, x: f64, y: f64 },

    #[error("malformed coordinate on line {line}: {content:?}")]
    Parse { line: usize, content: String },

    #[error("failed to read coordinate source")]
    Io(#[from] std::io::Error),
}
