//! Piecewise-linear inverse CDF.
//!
//! Each consecutive pair of coordinates `(x[i], y[i])`, `(x[i+1], y[i+1])`
//! yields one [`SegmentInverse`] owning `[y[i], y[i+1])`. Adjacent segments
//! share their boundary, so the segments tile `[y[0], y[n-1])` without gaps.
//! Evaluation locates the owning segment by binary search and delegates to it.

use std::io::BufRead;
use crate::sampling::coordinate::{parse_line, Coordinate};
use crate::sampling::errors::SamplingError;
use crate::sampling::search::{binary_search_by_containment, containment};
use crate::sampling::segment::SegmentInverse;
use crate::sampling::traits::InverseCdf;


#[derive(Debug, Clone)]
pub struct PiecewiseInverse {
    segments: Vec<SegmentInverse>,
    n_coordinates: usize,
}

impl PiecewiseInverse {
    /// Builds the inverse from coordinates sorted ascending by x and y.
    ///
    /// Fewer than two coordinates give an empty function; evaluating it
    /// fails with [`SamplingError::InsufficientData`].
    ///
    /// # Errors
    /// - [`SamplingError::NonFiniteCoordinate`] for `inf`/`nan` entries;
    ///   `line` is the 1-based position in `coords`.
    /// - [`SamplingError::InvalidSegment`] if a consecutive pair decreases
    ///   in x or y.
    pub fn from_coordinates(coords: &[Coordinate]) -> Result<Self, SamplingError> {
        if let Some(idx) = coords.iter().position(|c| !c.x.is_finite() || !c.y.is_finite()) {
            let Coordinate { x, y } = coords[idx];
            return Err(SamplingError::NonFiniteCoordinate { line: idx + 1, x, y });
        }

        let segments = coords
            .windows(2)
            .map(|w| SegmentInverse::from_coordinates(w[0], w[1]))
            .collect::<Result<Vec<_>, _>>()?;

        let inverse = Self { segments, n_coordinates: coords.len() };
        inverse.log_built();
        Ok(inverse)
    }

    /// Builds the inverse from a line source, one `x y` pair per line.
    ///
    /// The source is consumed in a single pass with a window of two
    /// coordinates; whitespace-only lines are skipped.
    ///
    /// # Errors
    /// - [`SamplingError::Io`] if reading fails.
    /// - [`SamplingError::Parse`], [`SamplingError::NonFiniteCoordinate`]
    ///   for malformed lines.
    /// - [`SamplingError::InvalidSegment`] as in [`Self::from_coordinates`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SamplingError> {
        let mut segments = Vec::new();
        let mut n_coordinates = 0;
        let mut prev: Option<Coordinate> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(curr) = parse_line(idx + 1, &line)? else { continue };

            if let Some(prev) = prev {
                segments.push(SegmentInverse::from_coordinates(prev, curr)?);
            }
            prev = Some(curr);
            n_coordinates += 1;
        }

        let inverse = Self { segments, n_coordinates };
        inverse.log_built();
        Ok(inverse)
    }

    fn log_built(&self) {
        match self.domain() {
            Some((y_min, y_max)) => log::debug!(
                "built {} inverse segments over [{y_min}, {y_max})",
                self.segments.len()
            ),
            None => log::debug!(
                "built empty inverse from {} coordinate(s)",
                self.n_coordinates
            ),
        }
    }

    /// Evaluates `x = F⁻¹(y)`.
    ///
    /// # Behavior
    /// - `y` equal to a shared boundary resolves to the later segment.
    /// - The global maximum `y[n-1]` is outside the domain.
    ///
    /// # Errors
    /// - [`SamplingError::InsufficientData`] for an empty function.
    /// - [`SamplingError::OutOfRange`] if `y` is outside `[y[0], y[n-1])`
    ///   or NaN.
    /// - [`SamplingError::NotFound`] if no segment owns an in-range `y`,
    ///   which means the segments are not contiguous.
    pub fn evaluate(&self, y: f64) -> Result<f64, SamplingError> {
        let Some((y_min, y_max)) = self.domain() else {
            return Err(SamplingError::InsufficientData { got: self.n_coordinates });
        };

        if !(y >= y_min && y < y_max) {
            return Err(SamplingError::OutOfRange { got: y, y_min, y_max });
        }

        let idx = binary_search_by_containment(&self.segments, y, |s| containment(s, y))
            .map_err(|err| {
                log::error!("in-range query {y} matched no segment");
                debug_assert!(false, "inverse segments are not contiguous");
                err
            })?;

        Ok(self.segments[idx].evaluate(y))
    }

    /// `[y[0], y[n-1])`, or `None` when there are no segments.
    pub fn domain(&self) -> Option<(f64, f64)> {
        let first = self.segments.first()?;
        let last  = self.segments.last()?;
        Some((first.low(), last.high()))
    }

    // getters
    pub fn segments(&self) -> &[SegmentInverse] { &self.segments }
    pub fn n_coordinates(&self) -> usize { self.n_coordinates }
    pub fn len(&self) -> usize { self.segments.len() }
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }
}

impl InverseCdf for PiecewiseInverse {
    #[inline]
    fn eval(&self, y: f64) -> Result<f64, SamplingError> {
        self.evaluate(y)
    }
}
