//! Inverse of one linear piece of the CDF.
//!
//! A forward segment `(x1, y1)-(x2, y2)` is stored as the affine map
//!
//! ```text
//! x = inv_m * y + inv_c
//! ```
//!
//! owning the half-open y-range `[low, high)` for lookup purposes.

use crate::sampling::coordinate::Coordinate;
use crate::sampling::errors::SamplingError;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentInverse {
    low:   f64,
    high:  f64,
    inv_m: f64,
    inv_c: f64,
}

impl SegmentInverse {
    /// Builds the inverse of the forward segment `(x1, y1)-(x2, y2)`.
    ///
    /// # Behavior
    /// - `y1 == y2` : zero y-extent, `inv_m = inv_c = 0` so every
    ///   evaluation yields `0`. Such a segment owns the empty range `[y1, y1)`.
    /// - `x1 == x2` : vertical forward jump, the inverse is the constant `x1`.
    /// - otherwise  : `m = (y2 - y1) / (x2 - x1)`, `c = y1 - m * x1`,
    ///   `inv_m = 1 / m`, `inv_c = -c * inv_m`.
    ///
    /// # Errors
    /// - [`SamplingError::InvalidSegment`] if `x1 > x2`, `y1 > y2`,
    ///   any endpoint is non-finite, or the inverse overflows.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, SamplingError> {
        let finite = [x1, y1, x2, y2].iter().all(|v| v.is_finite());
        if !finite || !(x1 <= x2 && y1 <= y2) {
            return Err(SamplingError::InvalidSegment { x1, y1, x2, y2 });
        }

        let (inv_m, inv_c) = if y1 == y2 {
            log::warn!("segment ({x1}, {y1})-({x2}, {y2}) has no y-extent; its inverse evaluates to 0");
            (0.0, 0.0)
        } else if x1 == x2 {
            (0.0, x1)
        } else {
            let m = (y2 - y1) / (x2 - x1);
            let c = y1 - m * x1;
            let inv_m = 1.0 / m;
            (inv_m, -c * inv_m)
        };

        if !inv_m.is_finite() || !inv_c.is_finite() {
            return Err(SamplingError::InvalidSegment { x1, y1, x2, y2 });
        }

        Ok(Self { low: y1, high: y2, inv_m, inv_c })
    }

    pub fn from_coordinates(a: Coordinate, b: Coordinate) -> Result<Self, SamplingError> {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// `x = inv_m * y + inv_c`. Does not check that `y` lies in `[low, high)`.
    #[inline]
    pub fn evaluate(&self, y: f64) -> f64 {
        self.inv_m * y + self.inv_c
    }

    // getters
    pub fn low(&self)   -> f64 { self.low }
    pub fn high(&self)  -> f64 { self.high }
    pub fn inv_m(&self) -> f64 { self.inv_m }
    pub fn inv_c(&self) -> f64 { self.inv_c }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        self.low <= y && y < self.high
    }
}
