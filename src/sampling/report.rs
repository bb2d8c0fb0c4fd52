//! Defines the [`SamplingReport`] returned by the samplers.

/// Summary of a sampling run.
///
/// - `n_segments`  : number of inverse segments in the table
/// - `n_requested` : number of uniform draws requested
/// - `samples`     : `F⁻¹(u)` for each draw, in draw order
#[derive(Debug, Clone)]
pub struct SamplingReport {
    pub n_segments: usize,
    pub n_requested: usize,
    pub samples: Vec<f64>,
}

impl SamplingReport {
    pub fn new(n_segments: usize, n_requested: usize) -> Self {
        Self {
            n_segments,
            n_requested,
            samples: Vec::with_capacity(n_requested),
        }
    }

    /// Samples rounded to the nearest integer, halves away from zero.
    pub fn rounded(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.round() as i64).collect()
    }
}
