//! Sampling run configuration.
//!
//! [`SamplerCfg`]
//! ├ `n_samples` : number of uniform draws, [`DEFAULT_N_SAMPLES`] by default
//! └ `seed`      : optional RNG seed; `None` seeds from OS entropy

use crate::sampling::errors::SamplingError;

pub const DEFAULT_N_SAMPLES: usize = 0;


#[derive(Debug, Copy, Clone)]
pub struct SamplerCfg {
    n_samples: usize,
    seed: Option<u64>,
}

impl SamplerCfg {
    pub fn new() -> Self {
        Self { n_samples: DEFAULT_N_SAMPLES, seed: None }
    }

    // getters
    pub fn n_samples(&self) -> usize { self.n_samples }
    pub fn seed(&self) -> Option<u64> { self.seed }

    // setters
    pub fn set_n_samples(mut self, v: usize) -> Self {
        self.n_samples = v;
        self
    }

    pub fn set_seed(mut self, v: u64) -> Self {
        self.seed = Some(v);
        self
    }

    /// Rejects a run that would evaluate an empty inverse.
    ///
    /// A zero-sample run is valid regardless of `n_coordinates`.
    pub fn validate(&self, n_coordinates: usize) -> Result<(), SamplingError> {
        if self.n_samples > 0 && n_coordinates < 2 {
            return Err(SamplingError::InsufficientData { got: n_coordinates });
        }
        Ok(())
    }
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self::new()
    }
}
