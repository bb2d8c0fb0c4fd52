//! Inverse-transform sampling.
//!
//! Each draw `u` from the RNG is uniform on `[0, 1)` and mapped to
//! `F⁻¹(u)`. The run stops at the first failing draw; no partial report
//! is returned.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::sampling::config::SamplerCfg;
use crate::sampling::errors::SamplingError;
use crate::sampling::piecewise::PiecewiseInverse;
use crate::sampling::report::SamplingReport;
use crate::sampling::traits::InverseCdf;


/// Draws `cfg.n_samples()` samples from `inverse` with a `StdRng`
/// seeded from `cfg.seed()`, or from entropy when unset.
///
/// # Errors
/// - [`SamplingError::InsufficientData`] if samples are requested from an
///   empty inverse.
/// - any error of [`PiecewiseInverse::evaluate`].
pub fn sample(inverse: &PiecewiseInverse, cfg: SamplerCfg) -> Result<SamplingReport, SamplingError> {
    cfg.validate(inverse.n_coordinates())?;

    let mut rng = match cfg.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let mut report = sample_with(inverse, cfg.n_samples(), &mut rng)?;
    report.n_segments = inverse.len();
    Ok(report)
}

/// Draws `n` samples from any [`InverseCdf`] using the injected `rng`.
///
/// `n_segments` of the returned report is left at `0`; [`sample`]
/// fills it for a [`PiecewiseInverse`].
pub fn sample_with<F, R>(inverse: &F, n: usize, rng: &mut R) -> Result<SamplingReport, SamplingError>
where
    F: InverseCdf + ?Sized,
    R: Rng + ?Sized,
{
    let mut report = SamplingReport::new(0, n);

    for i in 0..n {
        let u: f64 = rng.gen();
        let x = inverse.eval(u).inspect_err(|err| {
            log::debug!("draw {i} (u = {u}) failed: {err}");
        })?;
        report.samples.push(x);
    }

    log::debug!("drew {} samples", report.samples.len());
    Ok(report)
}
