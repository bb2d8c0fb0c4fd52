use crate::sampling::errors::SamplingError;

pub trait InverseCdf {
    /// evaluates the inverse at a single y
    fn eval(&self, y: f64) -> Result<f64, SamplingError>;

    /// evaluates many points, stopping at the first failure
    #[inline]
    fn eval_many(&self, ys: &[f64]) -> Result<Vec<f64>, SamplingError> {
        ys.iter().map(|&yq| self.eval(yq)).collect()
    }
}
