pub mod config;
pub mod coordinate;
pub mod errors;
pub mod report;
pub mod search;
pub mod traits;
pub use traits::InverseCdf;

pub mod piecewise;
pub mod sampler;
pub mod segment;
