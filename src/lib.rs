pub mod logging;
pub mod sampling;
