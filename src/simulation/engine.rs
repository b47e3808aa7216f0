//! High-level runtime engine settings
//!
//! Selects the active update path and the fixed-rate render frequency
//! used when building and running a `Scenario`

use crate::simulation::driver::DriverMode;

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: DriverMode, // which update path drives the ball
    pub target_fps: f64, // fixed-rate render frequency (frames per second)
}
