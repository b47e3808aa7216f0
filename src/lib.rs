pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, GravityBody, NVec2};
pub use simulation::boundary::{reflect_walls, Bounds};
pub use simulation::driver::{DriverMode, VariableRateDriver};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BallConfig, CanvasConfig, DriverConfig, EngineConfig, ScenarioConfig};

pub use visualization::bounce_vis2d::run_2d;

pub use benchmark::benchmark::{bench_bounce_drift, bench_timestep_drift};
