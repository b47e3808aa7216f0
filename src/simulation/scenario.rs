//! Build a fully-initialized runtime scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - the canvas rectangle (`Bounds`)
//! - the ball at its initial state (`GravityBody`)
//! - the variable-rate timing bookkeeping (`VariableRateDriver`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! update and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{DriverConfig, ScenarioConfig};
use crate::simulation::boundary::Bounds;
use crate::simulation::driver::{DriverMode, VariableRateDriver};
use crate::simulation::engine::Engine;
use crate::simulation::states::GravityBody;

/// Bevy resource representing a fully-initialized demo scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, canvas bounds, the single ball, and the
/// variable-rate driver state
///
/// In Bevy terms, this is inserted as a `Resource` and then read by the
/// systems responsible for stepping and drawing the ball
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub bounds: Bounds,
    pub ball: GravityBody,
    pub driver: VariableRateDriver,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Ball: map `BallConfig` -> runtime `GravityBody`; the velocity
        // components are decomposed from speed/direction here, once
        let b_cfg = cfg.ball;
        let ball = GravityBody::new(
            b_cfg.x,
            b_cfg.y,
            b_cfg.diameter,
            b_cfg.speed,
            b_cfg.direction,
            b_cfg.acceleration,
        );

        // Canvas rectangle the ball bounces inside
        let bounds = Bounds {
            width: cfg.canvas.width,
            height: cfg.canvas.height,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            mode: match e_cfg.driver {
                DriverConfig::Fixed => DriverMode::FixedRate,
                DriverConfig::Variable => DriverMode::VariableRate,
            },
            target_fps: e_cfg.target_fps,
        };

        Self {
            engine,
            bounds,
            ball,
            driver: VariableRateDriver::new(),
        }
    }
}
