//! Configuration types for loading demo scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]   – update-path selection and fixed-rate frequency
//! - [`CanvasConfig`]   – canvas dimensions in pixels
//! - [`BallConfig`]     – initial state of the single ball
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   driver: "fixed"        # "fixed" or "variable"
//!   target_fps: 6.0        # fixed-rate render frequency
//!
//! canvas:
//!   width: 400.0
//!   height: 400.0
//!
//! ball:
//!   x: 200.0               # initial position, canvas pixels
//!   y: 200.0
//!   diameter: 2.0          # drawing size only
//!   speed: 100.0           # pixels per second
//!   direction: 1.4960      # radians, ~PI / 2.1 (mostly downward)
//!   acceleration: 60.0     # pixels per second^2, downward
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// Which update path initially drives the ball
/// `driver: "fixed"` or `driver: "variable"`
#[derive(Deserialize, Debug, Clone)]
pub enum DriverConfig {
    #[serde(rename = "fixed")] // update once per rendered frame at target_fps
    Fixed,

    #[serde(rename = "variable")] // update on every animation frame the host delivers
    Variable,
}

/// High-level engine configuration
/// Controls which timing source drives the physics
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub driver: DriverConfig, // initial update path
    pub target_fps: f64, // fixed-rate render frequency in frames per second
}

/// Canvas dimensions in pixels; the ball bounces inside this rectangle
#[derive(Deserialize, Debug, Clone)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
}

/// Initial state of the ball
#[derive(Deserialize, Debug)]
pub struct BallConfig {
    pub x: f64,            // initial x position in canvas pixels
    pub y: f64,            // initial y position in canvas pixels
    pub diameter: f64,     // drawing diameter, not used in physics
    pub speed: f64,        // scalar speed in pixels per second
    pub direction: f64,    // direction angle in radians, +y is down
    pub acceleration: f64, // downward acceleration in pixels per second^2
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (driver, target rate)
    pub canvas: CanvasConfig, // canvas rectangle the ball bounces inside
    pub ball: BallConfig, // initial state of the single ball
}
