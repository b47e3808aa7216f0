//! Core state types for the bouncing-ball demo
//!
//! Defines the ball structs:
//! - `Body`        position, velocity, diameter, with timestep integration
//! - `GravityBody` a `Body` plus a constant downward acceleration
//!
//! Positions are canvas pixels with y growing downward, velocities are
//! pixels per second, and elapsed times passed to `step` are milliseconds.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (canvas pixels)
    pub v: NVec2, // velocity (pixels per second)
    pub diameter: f64, // rendering only, not used in physics
}

impl Body {
    /// Build a body from a scalar speed (pixels/s) and direction (radians)
    ///
    /// The velocity components are decomposed here once and never
    /// recomputed from speed/direction again; every later change
    /// (acceleration, wall reflection) mutates `v` directly
    pub fn new(x: f64, y: f64, diameter: f64, speed: f64, direction: f64) -> Self {
        Self {
            x: NVec2::new(x, y),
            v: NVec2::new(speed * direction.cos(), speed * direction.sin()),
            diameter,
        }
    }

    /// Advance the position by one step of `elapsed_ms` milliseconds:
    /// x_n+1 = x_n + v * dt, with dt converted to seconds
    ///
    /// Velocity is left untouched. The caller supplies a non-negative
    /// elapsed time; negative or NaN input is not guarded against
    pub fn step(&mut self, elapsed_ms: f64) {
        self.x += self.v * (elapsed_ms / 1000.0);
    }
}

/// A `Body` under constant gravity
///
/// Composition instead of a class hierarchy: the acceleration only ever
/// touches the vertical velocity component (+y is down on the canvas)
#[derive(Debug, Clone)]
pub struct GravityBody {
    pub body: Body,
    pub acceleration: f64, // pixels per second^2, applied to vy only
}

impl GravityBody {
    pub fn new(x: f64, y: f64, diameter: f64, speed: f64, direction: f64, acceleration: f64) -> Self {
        Self {
            body: Body::new(x, y, diameter, speed, direction),
            acceleration,
        }
    }

    /// Kick then drift: apply gravity to vy first, then integrate the
    /// position with the updated velocity (semi-implicit Euler), so this
    /// step's displacement already feels this step's gravity
    pub fn step(&mut self, elapsed_ms: f64) {
        self.body.v.y += self.acceleration * elapsed_ms / 1000.0;
        self.body.step(elapsed_ms);
    }
}
