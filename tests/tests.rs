use bouncesim::simulation::boundary::{reflect_walls, Bounds};
use bouncesim::simulation::driver::{DriverMode, VariableRateDriver};
use bouncesim::simulation::states::{Body, GravityBody};

/// Build a body with explicit velocity components, mutating `v` directly
/// the way post-construction code does
pub fn body_at(x: f64, y: f64, vx: f64, vy: f64) -> Body {
    let mut b = Body::new(x, y, 2.0, 0.0, 0.0);
    b.v.x = vx;
    b.v.y = vy;
    b
}

/// Default square canvas for wall tests
pub fn square_bounds(side: f64) -> Bounds {
    Bounds {
        width: side,
        height: side,
    }
}

// ==================================================================================
// Body / GravityBody integration tests
// ==================================================================================

#[test]
fn constructor_decomposes_speed_and_direction() {
    let b = Body::new(0.0, 0.0, 2.0, 100.0, 0.0);
    assert!((b.v.x - 100.0).abs() < 1e-9, "vx should equal speed at direction 0, got {}", b.v.x);
    assert!(b.v.y.abs() < 1e-9, "vy should be 0 at direction 0, got {}", b.v.y);

    let b = Body::new(0.0, 0.0, 2.0, 100.0, std::f64::consts::FRAC_PI_2);
    assert!(b.v.x.abs() < 1e-9, "vx should be ~0 at direction PI/2, got {}", b.v.x);
    assert!((b.v.y - 100.0).abs() < 1e-9, "vy should equal speed at direction PI/2, got {}", b.v.y);
}

#[test]
fn step_moves_by_velocity_times_elapsed() {
    let mut b = body_at(10.0, 20.0, 50.0, -30.0);
    b.step(500.0);

    assert!((b.x.x - 35.0).abs() < 1e-12, "x after 500 ms: {}", b.x.x);
    assert!((b.x.y - 5.0).abs() < 1e-12, "y after 500 ms: {}", b.x.y);

    // Velocity must be untouched by pure integration
    assert_eq!(b.v.x, 50.0);
    assert_eq!(b.v.y, -30.0);
}

#[test]
fn step_zero_elapsed_is_identity() {
    let mut b = body_at(10.0, 20.0, 50.0, -30.0);
    let before = b.clone();
    b.step(0.0);

    assert_eq!(b.x, before.x);
    assert_eq!(b.v, before.v);
}

#[test]
fn gravity_updates_vy_before_position() {
    // v = 100 px/s at direction 0, acc = 60 px/s^2, one 1000 ms step:
    // vy becomes 60 first, so y advances by the *updated* vy
    let mut ball = GravityBody::new(0.0, 0.0, 2.0, 100.0, 0.0, 60.0);
    ball.step(1000.0);

    assert!((ball.body.v.y - 60.0).abs() < 1e-9, "vy: {}", ball.body.v.y);
    assert!((ball.body.x.y - 60.0).abs() < 1e-9, "y displacement must use updated vy, got {}", ball.body.x.y);
    assert!((ball.body.x.x - 100.0).abs() < 1e-9, "x: {}", ball.body.x.x);
    assert!((ball.body.v.x - 100.0).abs() < 1e-9, "vx must be untouched by gravity, got {}", ball.body.v.x);
}

#[test]
fn gravity_accumulates_across_steps() {
    let mut ball = GravityBody::new(0.0, 0.0, 2.0, 0.0, 0.0, 60.0);
    ball.step(500.0);
    ball.step(500.0);

    // vy: 0 -> 30 -> 60; y: 0 + 30*0.5 + 60*0.5 = 45
    assert!((ball.body.v.y - 60.0).abs() < 1e-9, "vy: {}", ball.body.v.y);
    assert!((ball.body.x.y - 45.0).abs() < 1e-9, "y: {}", ball.body.x.y);
}

// ==================================================================================
// Wall reflection tests
// ==================================================================================

#[test]
fn right_wall_mirrors_overshoot() {
    let bounds = square_bounds(400.0);
    let mut b = body_at(410.0, 200.0, 50.0, 0.0);
    reflect_walls(&mut b, &bounds);

    assert!((b.x.x - 390.0).abs() < 1e-12, "x: {}", b.x.x);
    assert_eq!(b.v.x, -50.0);
}

#[test]
fn top_wall_mirrors_overshoot() {
    let bounds = square_bounds(400.0);
    let mut b = body_at(200.0, -5.0, 0.0, -20.0);
    reflect_walls(&mut b, &bounds);

    assert!((b.x.y - 5.0).abs() < 1e-12, "y: {}", b.x.y);
    assert_eq!(b.v.y, 20.0);
}

#[test]
fn left_edge_reflection_points_inward() {
    let bounds = square_bounds(400.0);

    // Exactly on the edge with inward-or-zero overshoot
    let mut b = body_at(0.0, 200.0, -7.0, 0.0);
    reflect_walls(&mut b, &bounds);
    assert!(b.v.x >= 0.0, "vx must point back inside, got {}", b.v.x);
    assert_eq!(b.x.x, 0.0);

    // Past the edge: position mirrors to -x
    let mut b = body_at(-3.0, 200.0, -7.0, 0.0);
    reflect_walls(&mut b, &bounds);
    assert!((b.x.x - 3.0).abs() < 1e-12, "x: {}", b.x.x);
    assert_eq!(b.v.x, 7.0);
}

#[test]
fn corner_overshoot_reflects_both_axes() {
    // The four edge checks are independent, so one call handles a corner
    let bounds = square_bounds(400.0);
    let mut b = body_at(410.0, 405.0, 50.0, 60.0);
    reflect_walls(&mut b, &bounds);

    assert!((b.x.x - 390.0).abs() < 1e-12, "x: {}", b.x.x);
    assert!((b.x.y - 395.0).abs() < 1e-12, "y: {}", b.x.y);
    assert_eq!(b.v.x, -50.0);
    assert_eq!(b.v.y, -60.0);
}

#[test]
fn inside_bounds_is_a_fixed_point() {
    let bounds = square_bounds(400.0);
    let mut b = body_at(123.0, 321.0, 50.0, -60.0);
    let before = b.clone();

    reflect_walls(&mut b, &bounds);
    reflect_walls(&mut b, &bounds);

    assert_eq!(b.x, before.x, "position changed for an in-bounds body");
    assert_eq!(b.v, before.v, "velocity changed for an in-bounds body");
}

#[test]
fn step_then_reflect_bounces_off_floor() {
    // One coarse step carries the ball through the floor; the mirror
    // correction puts it back inside with upward velocity
    let bounds = square_bounds(400.0);
    let mut b = body_at(200.0, 395.0, 0.0, 50.0);

    b.step(500.0); // y = 420, past the floor
    reflect_walls(&mut b, &bounds);

    assert!((b.x.y - 380.0).abs() < 1e-12, "y: {}", b.x.y);
    assert_eq!(b.v.y, -50.0);
}

// ==================================================================================
// Driver tests
// ==================================================================================

#[test]
fn driver_first_tick_establishes_baseline() {
    let mut driver = VariableRateDriver::new();
    assert_eq!(driver.last_timestamp(), None);

    // The first invocation only records the timestamp
    assert_eq!(driver.tick(1234.5), 0.0);
    assert_eq!(driver.last_timestamp(), Some(1234.5));
}

#[test]
fn driver_returns_delta_between_consecutive_ticks() {
    let mut driver = VariableRateDriver::new();
    driver.tick(100.0);

    assert!((driver.tick(116.7) - 16.7).abs() < 1e-12);
    assert!((driver.tick(133.4) - 16.7).abs() < 1e-12);
}

#[test]
fn driver_keeps_timestamp_across_mode_switches() {
    let mut driver = VariableRateDriver::new();
    driver.tick(100.0);

    // Toggling the mode does not touch the driver's bookkeeping, so the
    // first tick after re-enabling covers the whole gap
    let mode = DriverMode::VariableRate.toggled();
    assert_eq!(mode, DriverMode::FixedRate);
    assert_eq!(mode.toggled(), DriverMode::VariableRate);
    assert_eq!(driver.last_timestamp(), Some(100.0));

    assert!((driver.tick(5100.0) - 5000.0).abs() < 1e-12);
}
