use std::f64::consts::PI;

use crate::simulation::boundary::{reflect_walls, Bounds};
use crate::simulation::states::GravityBody;

// Launch parameters shared by every bench run, matching the default scenario
const X0: f64 = 200.0;
const Y0: f64 = 200.0;
const SPEED: f64 = 100.0;
const ACC: f64 = 60.0;

fn launch(direction: f64) -> GravityBody {
    GravityBody::new(X0, Y0, 2.0, SPEED, direction, ACC)
}

/// Integrate the same ballistic launch (no walls) at several step rates and
/// compare each final position against the closed-form trajectory
///
/// Semi-implicit Euler carries an O(dt) error term under constant
/// acceleration, so the error shrinks roughly linearly with the step rate —
/// the numeric version of what the viewer shows
pub fn bench_timestep_drift() {
    let rates = [6.0, 12.0, 30.0, 60.0, 240.0, 960.0];
    let t_end_ms = 5000.0;
    let direction = PI / 4.0;

    // Closed-form reference at t_end:
    // x(t) = x0 + vx0 t,  y(t) = y0 + vy0 t + a t^2 / 2
    let t = t_end_ms / 1000.0;
    let vx0 = SPEED * direction.cos();
    let vy0 = SPEED * direction.sin();
    let x_ref = X0 + vx0 * t;
    let y_ref = Y0 + vy0 * t + 0.5 * ACC * t * t;

    println!("free-flight drift over {t:.1} s:");
    for rate in rates {
        let dt_ms = 1000.0 / rate;
        let steps = (t_end_ms / dt_ms).round() as u64;

        let mut ball = launch(direction);
        for _ in 0..steps {
            ball.step(dt_ms);
        }

        let dx = ball.body.x.x - x_ref;
        let dy = ball.body.x.y - y_ref;
        let err = (dx * dx + dy * dy).sqrt();

        println!("rate = {rate:6.1} Hz, dt = {dt_ms:8.3} ms, error = {err:9.4} px");
    }
}

/// Run the bouncing scenario (walls on) at several step rates and compare
/// each final position against a much finer reference run
///
/// Unlike free flight there is no closed form once reflections start, so a
/// 7680 Hz run stands in for the true trajectory. Coarse steps overshoot
/// the walls badly before the mirror correction, which is the demo's point
pub fn bench_bounce_drift() {
    let rates = [6.0, 12.0, 30.0, 60.0, 240.0, 960.0];
    let ref_rate = 7680.0;
    let t_end_ms = 5000.0;
    let direction = PI / 2.1;
    let bounds = Bounds {
        width: 400.0,
        height: 400.0,
    };

    let run = |rate: f64| -> GravityBody {
        let dt_ms = 1000.0 / rate;
        let steps = (t_end_ms / dt_ms).round() as u64;
        let mut ball = launch(direction);
        for _ in 0..steps {
            ball.step(dt_ms);
            reflect_walls(&mut ball.body, &bounds);
        }
        ball
    };

    let reference = run(ref_rate);

    println!("bounce drift over {:.1} s (reference at {ref_rate:.0} Hz):", t_end_ms / 1000.0);
    for rate in rates {
        let ball = run(rate);

        let dx = ball.body.x.x - reference.body.x.x;
        let dy = ball.body.x.y - reference.body.x.y;
        let err = (dx * dx + dy * dy).sqrt();

        println!("rate = {rate:6.1} Hz, error = {err:9.4} px");
    }
}
