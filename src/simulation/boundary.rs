//! Wall reflection against the rectangular canvas
//!
//! Mirrors an out-of-bounds coordinate back across the offending edge and
//! forces the matching velocity component to point back inside. Mirroring
//! keeps the overshoot distance from a large timestep instead of clamping
//! it away, which reduces the position error of a coarse step.

use crate::simulation::states::Body;

/// The canvas rectangle. Left and top edges sit at x = 0 and y = 0,
/// right and bottom at `width` and `height`. Dimensions are assumed
/// valid positive numbers
#[derive(Debug, Clone)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Reflect `body` off every canvas edge it has reached or crossed
///
/// The four checks are independent and all run on every call, so a corner
/// overshoot reflects in both axes at once. A body strictly inside the
/// bounds is left untouched, making the call a fixed point
pub fn reflect_walls(body: &mut Body, bounds: &Bounds) {
    // left wall (x = 0)
    if body.x.x <= 0.0 {
        body.v.x = body.v.x.abs(); // always moving right afterwards
        body.x.x = -body.x.x; // mirror: 2*0 - x
    }
    // right wall (x = width)
    if body.x.x >= bounds.width {
        body.v.x = -body.v.x.abs(); // always moving left afterwards
        body.x.x = 2.0 * bounds.width - body.x.x;
    }
    // top wall (y = 0)
    if body.x.y <= 0.0 {
        body.v.y = body.v.y.abs(); // always moving down afterwards
        body.x.y = -body.x.y;
    }
    // bottom wall (y = height)
    if body.x.y >= bounds.height {
        body.v.y = -body.v.y.abs(); // always moving up afterwards
        body.x.y = 2.0 * bounds.height - body.x.y;
    }
}
