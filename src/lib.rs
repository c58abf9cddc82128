//! Prize Wheel - a spin-to-win winner picker for the browser
//!
//! Core modules:
//! - `wheel`: Deterministic spin engine (geometry, animator, roster, session)
//! - `render`: Scene layout and Canvas2D painting

pub mod render;
pub mod wheel;

pub use wheel::{FeedbackSink, SpinTick, WheelSession};

use glam::Vec2;

/// Wheel tuning constants
pub mod consts {
    use std::f32::consts::FRAC_PI_2;

    /// Angular velocity at spin start (radians/tick)
    pub const INITIAL_SPIN_SPEED: f32 = 0.4;
    /// Per-tick multiplicative velocity decay
    pub const SPIN_DECAY: f32 = 0.985;
    /// Velocity at or below this ends the spin (radians/tick)
    pub const SPIN_STOP_THRESHOLD: f32 = 0.005;

    /// Requested rotation draws this many full turns, uniformly
    pub const MIN_FULL_TURNS: f32 = 4.0;
    pub const MAX_FULL_TURNS: f32 = 8.0;

    /// Fixed pointer position the winning segment must cover (top of wheel)
    pub const POINTER_ANGLE: f32 = -FRAC_PI_2;

    /// Hub circle radius (logical px)
    pub const HUB_RADIUS: f32 = 50.0;
    /// Wedges start just outside the hub
    pub const WEDGE_INNER_RADIUS: f32 = 52.0;
    /// Labels sit at this fraction of the outer radius
    pub const LABEL_RADIUS_FRACTION: f32 = 0.7;
    /// Gap between the wheel rim and the canvas edge (logical px)
    pub const WHEEL_MARGIN: f32 = 5.0;
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
