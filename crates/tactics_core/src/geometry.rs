//! Planar geometry helpers
//!
//! Field coordinates are meters with the origin at the center spot.
//! Our goal is always at negative x.

use nalgebra::Vector2;

pub type Vec2 = Vector2<f32>;

pub const PITCH_HALF_LENGTH: f32 = 52.5;
pub const PITCH_HALF_WIDTH: f32 = 34.0;

/// Default per-cycle ball speed decay of the simulation server.
pub const BALL_DECAY: f32 = 0.96;

/// Ball position after `n_step` cycles of free movement.
///
/// Velocity shrinks by `decay` every cycle, so the travelled distance is the
/// geometric series `vel * (1 - decay^n) / (1 - decay)`.
pub fn inertia_n_step_point(pos: Vec2, vel: Vec2, n_step: u32, decay: f32) -> Vec2 {
    if n_step == 0 {
        return pos;
    }

    let steps = i32::try_from(n_step).unwrap_or(i32::MAX);
    let travel = if (1.0 - decay).abs() < f32::EPSILON {
        n_step as f32
    } else {
        (1.0 - decay.powi(steps)) / (1.0 - decay)
    };

    pos + vel * travel
}

/// Clamp a point onto the playing area.
pub fn clamp_to_pitch(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x.clamp(-PITCH_HALF_LENGTH, PITCH_HALF_LENGTH),
        p.y.clamp(-PITCH_HALF_WIDTH, PITCH_HALF_WIDTH),
    )
}
