//! Gravity and motion integration
//!
//! Inverse-square point gravity from the planet, advanced with a
//! semi-implicit Euler step: velocity is updated from gravity first, then
//! position from the new velocity. That ordering shapes the resulting
//! ellipse for the tuned parameters and must not be swapped.
//!
//! No dt clamping happens here; the driver pre-clamps elapsed time.

use glam::Vec2;

use super::state::{Planet, Satellite};

/// Gravitational acceleration at a position, pointing toward the planet
///
/// Magnitude is `G * mass / d²`. A zero distance (gravity source coincident
/// with the satellite) yields the zero vector rather than a division fault.
#[inline]
pub fn gravity_accel(pos: Vec2, planet: &Planet, gravity_const: f32) -> Vec2 {
    let delta = planet.pos - pos;
    let dist_sq = delta.length_squared();
    if dist_sq == 0.0 {
        return Vec2::ZERO;
    }
    let accel = gravity_const * planet.mass / dist_sq;
    delta.normalize_or_zero() * accel
}

/// Advance the satellite by one semi-implicit Euler step
pub fn integrate(sat: &Satellite, planet: &Planet, gravity_const: f32, dt: f32) -> Satellite {
    let vel = sat.vel + gravity_accel(sat.pos, planet, gravity_const) * dt;
    let pos = sat.pos + vel * dt;
    Satellite {
        pos,
        vel,
        ..sat.clone()
    }
}
