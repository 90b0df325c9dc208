//! Debris orbit prescription
//!
//! Debris does not fall under the integrator. Each fragment follows a
//! closed-form polar path: the angle advances at a rate inversely
//! proportional to the current radius (equal areas in equal time,
//! approximately), and the radius is modulated by `cos 2θ` with an
//! eccentricity fixed at init, tracing a stable closed ellipse. Decoupling
//! this from gravity keeps debris predictable for the player no matter what
//! the satellite does.

use glam::Vec2;

use crate::{cartesian_to_polar, polar_to_cartesian};

use super::state::Orb;

/// Position and display velocity of a prescribed orbit at angle `theta`
///
/// The velocity is tangential and informational only; it is never fed back
/// into the dynamics.
pub fn prescribe(
    base_radius: f32,
    eccentricity: f32,
    theta: f32,
    planet_pos: Vec2,
    sweep_rate: f32,
) -> (Vec2, Vec2) {
    let r = base_radius * (1.0 + eccentricity * (2.0 * theta).cos());
    let pos = planet_pos + polar_to_cartesian(r, theta);

    // omega = sweep_rate / r, so the tangential speed omega * r collapses
    // to the sweep rate itself.
    let tangent = Vec2::new(-theta.sin(), theta.cos());
    let vel = tangent * sweep_rate;

    (pos, vel)
}

/// Advance one orb along its prescribed path
///
/// Collected orbs are frozen and returned unchanged, as is the degenerate
/// case of an orb sitting on the planet center.
pub fn advance_orb(orb: &Orb, planet_pos: Vec2, sweep_rate: f32, dt: f32) -> Orb {
    if orb.collected {
        return orb.clone();
    }

    let (r, theta) = cartesian_to_polar(orb.pos - planet_pos);
    if r <= f32::EPSILON {
        return orb.clone();
    }

    // Closer debris sweeps faster
    let omega = sweep_rate / r;
    let theta = theta + omega * dt;

    let (pos, vel) = prescribe(orb.base_radius, orb.eccentricity, theta, planet_pos, sweep_rate);
    Orb {
        pos,
        vel,
        ..orb.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn orb_at(theta: f32, base_radius: f32) -> Orb {
        let (pos, vel) = prescribe(base_radius, 0.12, theta, Vec2::ZERO, 60.0);
        Orb {
            id: 0,
            pos,
            vel,
            radius: 12.0,
            base_radius,
            eccentricity: 0.12,
            collected: false,
        }
    }

    #[test]
    fn test_prescribed_radius_modulation() {
        // cos(2θ) = 1 at θ=0 (apoapsis of the modulation), -1 at θ=π/2
        let (apo, _) = prescribe(200.0, 0.1, 0.0, Vec2::ZERO, 60.0);
        let (peri, _) = prescribe(200.0, 0.1, std::f32::consts::FRAC_PI_2, Vec2::ZERO, 60.0);
        assert_relative_eq!(apo.length(), 220.0, epsilon = 1e-3);
        assert_relative_eq!(peri.length(), 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_velocity_is_tangential() {
        let (pos, vel) = prescribe(200.0, 0.1, 0.7, Vec2::ZERO, 60.0);
        // Tangent is perpendicular to the radius direction
        assert_relative_eq!(pos.normalize().dot(vel.normalize()), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_advance_sweeps_counterclockwise() {
        let orb = orb_at(0.0, 200.0);
        let next = advance_orb(&orb, Vec2::ZERO, 60.0, 0.1);
        let (_, theta_before) = cartesian_to_polar(orb.pos);
        let (_, theta_after) = cartesian_to_polar(next.pos);
        assert!(theta_after > theta_before);
    }

    #[test]
    fn test_closer_debris_sweeps_faster() {
        let inner = orb_at(0.0, 100.0);
        let outer = orb_at(0.0, 300.0);
        let dt = 0.1;
        let (_, inner_theta) = cartesian_to_polar(advance_orb(&inner, Vec2::ZERO, 60.0, dt).pos);
        let (_, outer_theta) = cartesian_to_polar(advance_orb(&outer, Vec2::ZERO, 60.0, dt).pos);
        assert!(inner_theta > outer_theta);
    }

    #[test]
    fn test_collected_orb_is_frozen() {
        let mut orb = orb_at(0.4, 200.0);
        orb.collected = true;
        let next = advance_orb(&orb, Vec2::ZERO, 60.0, 1.0);
        assert_eq!(next.pos, orb.pos);
        assert_eq!(next.vel, orb.vel);
        assert!(next.collected);
    }

    #[test]
    fn test_orbit_stays_in_radius_band() {
        let mut orb = orb_at(0.0, 200.0);
        for _ in 0..3600 {
            orb = advance_orb(&orb, Vec2::ZERO, 60.0, 1.0 / 60.0);
            let r = orb.pos.length();
            assert!(r >= 200.0 * (1.0 - 0.12) - 1.0);
            assert!(r <= 200.0 * (1.0 + 0.12) + 1.0);
        }
    }

    #[test]
    fn test_degenerate_center_position_is_frozen() {
        let mut orb = orb_at(0.0, 200.0);
        orb.pos = Vec2::ZERO;
        let next = advance_orb(&orb, Vec2::ZERO, 60.0, 1.0);
        assert_eq!(next.pos, Vec2::ZERO);
    }
}
