//! Orbit Salvage - a 2D orbital-mechanics arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, power, debris orbits, game state)
//! - `config`: Data-driven game tuning
//!
//! Rendering and input capture live outside this crate; they consume the
//! `GameState` snapshot produced each tick and feed back thrust flags,
//! toggles and elapsed time.

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{GameState, GameStatus, ThrustInput, step};

use glam::Vec2;

/// Game configuration constants (reference defaults; runtime values live in
/// [`GameConfig`])
pub mod consts {
    /// Reference play-field size (the canvas the game was tuned against)
    pub const FIELD_WIDTH: f32 = 1200.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Satellite visual size; half of this is the collision radius
    pub const SATELLITE_SIZE: f32 = 24.0;

    /// Planet defaults
    pub const PLANET_RADIUS: f32 = 60.0;
    pub const PLANET_MASS: f32 = 50_000.0;

    /// Gravitational constant (pixels³ / (mass·s²), tuned for feel)
    pub const GRAVITY_CONST: f32 = 100.0;

    /// Satellite starting orbit
    pub const INITIAL_ORBIT_RADIUS: f32 = 250.0;
    /// Fraction of circular speed at spawn; below 1.0 gives a visible ellipse
    pub const INITIAL_SPEED_FRACTION: f32 = 0.85;

    /// Thrust acceleration (pixels/s²)
    pub const THRUST_POWER: f32 = 80.0;

    /// Battery
    pub const MAX_BATTERY: f32 = 100.0;
    /// Battery drawn per second of active thrust
    pub const BATTERY_DRAIN_THRUST: f32 = 8.0;
    /// Battery drawn per second while panels are deployed but shadowed
    pub const BATTERY_DRAIN_SYSTEMS: f32 = 0.5;
    /// Battery drawn per second while panels are retracted
    pub const BATTERY_DRAIN_IDLE: f32 = 1.5;
    /// Charge per second at full deployment in full sun
    pub const RECHARGE_RATE: f32 = 12.0;

    /// Solar panels
    pub const DEPLOYMENT_FLOOR: f32 = 0.1;
    /// Deployment traversal per second (full extend/retract in ~1 s)
    pub const DEPLOYMENT_RATE: f32 = 0.9;
    /// Deployment above which panels count as deployed
    pub const DEPLOYED_THRESHOLD: f32 = 0.8;
    /// Lighting factor above which the satellite counts as sunlit
    pub const SUNLIGHT_THRESHOLD: f32 = -0.3;

    /// Sun angular rate (radians/s)
    pub const SUN_RATE: f32 = 0.02;

    /// Debris
    pub const DEBRIS_COUNT: u32 = 8;
    pub const DEBRIS_INNER_BAND: f32 = 160.0;
    pub const DEBRIS_OUTER_BAND: f32 = 330.0;
    pub const DEBRIS_ECCENTRICITY: f32 = 0.12;
    /// Angular sweep scale: omega = DEBRIS_SWEEP_RATE / radius (rad·px/s)
    pub const DEBRIS_SWEEP_RATE: f32 = 60.0;
    pub const DEBRIS_SEED: u64 = 0x5a17_a6e;

    /// Scoring
    pub const POINTS_PER_ORB: u32 = 100;
    /// Win bonus: floor(remaining battery * this)
    pub const BATTERY_BONUS_MULTIPLIER: f32 = 10.0;

    /// Collection effects live this long (wall-clock seconds)
    pub const COLLECTION_EFFECT_LIFETIME: f64 = 1.0;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Wrap angle into [0, 2π)
#[inline]
pub fn wrap_angle_tau(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// Rotate a vector by an angle (standard 2D rotation matrix)
#[inline]
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
