//! Battery and solar panel power subsystem
//!
//! Two binary conditions, deployed-enough and sunlit, select one of three
//! regimes each tick: charging, slow systems drain, or the faster retracted
//! drain. The band edges (deployed threshold, sunlight threshold) come from
//! config; shifting them materially changes game balance.

use glam::Vec2;

use crate::config::GameConfig;

/// Advance the animated deployment scalar toward its target
///
/// Ramps linearly toward 1.0 while deploying, or down to the retracted
/// floor (never fully zero) while stowing, clamped every tick.
pub fn advance_deployment(current: f32, deploying: bool, config: &GameConfig, dt: f32) -> f32 {
    let step = config.deployment_rate * dt;
    if deploying {
        (current + step).min(1.0)
    } else {
        (current - step).max(config.deployment_floor)
    }
}

/// Lighting factor of the satellite relative to the sun
///
/// The sun direction is `(cos sun_angle, sin sun_angle)`; the factor is the
/// negated dot product of the planet-to-satellite direction with it.
/// Positive on the sun-facing side of the planet, negative in shadow. A
/// satellite sitting exactly on the planet center reads as fully shadowed.
pub fn lighting_factor(sat_pos: Vec2, planet_pos: Vec2, sun_angle: f32) -> f32 {
    let sun_dir = Vec2::new(sun_angle.cos(), sun_angle.sin());
    let outward = (sat_pos - planet_pos).normalize_or_zero();
    if outward == Vec2::ZERO {
        return -1.0;
    }
    -outward.dot(sun_dir)
}

/// Evolve the battery for one tick, clamped to [0, max_battery]
///
/// Charging requires panels past the deployed threshold, sunlight, and
/// headroom; the charge rate scales linearly across the threshold-to-1.0
/// deployment band. Otherwise one of the two passive drains applies.
pub fn update_battery(
    battery: f32,
    deployment: f32,
    light: f32,
    config: &GameConfig,
    dt: f32,
) -> f32 {
    let sunlit = light > config.sunlight_threshold;
    let deployed = deployment > config.deployed_threshold;

    let next = if deployed {
        if sunlit {
            if battery < config.max_battery {
                let band = 1.0 - config.deployed_threshold;
                let fraction = (deployment - config.deployed_threshold) / band;
                battery + config.recharge_rate * fraction * dt
            } else {
                battery
            }
        } else {
            battery - config.battery_drain_systems * dt
        }
    } else {
        battery - config.battery_drain_idle * dt
    };

    next.clamp(0.0, config.max_battery)
}
