//! Data-driven game tuning
//!
//! Every tunable the simulation reads lives here, with documented units.
//! The config is injected once at [`crate::GameState::new`] and carried
//! inside the state, so the step function takes no extra parameter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Error loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game tuning parameters
///
/// Defaults reproduce the reference balance in [`crate::consts`]. Unknown
/// fields in a config file are rejected; missing fields fall back to the
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    // === World ===
    /// Satellite visual size in pixels; half of it is the collision radius
    pub satellite_size: f32,
    /// Planet radius in pixels
    pub planet_radius: f32,
    /// Planet mass (abstract units)
    pub planet_mass: f32,
    /// Gravitational constant (pixels³ / (mass·s²))
    pub gravity_const: f32,

    // === Satellite start orbit ===
    /// Spawn distance from the planet center in pixels
    pub initial_orbit_radius: f32,
    /// Fraction of circular speed at spawn, strictly in (0, 1)
    pub initial_speed_fraction: f32,

    // === Thrust ===
    /// Thrust acceleration in pixels/s²
    pub thrust_power: f32,

    // === Battery ===
    /// Battery capacity (abstract charge units)
    pub max_battery: f32,
    /// Charge drawn per second of active thrust
    pub battery_drain_thrust: f32,
    /// Charge drawn per second while panels are deployed but shadowed
    pub battery_drain_systems: f32,
    /// Charge drawn per second while panels are retracted
    pub battery_drain_idle: f32,
    /// Charge gained per second at full deployment in full sun
    pub recharge_rate: f32,

    // === Solar panels ===
    /// Retracted deployment floor (panels never fully stow)
    pub deployment_floor: f32,
    /// Deployment change per second (full traversal in ~1 s)
    pub deployment_rate: f32,
    /// Deployment above which panels count as deployed
    pub deployed_threshold: f32,
    /// Lighting factor above which the satellite counts as sunlit
    pub sunlight_threshold: f32,
    /// Sun angular rate in radians/s
    pub sun_rate: f32,

    // === Debris ===
    /// Number of debris orbs seeded at init
    pub debris_count: u32,
    /// Inner orbital band radius in pixels
    pub debris_inner_band: f32,
    /// Outer orbital band radius in pixels
    pub debris_outer_band: f32,
    /// Fixed eccentricity of the prescribed debris paths
    pub debris_eccentricity: f32,
    /// Angular sweep scale: omega = sweep_rate / radius (rad·px/s)
    pub debris_sweep_rate: f32,
    /// Seed for debris size variation
    pub debris_seed: u64,

    // === Scoring ===
    /// Points awarded per collected orb
    pub points_per_orb: u32,
    /// Win bonus: floor(remaining battery * this)
    pub battery_bonus_multiplier: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            satellite_size: consts::SATELLITE_SIZE,
            planet_radius: consts::PLANET_RADIUS,
            planet_mass: consts::PLANET_MASS,
            gravity_const: consts::GRAVITY_CONST,
            initial_orbit_radius: consts::INITIAL_ORBIT_RADIUS,
            initial_speed_fraction: consts::INITIAL_SPEED_FRACTION,
            thrust_power: consts::THRUST_POWER,
            max_battery: consts::MAX_BATTERY,
            battery_drain_thrust: consts::BATTERY_DRAIN_THRUST,
            battery_drain_systems: consts::BATTERY_DRAIN_SYSTEMS,
            battery_drain_idle: consts::BATTERY_DRAIN_IDLE,
            recharge_rate: consts::RECHARGE_RATE,
            deployment_floor: consts::DEPLOYMENT_FLOOR,
            deployment_rate: consts::DEPLOYMENT_RATE,
            deployed_threshold: consts::DEPLOYED_THRESHOLD,
            sunlight_threshold: consts::SUNLIGHT_THRESHOLD,
            sun_rate: consts::SUN_RATE,
            debris_count: consts::DEBRIS_COUNT,
            debris_inner_band: consts::DEBRIS_INNER_BAND,
            debris_outer_band: consts::DEBRIS_OUTER_BAND,
            debris_eccentricity: consts::DEBRIS_ECCENTRICITY,
            debris_sweep_rate: consts::DEBRIS_SWEEP_RATE,
            debris_seed: consts::DEBRIS_SEED,
            points_per_orb: consts::POINTS_PER_ORB,
            battery_bonus_multiplier: consts::BATTERY_BONUS_MULTIPLIER,
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Half the satellite's visual size; used as its collision radius
    #[inline]
    pub fn satellite_half_size(&self) -> f32 {
        self.satellite_size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed_fraction_is_elliptical() {
        let config = GameConfig::default();
        assert!(config.initial_speed_fraction > 0.0);
        assert!(config.initial_speed_fraction < 1.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = GameConfig::from_json(r#"{"debris_count": 12}"#).unwrap();
        assert_eq!(config.debris_count, 12);
        assert_eq!(config.max_battery, consts::MAX_BATTERY);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(GameConfig::from_json(r#"{"warp_drive": true}"#).is_err());
    }
}
