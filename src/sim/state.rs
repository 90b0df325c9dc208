//! Game state and core simulation types
//!
//! Everything the step function reads or writes is carried here. The engine
//! never mutates a state in place across ticks; [`crate::sim::step`] clones
//! the previous snapshot and returns the next one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::config::GameConfig;
use crate::consts;

use super::orbit;

/// Terminal-state machine for a run
///
/// `Won` and `Lost` are absorbing; only an external reset (a fresh
/// [`GameState`]) returns to `Playing`. Pause is a separate boolean,
/// orthogonal to the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the run has ended, either way
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// The player's satellite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Satellite {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing direction in radians; follows the velocity vector
    pub rotation: f32,
    /// Remaining charge, clamped to [0, max_battery]
    pub battery: f32,
}

/// The central body: gravity source and collision hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub pos: Vec2,
    pub radius: f32,
    pub mass: f32,
}

/// A debris fragment on a prescribed orbit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    /// Tangential velocity, informational only (display); never integrated
    pub vel: Vec2,
    /// Size class, 10-20 pixels
    pub radius: f32,
    /// Mean orbital radius fixed at init
    pub base_radius: f32,
    /// Eccentricity of the prescribed path, fixed at init
    pub eccentricity: f32,
    /// One-way flag; a collected orb is frozen and ignored by collision
    pub collected: bool,
}

/// Transient visual record created when an orb is collected
///
/// Pruned one wall-clock second after creation; consumed only by the
/// rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEffect {
    pub pos: Vec2,
    /// Wall-clock seconds at creation
    pub start_time: f64,
    pub points: u32,
}

/// Visual record of a planet crash, created once on first impact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrashBurst {
    pub pos: Vec2,
    /// Wall-clock seconds at creation
    pub start_time: f64,
}

/// Complete game state (deterministic, serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub satellite: Satellite,
    pub planet: Planet,
    /// Debris orbs, ordered by id
    pub orbs: Vec<Orb>,
    /// Monotonically non-decreasing
    pub score: u32,
    pub status: GameStatus,
    /// Freezes the tick entirely while set; orthogonal to `status`
    pub is_paused: bool,
    /// Live collection effects, pruned by wall-clock age
    pub collection_effects: Vec<CollectionEffect>,
    /// Set at most once, on the first planet collision
    pub crash_burst: Option<CrashBurst>,
    /// Externally toggled deployment target
    pub solar_panels_deployed: bool,
    /// Animated deployment scalar in [deployment_floor, 1.0]
    pub solar_panel_deployment: f32,
    /// Rendering hint only; the core never reads it
    pub show_trajectory: bool,
    /// Sun direction angle, wrapped into [0, 2π)
    pub sun_angle: f32,
    /// Tunables injected at init
    pub config: GameConfig,
}

impl GameState {
    /// Create a fresh game on the reference play field
    pub fn new(config: GameConfig) -> Self {
        Self::with_bounds(config, consts::FIELD_WIDTH, consts::FIELD_HEIGHT)
    }

    /// Create a fresh game sized to the given play field
    ///
    /// The planet sits at field center. The satellite spawns at the vertical
    /// center, horizontally offset by the configured orbital radius, with a
    /// purely tangential velocity at a fraction of circular speed so the
    /// start orbit is a visible ellipse. Debris is seeded at staggered angles on alternating
    /// orbital bands with varied sizes.
    pub fn with_bounds(config: GameConfig, width: f32, height: f32) -> Self {
        let planet = Planet {
            pos: Vec2::new(width / 2.0, height / 2.0),
            radius: config.planet_radius,
            mass: config.planet_mass,
        };

        let orbit_r = config.initial_orbit_radius;
        let circular_speed = (config.gravity_const * planet.mass / orbit_r).sqrt();
        let start_vel = Vec2::new(0.0, circular_speed * config.initial_speed_fraction);
        let satellite = Satellite {
            pos: planet.pos + Vec2::new(orbit_r, 0.0),
            vel: start_vel,
            rotation: start_vel.y.atan2(start_vel.x),
            battery: config.max_battery,
        };

        let mut rng = Pcg32::seed_from_u64(config.debris_seed);
        let count = config.debris_count;
        let mut orbs = Vec::with_capacity(count as usize);
        for i in 0..count {
            let theta = TAU * i as f32 / count.max(1) as f32;
            // Alternate between inner and outer band
            let base_radius = if i % 2 == 0 {
                config.debris_inner_band
            } else {
                config.debris_outer_band
            };
            let radius = rng.random_range(10.0..20.0);
            let (pos, vel) = orbit::prescribe(
                base_radius,
                config.debris_eccentricity,
                theta,
                planet.pos,
                config.debris_sweep_rate,
            );
            orbs.push(Orb {
                id: i,
                pos,
                vel,
                radius,
                base_radius,
                eccentricity: config.debris_eccentricity,
                collected: false,
            });
        }

        let deployment_floor = config.deployment_floor;
        log::info!(
            "Game initialized: {} orbs, field {}x{}",
            orbs.len(),
            width,
            height
        );

        Self {
            satellite,
            planet,
            orbs,
            score: 0,
            status: GameStatus::Playing,
            is_paused: false,
            collection_effects: Vec::new(),
            crash_burst: None,
            solar_panels_deployed: false,
            solar_panel_deployment: deployment_floor,
            show_trajectory: false,
            sun_angle: 0.0,
            config,
        }
    }

    /// Number of orbs still uncollected
    pub fn orbs_remaining(&self) -> usize {
        self.orbs.iter().filter(|o| !o.collected).count()
    }

    // External toggles: flipped between ticks by the input collaborator.

    pub fn toggle_paused(&mut self) {
        self.is_paused = !self.is_paused;
    }

    pub fn set_solar_panels(&mut self, deployed: bool) {
        self.solar_panels_deployed = deployed;
    }

    pub fn toggle_solar_panels(&mut self) {
        self.solar_panels_deployed = !self.solar_panels_deployed;
    }

    pub fn toggle_trajectory(&mut self) {
        self.show_trajectory = !self.show_trajectory;
    }
}
