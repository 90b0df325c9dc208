//! Thrust model
//!
//! Four independent direction flags in satellite-local axes, where forward
//! is (1, 0) and left is (0, -1). The combined local vector is normalized so
//! diagonal input carries no speed advantage, rotated into world space by
//! the satellite's facing, and applied as a velocity impulse.
//!
//! Thrust is gated on energy: with the battery at or below zero, or with the
//! solar panels deployed (the ports are physically blocked), the input has
//! no effect and consumes nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::rotate_vec;

use super::state::Satellite;

/// Thrust flags for a single tick (deterministic input)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrustInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl ThrustInput {
    /// True when any direction is held
    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Combined direction in satellite-local axes, unnormalized
    ///
    /// Opposing flags cancel; the result may be the zero vector even when
    /// flags are held.
    pub fn local_dir(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.forward {
            dir += Vec2::new(1.0, 0.0);
        }
        if self.back {
            dir += Vec2::new(-1.0, 0.0);
        }
        if self.left {
            dir += Vec2::new(0.0, -1.0);
        }
        if self.right {
            dir += Vec2::new(0.0, 1.0);
        }
        dir
    }
}

/// Apply one tick of thrust to the satellite
///
/// Returns the updated satellite and the energy consumed this step; the
/// consumed amount is reported even when it is zero.
pub fn apply_thrust(
    sat: &Satellite,
    input: &ThrustInput,
    panels_deployed: bool,
    config: &GameConfig,
    dt: f32,
) -> (Satellite, f32) {
    if !input.any() || sat.battery <= 0.0 || panels_deployed {
        return (sat.clone(), 0.0);
    }

    let world_dir = rotate_vec(input.local_dir().normalize_or_zero(), sat.rotation);
    let vel = sat.vel + world_dir * config.thrust_power * dt;

    let drain = config.battery_drain_thrust * dt;
    let consumed = drain.min(sat.battery);
    let battery = (sat.battery - drain).max(0.0);

    (
        Satellite {
            vel,
            battery,
            ..sat.clone()
        },
        consumed,
    )
}
