//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Stepping is a total function of (state, input, dt, wall-clock)
//! - State is an immutable snapshot; every tick produces a new one
//! - Seeded RNG only, and only at init
//! - No rendering or platform dependencies
//!
//! The wall-clock is injected as a plain `f64` seconds value so tests can
//! control effect timestamps.

pub mod collision;
pub mod orbit;
pub mod physics;
pub mod power;
pub mod predict;
pub mod state;
pub mod thrust;
pub mod tick;

#[cfg(test)]
mod proptest_sim;

pub use collision::{hits_planet, newly_collected, out_of_bounds};
pub use orbit::{advance_orb, prescribe};
pub use physics::{gravity_accel, integrate};
pub use power::{advance_deployment, lighting_factor, update_battery};
pub use predict::predict_trajectory;
pub use state::{
    CollectionEffect, CrashBurst, GameState, GameStatus, Orb, Planet, Satellite,
};
pub use thrust::{ThrustInput, apply_thrust};
pub use tick::step;
