//! The per-frame state transition
//!
//! One discrete step of the whole game: thrust, integration, power, sun
//! advance, debris prescription, collection, effect pruning, and win/loss
//! resolution, in that order. The function is total — every reachable input
//! degrades to clamped, defined behavior rather than an error.
//!
//! Win is checked before loss on purpose: a tick that completes the last
//! collection while overlapping the planet still counts as a win.

use glam::Vec2;

use crate::{consts, wrap_angle_tau};

use super::collision::{hits_planet, newly_collected, out_of_bounds};
use super::orbit::advance_orb;
use super::physics::integrate;
use super::power::{advance_deployment, lighting_factor, update_battery};
use super::state::{CollectionEffect, CrashBurst, GameState, GameStatus};
use super::thrust::{ThrustInput, apply_thrust};

/// Advance the game by one tick
///
/// `dt` is the elapsed simulation time in seconds, pre-clamped by the
/// caller; `bounds_w`/`bounds_h` is the current play-field size (the field
/// is resize-aware); `now` is the injected wall-clock in seconds, used only
/// to timestamp and prune visual effects.
///
/// Paused or terminal states return an identical snapshot: callers may
/// compare fields to detect that nothing happened.
pub fn step(
    state: &GameState,
    input: &ThrustInput,
    dt: f32,
    bounds_w: f32,
    bounds_h: f32,
    now: f64,
) -> GameState {
    if state.is_paused || state.status.is_terminal() {
        return state.clone();
    }

    let mut next = state.clone();
    let config = next.config.clone();
    let sat_half = config.satellite_half_size();

    // Thrust, then gravity: impulses land on the velocity the integrator
    // reads this same tick.
    let (sat, _energy_spent) = apply_thrust(
        &next.satellite,
        input,
        next.solar_panels_deployed,
        &config,
        dt,
    );
    let mut sat = integrate(&sat, &next.planet, config.gravity_const, dt);

    // Power subsystem
    next.solar_panel_deployment = advance_deployment(
        next.solar_panel_deployment,
        next.solar_panels_deployed,
        &config,
        dt,
    );
    let light = lighting_factor(sat.pos, next.planet.pos, next.sun_angle);
    sat.battery = update_battery(sat.battery, next.solar_panel_deployment, light, &config, dt);

    next.sun_angle = wrap_angle_tau(next.sun_angle + config.sun_rate * dt);

    // Debris follows its prescription, never the integrator
    let planet_pos = next.planet.pos;
    for orb in &mut next.orbs {
        *orb = advance_orb(orb, planet_pos, config.debris_sweep_rate, dt);
    }

    // Face the direction of travel; an exactly-zero velocity keeps the
    // previous heading rather than snapping to an undefined one.
    if sat.vel != Vec2::ZERO {
        sat.rotation = sat.vel.y.atan2(sat.vel.x);
    }
    next.satellite = sat;

    // Collection: all overlapping orbs this tick, each worth fixed points
    let collected_ids = newly_collected(next.satellite.pos, sat_half, &next.orbs);
    for id in &collected_ids {
        if let Some(orb) = next.orbs.iter_mut().find(|o| o.id == *id) {
            orb.collected = true;
            let pos = orb.pos;
            next.score += config.points_per_orb;
            next.collection_effects.push(CollectionEffect {
                pos,
                start_time: now,
                points: config.points_per_orb,
            });
        }
    }
    if !collected_ids.is_empty() {
        log::debug!(
            "Collected {} orb(s), {} remaining",
            collected_ids.len(),
            next.orbs_remaining()
        );
    }

    // Effect lifetime is wall-clock, so it does not stretch with game speed
    next.collection_effects
        .retain(|e| now - e.start_time < consts::COLLECTION_EFFECT_LIFETIME);

    // Win before loss. The empty-orb check prevents a vacuous win.
    if !next.orbs.is_empty() && next.orbs.iter().all(|o| o.collected) {
        next.status = GameStatus::Won;
        let bonus = (next.satellite.battery * config.battery_bonus_multiplier).floor() as u32;
        next.score += bonus;
        log::info!("All debris collected: won with score {}", next.score);
    }

    if next.status == GameStatus::Playing {
        if hits_planet(next.satellite.pos, sat_half, &next.planet) {
            next.status = GameStatus::Lost;
            if next.crash_burst.is_none() {
                next.crash_burst = Some(CrashBurst {
                    pos: next.satellite.pos,
                    start_time: now,
                });
            }
            log::info!("Satellite crashed into the planet");
        } else if out_of_bounds(next.satellite.pos, bounds_w, bounds_h, config.satellite_size) {
            next.status = GameStatus::Lost;
            log::info!("Satellite drifted out of bounds");
        }
    }

    next
}
