//! Collision and boundary detection
//!
//! Circle-circle overlap tests for the planet hazard and orb collection,
//! plus the margin-expanded out-of-bounds check. All pure predicates over
//! current positions; nothing here mutates state.

use glam::Vec2;

use super::state::{Orb, Planet};

/// True when the satellite overlaps the planet
pub fn hits_planet(sat_pos: Vec2, sat_half_size: f32, planet: &Planet) -> bool {
    sat_pos.distance(planet.pos) < planet.radius + sat_half_size
}

/// Ids of uncollected orbs the satellite overlaps this tick
///
/// Multiple simultaneous collections are allowed; all overlapping orbs are
/// returned, in orb order.
pub fn newly_collected(sat_pos: Vec2, sat_half_size: f32, orbs: &[Orb]) -> Vec<u32> {
    orbs.iter()
        .filter(|orb| !orb.collected && sat_pos.distance(orb.pos) < orb.radius + sat_half_size)
        .map(|orb| orb.id)
        .collect()
}

/// True when the position lies outside the play field expanded by `margin`
pub fn out_of_bounds(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y < -margin || pos.y > height + margin
}
