//! Trajectory prediction sampling
//!
//! Forward-samples the satellite's coasting path (gravity only, no thrust,
//! no power drain) so the rendering collaborator can draw the predicted
//! orbit when the trajectory hint is on. Uses the same semi-implicit Euler
//! step as the live simulation, so the drawn path matches what an
//! unpowered satellite will actually fly.

use glam::Vec2;

use super::physics::integrate;
use super::state::GameState;

/// Sample `steps` future positions at `dt` intervals from the current state
pub fn predict_trajectory(state: &GameState, steps: usize, dt: f32) -> Vec<Vec2> {
    let mut sat = state.satellite.clone();
    let mut points = Vec::with_capacity(steps);
    for _ in 0..steps {
        sat = integrate(&sat, &state.planet, state.config.gravity_const, dt);
        points.push(sat.pos);
    }
    points
}
