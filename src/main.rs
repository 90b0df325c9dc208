//! Orbit Salvage headless demo
//!
//! Drives the simulation the way the rendering shell would: a fixed-rate
//! loop feeding the step function input flags, a clamped dt, and a clock.
//! Useful for balance tuning and for watching a run in the logs.

use std::path::Path;

use orbit_salvage::sim::{GameState, GameStatus, ThrustInput, step};
use orbit_salvage::{GameConfig, consts};

/// Fixed demo timestep (60 Hz)
const DT: f32 = 1.0 / 60.0;
/// Upstream dt clamp; the integrator relies on the driver enforcing this
const MAX_DT: f32 = 0.1;
/// Give up after this much simulated time
const MAX_SIM_SECONDS: f32 = 300.0;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut state = GameState::new(config);
    log::info!(
        "Demo run: {} orbs, battery {}",
        state.orbs.len(),
        state.satellite.battery
    );

    let dt = DT.min(MAX_DT);
    let mut now = 0.0f64;
    let mut tick_no: u64 = 0;

    while !state.status.is_terminal() && (tick_no as f32) * dt < MAX_SIM_SECONDS {
        // Simple autopilot: a short prograde burn at the start of every
        // five-second window, panels out to recharge for the rest of it.
        let phase = tick_no % 300;
        let burning = phase < 30;
        state.set_solar_panels(!burning);
        let input = ThrustInput {
            forward: burning,
            ..Default::default()
        };

        state = step(
            &state,
            &input,
            dt,
            consts::FIELD_WIDTH,
            consts::FIELD_HEIGHT,
            now,
        );

        if tick_no % 300 == 0 {
            log::debug!(
                "t={:>5.1}s score={:<5} battery={:>5.1} orbs left={}",
                now,
                state.score,
                state.satellite.battery,
                state.orbs_remaining()
            );
        }

        now += dt as f64;
        tick_no += 1;
    }

    match state.status {
        GameStatus::Won => log::info!("Won with score {}", state.score),
        GameStatus::Lost => log::info!("Lost at t={:.1}s, score {}", now, state.score),
        GameStatus::Playing => log::info!("Time limit reached, score {}", state.score),
    }
}
