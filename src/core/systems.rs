//! Core domain: boot sequence and frame-control systems.

use bevy::prelude::*;

use crate::core::state::GameState;
use crate::movement::{InputSnapshot, MovementTuning};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Lock the fixed schedule to the configured tick rate. The physics
/// constants are per tick, so the rate is a simulation parameter, not a
/// render detail.
pub(crate) fn configure_tick(tuning: Res<MovementTuning>, mut time: ResMut<Time<Fixed>>) {
    time.set_timestep_hz(tuning.tick_hz);
    info!("Simulation tick rate: {} Hz", tuning.tick_hz);
}

/// Content is loaded and validated; start the level session.
pub(crate) fn enter_run(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::Run);
}

/// The quit intent ends the session cleanly after the current tick's
/// effects have been applied.
pub(crate) fn handle_quit(input: Res<InputSnapshot>, mut exit: MessageWriter<AppExit>) {
    if input.quit {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
