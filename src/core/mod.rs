//! Core domain: game states and the fixed-tick frame controller.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

/// The per-tick simulation sequence. Every writer of simulation state lives
/// in exactly one of these sets; the chain is the frame controller: sample
/// input, integrate, resolve, fire triggers, follow, select sprites, hand
/// off to the renderer.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Kinematics,
    Collision,
    Triggers,
    Camera,
    Animation,
    Render,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Input,
                    SimSet::Kinematics,
                    SimSet::Collision,
                    SimSet::Triggers,
                    SimSet::Camera,
                    SimSet::Animation,
                    SimSet::Render,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Startup, systems::setup_camera)
            .add_systems(
                Startup,
                (systems::configure_tick, systems::enter_run)
                    .chain()
                    .after(crate::content::load_content),
            )
            .add_systems(
                FixedUpdate,
                systems::handle_quit
                    .in_set(SimSet::Input)
                    .after(crate::movement::systems::sample_input),
            );
    }
}
