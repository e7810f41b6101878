//! Movement domain: the player simulation core.
//!
//! Kinematics (acceleration, turn-around, slide-to-stop, jump arcs) and
//! axis-separated collision resolution over the level's static geometry,
//! driven by a per-tick input snapshot.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
pub(crate) mod systems;
#[cfg(test)]
mod tests;

pub use components::{Body, Facing, MotionState, MovementMode, Player, SizeClass};
pub use resources::{InputSnapshot, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, SimSet};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputSnapshot>()
            .add_systems(
                OnEnter(GameState::Run),
                bootstrap::spawn_player.after(crate::level::build_active_level),
            )
            .add_systems(FixedUpdate, systems::sample_input.in_set(SimSet::Input))
            .add_systems(
                FixedUpdate,
                (systems::steer, systems::apply_jump_and_gravity)
                    .chain()
                    .in_set(SimSet::Kinematics),
            )
            .add_systems(FixedUpdate, systems::resolve_collisions.in_set(SimSet::Collision));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::toggle_size_class.run_if(in_state(GameState::Run)));
    }
}
