//! Movement domain: player bootstrap from the active level.

use bevy::prelude::*;

use crate::level::SpawnPoint;
use crate::movement::{Body, MotionState, MovementTuning, Player, SizeClass};
use crate::sprites::SpriteAnimation;

/// Spawn the player at the level's resolved spawn point, feet on the ground.
/// Runs on entering the Run state, after the level session is built.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    spawn: Res<SpawnPoint>,
    existing: Query<Entity, With<Player>>,
) {
    if !existing.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body = Body {
        position: Vec2::new(spawn.x, spawn.feet_y),
        velocity: Vec2::ZERO,
        size: SizeClass::Small,
    };
    let height = body.hitbox(&tuning).y;

    info!("Spawning player at ({}, {})", spawn.x, spawn.feet_y);

    commands.spawn((
        Player,
        body,
        MotionState {
            grounded: true,
            ..default()
        },
        SpriteAnimation::default(),
        Sprite::default(),
        Transform::from_xyz(spawn.x, spawn.feet_y + height / 2.0, 1.0),
    ));
}
