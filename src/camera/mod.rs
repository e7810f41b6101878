//! Camera domain: horizontal follow scrolling.
//!
//! The offset is a pure function of the player's corrected position and
//! forward motion: it pins the player at the follow threshold once reached,
//! never runs backward, and clamps to the level's right edge.

use bevy::prelude::*;

use crate::content::CameraDef;
use crate::core::{GameState, SimSet};
use crate::level::LevelBounds;
use crate::movement::{Body, Player};

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Screen-space x at which scrolling starts.
    pub follow_threshold: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_def(&CameraDef::default())
    }
}

impl CameraTuning {
    pub fn from_def(def: &CameraDef) -> Self {
        Self {
            viewport_width: def.viewport_width,
            viewport_height: def.viewport_height,
            follow_threshold: def.follow_threshold,
        }
    }
}

/// Horizontal scroll offset of the viewport within the level.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct CameraFollow {
    pub offset: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<CameraFollow>()
            .add_systems(OnEnter(GameState::Run), reset_camera)
            .add_systems(FixedUpdate, follow_player.in_set(SimSet::Camera))
            .add_systems(FixedUpdate, sync_camera_transform.in_set(SimSet::Render));
    }
}

fn reset_camera(mut follow: ResMut<CameraFollow>) {
    follow.offset = 0.0;
}

pub(crate) fn follow_player(
    tuning: Res<CameraTuning>,
    bounds: Res<LevelBounds>,
    mut follow: ResMut<CameraFollow>,
    query: Query<&Body, With<Player>>,
) {
    for body in &query {
        follow.offset = follow_offset(
            follow.offset,
            body.position.x,
            body.velocity.x > 0.0,
            &tuning,
            bounds.width,
        );
    }
}

/// The follow rule. While the player is left of the threshold the offset
/// holds; past it, moving forward, the offset tracks the player at exactly
/// forward speed until the level's right edge fills the viewport.
pub(crate) fn follow_offset(
    current: f32,
    player_x: f32,
    moving_forward: bool,
    tuning: &CameraTuning,
    level_width: f32,
) -> f32 {
    let max_offset = (level_width - tuning.viewport_width).max(0.0);
    if !moving_forward {
        return current.clamp(0.0, max_offset);
    }
    (player_x - tuning.follow_threshold)
        .max(current)
        .clamp(0.0, max_offset)
}

/// Position the render camera from the scroll offset. The simulation never
/// reads this transform back.
pub(crate) fn sync_camera_transform(
    tuning: Res<CameraTuning>,
    follow: Res<CameraFollow>,
    mut query: Query<&mut Transform, With<Camera2d>>,
) {
    for mut transform in &mut query {
        transform.translation.x = follow.offset + tuning.viewport_width / 2.0;
        transform.translation.y = tuning.viewport_height / 2.0;
    }
}
