//! Sprites domain: animation state selection and manifest-backed rendering.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON
//! - Selecting the sprite key for the player's motion state each tick
//! - Handing (texture, transform) to the renderer

mod animation;
mod manifest;

pub use animation::{AnimationTuning, SpriteAnimation, idle_key, sprite_key};
pub use manifest::{SpriteAssetDef, SpriteManifest};

use bevy::prelude::*;

use crate::core::SimSet;
use crate::movement::{Body, MotionState, MovementTuning, Player};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .init_resource::<AnimationTuning>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(FixedUpdate, advance_animation.in_set(SimSet::Animation))
            .add_systems(FixedUpdate, sync_player_sprite.in_set(SimSet::Render));
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(mut manifest: ResMut<SpriteManifest>, asset_server: Res<AssetServer>) {
    manifest.load_from_file("assets/sprites/manifest.json", &asset_server);
}

/// Advance the walk cycle once per tick.
pub(crate) fn advance_animation(
    tuning: Res<AnimationTuning>,
    mut query: Query<(&MotionState, &mut SpriteAnimation), With<Player>>,
) {
    for (motion, mut anim) in &mut query {
        animation::advance(&mut anim, motion.mode, &tuning);
    }
}

/// Resolve this tick's sprite key to a texture and place the sprite at the
/// body's position. A missing key is reported; the idle sprite stands in
/// only when the fallback is configured.
pub(crate) fn sync_player_sprite(
    manifest: Res<SpriteManifest>,
    anim_tuning: Res<AnimationTuning>,
    move_tuning: Res<MovementTuning>,
    mut query: Query<(&Body, &MotionState, &SpriteAnimation, &mut Sprite, &mut Transform), With<Player>>,
) {
    for (body, motion, anim, mut sprite, mut transform) in &mut query {
        let key = sprite_key(motion, body.size, anim);
        match manifest.get_texture(&key) {
            Some(handle) => sprite.image = handle,
            None => {
                error!("Missing sprite key '{}'", key);
                if anim_tuning.missing_sprite_fallback {
                    if let Some(handle) = manifest.get_texture(&idle_key(motion, body.size)) {
                        sprite.image = handle;
                    }
                }
            }
        }

        let height = body.hitbox(&move_tuning).y;
        transform.translation.x = body.position.x;
        transform.translation.y = body.position.y + height / 2.0;
    }
}
