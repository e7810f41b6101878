//! Movement domain: debug-only helpers behind the dev-tools feature.

use bevy::prelude::*;

use crate::movement::{Body, Player, SizeClass};

/// Toggle the size class on G. Feet anchoring keeps the body planted while
/// the hitbox grows or shrinks upward.
pub(crate) fn toggle_size_class(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Body, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyG) {
        return;
    }
    for mut body in &mut query {
        body.size = match body.size {
            SizeClass::Small => SizeClass::Big,
            SizeClass::Big => SizeClass::Small,
        };
        debug!("Size class now {:?}", body.size);
    }
}
