//! Movement domain: input sampling for the per-tick snapshot.

use bevy::prelude::*;

use crate::movement::InputSnapshot;

/// Translate the keyboard into the tick's logical intents. Runs first in the
/// tick; nothing downstream re-polls the keyboard.
pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputSnapshot>) {
    let jump_was_held = input.jump_held;
    let mute_was_held = input.mute_held;

    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.mute_held = keyboard.pressed(KeyCode::KeyM);
    input.quit = keyboard.pressed(KeyCode::KeyQ);

    // Edges are derived against the previous tick's snapshot rather than the
    // frame event stream: FixedUpdate can run zero or several times per
    // render frame, and `just_pressed` tracks frames, not ticks.
    input.jump_pressed = input.jump_held && !jump_was_held;
    input.mute_pressed = input.mute_held && !mute_was_held;
}
