//! Animation state selection and walk-cycle playback.
//!
//! Sprite choice is a pure projection of motion state: physics never reads
//! anything back from here. The only animation-owned state is the walk
//! frame counter, advanced once per tick.

use bevy::prelude::*;

use crate::content::AnimationDef;
use crate::movement::{MotionState, MovementMode, SizeClass};

#[derive(Resource, Debug, Clone)]
pub struct AnimationTuning {
    /// Ticks between walk frame advances.
    pub frame_delay_ticks: u32,
    /// Length of the walk cycle.
    pub walk_frames: u32,
    /// Substitute the idle sprite when a key has no manifest entry.
    pub missing_sprite_fallback: bool,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self::from_def(&AnimationDef::default())
    }
}

impl AnimationTuning {
    pub fn from_def(def: &AnimationDef) -> Self {
        Self {
            frame_delay_ticks: def.frame_delay_ticks,
            walk_frames: def.walk_frames,
            missing_sprite_fallback: def.missing_sprite_fallback,
        }
    }
}

/// Walk-cycle playback state for one animated body.
#[derive(Component, Debug, Default)]
pub struct SpriteAnimation {
    /// Current walk frame index (0-based).
    pub frame: u32,
    /// Ticks accumulated toward the next frame advance.
    pub counter: u32,
}

/// Advance the walk cycle by one tick. Any mode other than Walking rewinds
/// the cycle, so a resumed walk restarts at frame 0.
pub(crate) fn advance(anim: &mut SpriteAnimation, mode: MovementMode, tuning: &AnimationTuning) {
    if mode != MovementMode::Walking {
        anim.frame = 0;
        anim.counter = 0;
        return;
    }
    anim.counter += 1;
    if anim.counter >= tuning.frame_delay_ticks {
        anim.counter = 0;
        anim.frame = (anim.frame + 1) % tuning.walk_frames;
    }
}

/// Select the sprite key for this tick. Priority: jumping beats the turn
/// sprite beats the walk cycle beats idle. Keys match the manifest asset
/// basenames (`small_walk2_right`, `big_turn_left_to_right`, ...).
pub fn sprite_key(motion: &MotionState, size: SizeClass, anim: &SpriteAnimation) -> String {
    let size = size.prefix();
    let dir = motion.facing.suffix();
    if motion.jumping {
        return format!("{}_jump_{}", size, dir);
    }
    match motion.mode {
        MovementMode::TurningAround => format!(
            "{}_turn_{}_to_{}",
            size,
            motion.facing.opposite().suffix(),
            dir
        ),
        MovementMode::Walking => format!("{}_walk{}_{}", size, anim.frame + 1, dir),
        MovementMode::Idle => format!("{}_idle_{}", size, dir),
    }
}

/// The idle key for the current facing, used as the configured fallback.
pub fn idle_key(motion: &MotionState, size: SizeClass) -> String {
    format!("{}_idle_{}", size.prefix(), motion.facing.suffix())
}
