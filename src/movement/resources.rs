//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementDef;
use crate::movement::Facing;

/// Locomotion constants, all per simulation tick. Populated from
/// assets/data/tuning.ron at startup.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub tick_hz: f64,
    pub accel: f32,
    pub decel: f32,
    pub max_speed: f32,
    /// One-time inertia nudge applied when deceleration reaches a stop.
    pub slide_factor: f32,
    pub jump_impulse: f32,
    /// Negative: pulls down in the y-up world.
    pub gravity: f32,
    pub turn_delay_ticks: u32,
    pub small_hitbox: Vec2,
    pub big_hitbox: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_def(&MovementDef::default())
    }
}

impl MovementTuning {
    pub fn from_def(def: &MovementDef) -> Self {
        Self {
            tick_hz: def.tick_hz,
            accel: def.accel,
            decel: def.decel,
            max_speed: def.max_speed,
            slide_factor: def.slide_factor,
            jump_impulse: def.jump_impulse,
            gravity: def.gravity,
            turn_delay_ticks: def.turn_delay_ticks,
            small_hitbox: def.small_hitbox.into(),
            big_hitbox: def.big_hitbox.into(),
        }
    }

    /// Airborne ticks for a full jump from flat ground: the symmetric arc
    /// closes once gravity has eaten the impulse twice over, plus one tick
    /// to sink into the surface and be clamped (edge touch is not contact).
    pub fn jump_arc_ticks(&self) -> u32 {
        (2.0 * self.jump_impulse / -self.gravity).ceil() as u32 + 1
    }
}

/// Per-tick snapshot of logical input intents. Sampled exactly once at the
/// top of each tick; the single source of truth for that tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// Edge: jump went down this tick. Holding the key does not re-fire.
    pub jump_pressed: bool,
    pub mute_held: bool,
    /// Edge: mute went down this tick (toggle, not hold).
    pub mute_pressed: bool,
    pub quit: bool,
}

impl InputSnapshot {
    /// Direction the player is steering toward; right wins a conflict, as in
    /// the keyboard handling.
    pub fn horizontal_intent(&self) -> Option<Facing> {
        if self.right {
            Some(Facing::Right)
        } else if self.left {
            Some(Facing::Left)
        } else {
            None
        }
    }
}
