//! Movement domain: components for the player body and motion state.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use crate::movement::MovementTuning;

#[derive(Component, Debug)]
pub struct Player;

/// The player's physical body.
///
/// `position` is the feet point: the hitbox bottom-center in world units
/// (y-up). Anchoring at the feet means a size-class change resizes the
/// hitbox upward and the body never sinks into or pops off the ground.
#[derive(Component, Debug, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: SizeClass,
}

impl Body {
    /// Hitbox dimensions for the current size class.
    pub fn hitbox(&self, tuning: &MovementTuning) -> Vec2 {
        match self.size {
            SizeClass::Small => tuning.small_hitbox,
            SizeClass::Big => tuning.big_hitbox,
        }
    }

    /// World-space bounding box, feet at `position`.
    pub fn aabb(&self, tuning: &MovementTuning) -> Aabb2d {
        let size = self.hitbox(tuning);
        let min = Vec2::new(self.position.x - size.x / 2.0, self.position.y);
        Aabb2d {
            min,
            max: min + size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeClass {
    #[default]
    Small,
    Big,
}

impl SizeClass {
    pub fn prefix(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Big => "big",
        }
    }
}

/// Locomotion state driving both physics and sprite selection.
#[derive(Component, Debug, Default)]
pub struct MotionState {
    pub facing: Facing,
    pub mode: MovementMode,
    /// Ticks left in the turn-around window; nonzero iff mode is TurningAround.
    pub turn_ticks_left: u32,
    pub grounded: bool,
    pub jumping: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    #[default]
    Idle,
    Walking,
    TurningAround,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Facing::Right => "right",
            Facing::Left => "left",
        }
    }
}
