//! Movement domain: per-tick kinematics for locomotion and jumping.

use bevy::prelude::*;

use crate::movement::{
    Body, Facing, InputSnapshot, MotionState, MovementMode, MovementTuning, Player,
};

pub(crate) fn steer(
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Body, &mut MotionState), With<Player>>,
) {
    for (mut body, mut motion) in &mut query {
        steer_horizontal(&mut body, &mut motion, input.horizontal_intent(), &tuning);
    }
}

pub(crate) fn apply_jump_and_gravity(
    input: Res<InputSnapshot>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Body, &mut MotionState), With<Player>>,
) {
    for (mut body, mut motion) in &mut query {
        integrate_vertical(&mut body, &mut motion, input.jump_pressed, &tuning);
    }
}

/// Horizontal steering for one tick: turn-around entry and countdown,
/// acceleration toward the held direction, or deceleration to rest.
pub(crate) fn steer_horizontal(
    body: &mut Body,
    motion: &mut MotionState,
    intent: Option<Facing>,
    tuning: &MovementTuning,
) {
    if motion.mode == MovementMode::TurningAround {
        // A started turn runs to completion; intents are ignored until it
        // ends, and the body coasts down as if no key were held.
        debug_assert!(motion.turn_ticks_left > 0, "TurningAround requires a live counter");
        motion.turn_ticks_left -= 1;
        if motion.turn_ticks_left > 0 {
            body.velocity.x = decelerate(body.velocity.x, tuning.decel);
            return;
        }
        // Window closed: back to Walking, and normal steering applies to
        // the rest of this tick.
        motion.mode = MovementMode::Walking;
        debug!("Turn complete, walking {:?}", motion.facing);
    }

    match intent {
        Some(dir)
            if dir != motion.facing
                && motion.mode == MovementMode::Walking
                && motion.grounded =>
        {
            // Ground turn-around: facing flips immediately, locomotion locks
            // for the turn window. Airborne flips fall through to plain
            // steering below; the skid is a ground-only effect.
            debug!("Turn-around: {:?} -> {:?}", motion.facing, dir);
            motion.facing = dir;
            motion.mode = MovementMode::TurningAround;
            motion.turn_ticks_left = tuning.turn_delay_ticks;
            body.velocity.x = decelerate(body.velocity.x, tuning.decel);
        }
        Some(dir) => {
            motion.facing = dir;
            motion.mode = MovementMode::Walking;
            body.velocity.x = (body.velocity.x + tuning.accel * dir.sign())
                .clamp(-tuning.max_speed, tuning.max_speed);
        }
        None => {
            motion.mode = MovementMode::Idle;
            body.velocity.x = decelerate_to_rest(body.velocity.x, motion.facing, tuning);
        }
    }
}

/// Vertical integration for one tick: jump launch on the edge, gravity on
/// every other tick. Landing is the resolver's job.
pub(crate) fn integrate_vertical(
    body: &mut Body,
    motion: &mut MotionState,
    jump_pressed: bool,
    tuning: &MovementTuning,
) {
    if jump_pressed && motion.grounded && !motion.jumping {
        motion.jumping = true;
        motion.grounded = false;
        body.velocity.y = tuning.jump_impulse;
        debug!("Jump: impulse {}", tuning.jump_impulse);
        // Gravity starts next tick, so the first displacement is the full
        // impulse.
        return;
    }
    body.velocity.y += tuning.gravity;
}

/// Move `vx` toward zero by one deceleration step, clamped at zero.
fn decelerate(vx: f32, decel: f32) -> f32 {
    if vx > 0.0 {
        (vx - decel).max(0.0)
    } else {
        (vx + decel).min(0.0)
    }
}

/// No-input deceleration with the inertia slide. A residual at or below
/// `slide_factor` decays straight to zero; a stop from above it gets the
/// one-time nudge in the facing direction. The nudge cannot re-trigger:
/// its own magnitude falls in the decay band.
fn decelerate_to_rest(vx: f32, facing: Facing, tuning: &MovementTuning) -> f32 {
    let speed = vx.abs();
    if speed == 0.0 {
        return 0.0;
    }
    if speed <= tuning.slide_factor {
        return 0.0;
    }
    let slowed = decelerate(vx, tuning.decel);
    if slowed != 0.0 {
        return slowed;
    }
    tuning.slide_factor * facing.sign()
}
