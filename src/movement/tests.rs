//! Movement domain: tests for kinematics and collision resolution.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use super::systems::collisions::resolve;
use super::systems::kinematics::{integrate_vertical, steer_horizontal};
use super::{Body, Facing, InputSnapshot, MotionState, MovementMode, MovementTuning, SizeClass};
use crate::level::{CollisionSource, LevelBounds};

fn tuning() -> MovementTuning {
    MovementTuning::default()
}

fn grounded_player(x: f32) -> (Body, MotionState) {
    let body = Body {
        position: Vec2::new(x, 0.0),
        velocity: Vec2::ZERO,
        size: SizeClass::Small,
    };
    let motion = MotionState {
        grounded: true,
        ..Default::default()
    };
    (body, motion)
}

fn flat_world() -> (CollisionSource, LevelBounds) {
    (
        CollisionSource::FlatGround { surface_y: 0.0 },
        LevelBounds {
            width: 8000.0,
            height: 600.0,
        },
    )
}

/// One full simulation step: steer, integrate, resolve.
fn step(
    body: &mut Body,
    motion: &mut MotionState,
    intent: Option<Facing>,
    jump: bool,
    source: &CollisionSource,
    bounds: &LevelBounds,
    t: &MovementTuning,
) {
    let mut scratch = Vec::new();
    steer_horizontal(body, motion, intent, t);
    integrate_vertical(body, motion, jump, t);
    resolve(body, motion, source, bounds, t, &mut scratch);
    assert!(
        !(motion.grounded && motion.jumping),
        "grounded and jumping simultaneously"
    );
}

// -----------------------------------------------------------------------------
// Horizontal acceleration
// -----------------------------------------------------------------------------

#[test]
fn test_acceleration_reaches_max_speed_in_twenty_ticks() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);

    let mut expected_x = body.position.x;
    for _ in 0..20 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
        expected_x += body.velocity.x;
        assert_eq!(body.position.x, expected_x);
    }

    // 20 ticks at accel 0.2 saturate at max_speed 4.0 exactly.
    assert_eq!(body.velocity.x, t.max_speed);
    assert_eq!(motion.mode, MovementMode::Walking);
}

#[test]
fn test_speed_never_exceeds_max() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);

    for _ in 0..100 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
        assert!(body.velocity.x.abs() <= t.max_speed);
    }
    for _ in 0..100 {
        step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
        assert!(body.velocity.x.abs() <= t.max_speed);
    }
}

// -----------------------------------------------------------------------------
// Deceleration and slide
// -----------------------------------------------------------------------------

#[test]
fn test_deceleration_reaches_rest_monotonically() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);

    for _ in 0..20 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
    }

    let bound = (t.max_speed / t.decel).ceil() as u32 + 2;
    let mut previous = body.velocity.x.abs();
    let mut rest_tick = None;
    for tick in 0..bound {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        let speed = body.velocity.x.abs();
        assert!(speed <= previous, "speed rose from {} to {}", previous, speed);
        previous = speed;
        if speed == 0.0 {
            rest_tick = Some(tick);
            break;
        }
    }
    assert!(rest_tick.is_some(), "did not reach rest within {} ticks", bound);

    // Rest is stable: no oscillation, no drift.
    let x = body.position.x;
    for _ in 0..10 {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.position.x, x);
    }
}

#[test]
fn test_slide_nudge_fires_once_then_decays() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);
    body.velocity.x = t.decel; // one deceleration step from an exact stop
    motion.facing = Facing::Right;
    motion.mode = MovementMode::Walking;

    step(&mut body, &mut motion, None, false, &source, &bounds, &t);
    assert_eq!(body.velocity.x, t.slide_factor, "stop tick applies the inertia nudge");

    step(&mut body, &mut motion, None, false, &source, &bounds, &t);
    assert_eq!(body.velocity.x, 0.0, "the nudge decays instead of re-firing");

    step(&mut body, &mut motion, None, false, &source, &bounds, &t);
    assert_eq!(body.velocity.x, 0.0);
}

#[test]
fn test_slide_nudge_follows_facing_left() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);
    body.velocity.x = -t.decel;
    motion.facing = Facing::Left;
    motion.mode = MovementMode::Walking;

    step(&mut body, &mut motion, None, false, &source, &bounds, &t);
    assert_eq!(body.velocity.x, -t.slide_factor);
}

// -----------------------------------------------------------------------------
// Turn-around
// -----------------------------------------------------------------------------

#[test]
fn test_turn_not_entered_from_idle() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);
    assert_eq!(motion.facing, Facing::Right);

    step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
    assert_eq!(motion.mode, MovementMode::Walking);
    assert_eq!(motion.facing, Facing::Left);
    assert_eq!(motion.turn_ticks_left, 0);
}

#[test]
fn test_turn_window_lasts_exactly_turn_delay_ticks() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(300.0);

    for _ in 0..20 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
    }
    assert_eq!(body.velocity.x, t.max_speed);

    // Opposite intent while walking: facing flips immediately, mode locks.
    step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
    assert_eq!(motion.mode, MovementMode::TurningAround);
    assert_eq!(motion.facing, Facing::Left);
    assert_eq!(motion.turn_ticks_left, t.turn_delay_ticks);

    // The window ignores input and coasts down; it stays locked for the
    // remaining delay ticks.
    for _ in 1..t.turn_delay_ticks {
        step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
        assert_eq!(motion.mode, MovementMode::TurningAround);
        assert!(body.velocity.x >= 0.0, "turn window never accelerates the new way");
    }

    // The tick the window closes, leftward acceleration resumes.
    let vx_before = body.velocity.x;
    step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
    assert_eq!(motion.mode, MovementMode::Walking);
    assert_eq!(motion.facing, Facing::Left);
    assert_eq!(motion.turn_ticks_left, 0);
    assert!(body.velocity.x < vx_before.max(0.0) + f32::EPSILON);
}

#[test]
fn test_turn_completes_even_if_key_released() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(300.0);

    for _ in 0..10 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
    }
    step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
    assert_eq!(motion.mode, MovementMode::TurningAround);

    // Release everything mid-window: the countdown still runs dry.
    for _ in 1..t.turn_delay_ticks {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        assert_eq!(motion.mode, MovementMode::TurningAround);
    }
    step(&mut body, &mut motion, None, false, &source, &bounds, &t);
    assert_ne!(motion.mode, MovementMode::TurningAround);
    assert_eq!(motion.turn_ticks_left, 0);
}

#[test]
fn test_airborne_flip_does_not_turn_around() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(300.0);

    for _ in 0..5 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
    }
    step(&mut body, &mut motion, Some(Facing::Right), true, &source, &bounds, &t);
    assert!(motion.jumping);
    assert!(!motion.grounded);

    // Reverse in mid-air: facing flips, but the skid is ground-only.
    step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
    assert_eq!(motion.facing, Facing::Left);
    assert_ne!(motion.mode, MovementMode::TurningAround);
    assert_eq!(motion.turn_ticks_left, 0);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_jump_arc_returns_to_ground() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);

    step(&mut body, &mut motion, None, true, &source, &bounds, &t);
    assert!(motion.jumping);
    assert!(!motion.grounded);
    // Launch tick displaces by the full impulse.
    assert_eq!(body.position.y, t.jump_impulse);

    let mut peak = body.position.y;
    let mut landed_after = None;
    for tick in 1..=t.jump_arc_ticks() {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        peak = peak.max(body.position.y);
        if motion.grounded {
            landed_after = Some(tick);
            break;
        }
    }

    let landed_after = landed_after.expect("jump arc never landed");
    assert_eq!(landed_after, t.jump_arc_ticks());
    assert_eq!(body.position.y, 0.0, "feet return to launch height");
    assert_eq!(body.velocity.y, 0.0);
    assert!(!motion.jumping);
    assert!(peak > t.jump_impulse, "arc rises past the first displacement");
}

#[test]
fn test_jump_requires_ground_and_edge() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);

    step(&mut body, &mut motion, None, true, &source, &bounds, &t);
    assert!(motion.jumping);
    let vy_after_launch = body.velocity.y;

    // A held key mid-air must not re-fire the impulse.
    step(&mut body, &mut motion, None, true, &source, &bounds, &t);
    assert!(body.velocity.y < vy_after_launch);
}

#[test]
fn test_grounded_player_stays_put() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(100.0);

    for _ in 0..30 {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        assert!(motion.grounded);
        assert_eq!(body.position.y, 0.0);
    }
}

// -----------------------------------------------------------------------------
// Collision resolution
// -----------------------------------------------------------------------------

fn world_with_wall() -> (CollisionSource, LevelBounds) {
    // Flat ground as a slab, plus a wall at x = 1000.
    let ground = Aabb2d {
        min: Vec2::new(0.0, -100.0),
        max: Vec2::new(8000.0, 0.0),
    };
    let wall = Aabb2d {
        min: Vec2::new(1000.0, 0.0),
        max: Vec2::new(1100.0, 400.0),
    };
    (
        CollisionSource::Rects(vec![ground, wall]),
        LevelBounds {
            width: 8000.0,
            height: 600.0,
        },
    )
}

#[test]
fn test_wall_clamps_and_blocks_repeat_penetration() {
    let t = tuning();
    let (source, bounds) = world_with_wall();
    let (mut body, mut motion) = grounded_player(850.0);
    let half_w = body.hitbox(&t).x / 2.0;

    for _ in 0..100 {
        step(&mut body, &mut motion, Some(Facing::Right), false, &source, &bounds, &t);
        assert!(body.position.x + half_w <= 1000.0);
    }
    assert_eq!(body.position.x, 1000.0 - half_w, "leading edge rests on the wall");
    assert_eq!(body.velocity.x, 0.0, "wall contact kills horizontal momentum");
}

#[test]
fn test_ceiling_bump_zeroes_vertical_velocity() {
    let t = tuning();
    let ground = Aabb2d {
        min: Vec2::new(0.0, -100.0),
        max: Vec2::new(8000.0, 0.0),
    };
    let ceiling = Aabb2d {
        min: Vec2::new(0.0, 150.0),
        max: Vec2::new(8000.0, 200.0),
    };
    let source = CollisionSource::Rects(vec![ground, ceiling]);
    let bounds = LevelBounds {
        width: 8000.0,
        height: 600.0,
    };
    let (mut body, mut motion) = grounded_player(100.0);
    let height = body.hitbox(&t).y;

    step(&mut body, &mut motion, None, true, &source, &bounds, &t);
    assert!(motion.jumping);

    // Rise until the head meets the ceiling underside.
    let mut bumped = false;
    for _ in 0..t.jump_arc_ticks() {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        if body.velocity.y == 0.0 && !motion.grounded {
            bumped = true;
            break;
        }
    }
    assert!(bumped, "never reached the ceiling");
    assert_eq!(body.position.y, 150.0 - height, "head clamps to the ceiling underside");
    assert!(motion.jumping, "a ceiling bump does not end the jump");

    // Gravity brings the body back down to a landing.
    for _ in 0..t.jump_arc_ticks() {
        step(&mut body, &mut motion, None, false, &source, &bounds, &t);
        if motion.grounded {
            break;
        }
    }
    assert!(motion.grounded);
    assert!(!motion.jumping);
}

#[test]
fn test_level_edges_are_walls() {
    let t = tuning();
    let (source, bounds) = flat_world();
    let (mut body, mut motion) = grounded_player(60.0);
    let half_w = body.hitbox(&t).x / 2.0;

    for _ in 0..100 {
        step(&mut body, &mut motion, Some(Facing::Left), false, &source, &bounds, &t);
        assert!(body.position.x >= half_w);
    }
    assert_eq!(body.position.x, half_w);
}

#[test]
fn test_flat_ground_and_rect_slab_agree() {
    let t = tuning();
    let flat = CollisionSource::FlatGround { surface_y: 0.0 };
    let slab = CollisionSource::Rects(vec![Aabb2d {
        min: Vec2::new(-1000.0, -1000.0),
        max: Vec2::new(9000.0, 0.0),
    }]);
    let bounds = LevelBounds {
        width: 8000.0,
        height: 600.0,
    };

    let (mut body_a, mut motion_a) = grounded_player(100.0);
    let (mut body_b, mut motion_b) = grounded_player(100.0);

    // A scripted run: walk, jump mid-stride, reverse, coast out.
    for tick in 0..120 {
        let intent = match tick {
            0..=39 => Some(Facing::Right),
            40..=79 => Some(Facing::Left),
            _ => None,
        };
        let jump = tick == 10 || tick == 60;
        step(&mut body_a, &mut motion_a, intent, jump, &flat, &bounds, &t);
        step(&mut body_b, &mut motion_b, intent, jump, &slab, &bounds, &t);
        assert_eq!(body_a.position, body_b.position, "divergence at tick {}", tick);
        assert_eq!(body_a.velocity, body_b.velocity);
        assert_eq!(motion_a.grounded, motion_b.grounded);
        assert_eq!(motion_a.jumping, motion_b.jumping);
    }
}

// -----------------------------------------------------------------------------
// Input snapshot
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_intent_right_wins_conflict() {
    let snapshot = InputSnapshot {
        left: true,
        right: true,
        ..Default::default()
    };
    assert_eq!(snapshot.horizontal_intent(), Some(Facing::Right));

    let snapshot = InputSnapshot {
        left: true,
        ..Default::default()
    };
    assert_eq!(snapshot.horizontal_intent(), Some(Facing::Left));

    assert_eq!(InputSnapshot::default().horizontal_intent(), None);
}
