//! Movement domain: axis-separated collision resolution.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use crate::level::{CollisionSource, LevelBounds, overlaps};
use crate::movement::{Body, MotionState, MovementTuning, Player};

pub(crate) fn resolve_collisions(
    tuning: Res<MovementTuning>,
    source: Res<CollisionSource>,
    bounds: Res<LevelBounds>,
    mut query: Query<(&mut Body, &mut MotionState), With<Player>>,
) {
    let mut scratch = Vec::new();
    for (mut body, mut motion) in &mut query {
        resolve(&mut body, &mut motion, &source, &bounds, &tuning, &mut scratch);
    }
}

/// Apply the tick's displacement one axis at a time against the level's
/// static solids, clamping on contact.
///
/// Policy: a horizontal clamp zeroes `vx` — the clamp-only alternative
/// re-applies full velocity into the wall every tick and sticks for one
/// tick on release. Vertical contact always zeroes `vy`; downward contact
/// grounds the body and ends any jump.
pub(crate) fn resolve(
    body: &mut Body,
    motion: &mut MotionState,
    source: &CollisionSource,
    bounds: &LevelBounds,
    tuning: &MovementTuning,
    scratch: &mut Vec<Aabb2d>,
) {
    let size = body.hitbox(tuning);
    let half_w = size.x / 2.0;

    // One swept query covers both axis passes.
    let aabb = body.aabb(tuning);
    let region = Aabb2d {
        min: aabb.min + Vec2::new(body.velocity.x.min(0.0), body.velocity.y.min(0.0)),
        max: aabb.max + Vec2::new(body.velocity.x.max(0.0), body.velocity.y.max(0.0)),
    };
    source.candidates(region, scratch);

    // Horizontal pass: leading edge clamps to the obstacle's trailing edge.
    body.position.x += body.velocity.x;
    for rect in scratch.iter() {
        if !overlaps(&body.aabb(tuning), rect) {
            continue;
        }
        if body.velocity.x > 0.0 {
            body.position.x = rect.min.x - half_w;
            body.velocity.x = 0.0;
        } else if body.velocity.x < 0.0 {
            body.position.x = rect.max.x + half_w;
            body.velocity.x = 0.0;
        }
    }

    // The level edges are walls regardless of geometry.
    body.position.x = body
        .position
        .x
        .clamp(half_w, (bounds.width - half_w).max(half_w));

    // Vertical pass. Grounding must be re-proven every tick; gravity
    // guarantees a resting body re-contacts its support each tick.
    body.position.y += body.velocity.y;
    let was_grounded = motion.grounded;
    motion.grounded = false;
    for rect in scratch.iter() {
        if !overlaps(&body.aabb(tuning), rect) {
            continue;
        }
        if body.velocity.y <= 0.0 {
            body.position.y = rect.max.y;
            body.velocity.y = 0.0;
            motion.grounded = true;
            motion.jumping = false;
        } else {
            body.position.y = rect.min.y - size.y;
            body.velocity.y = 0.0;
        }
    }

    if motion.grounded && !was_grounded {
        debug!("Landed at ({}, {})", body.position.x, body.position.y);
    } else if !motion.grounded && was_grounded {
        debug!("Left ground at ({}, {})", body.position.x, body.position.y);
    }

    debug_assert!(
        !(motion.grounded && motion.jumping),
        "grounded and jumping are mutually exclusive"
    );
}
