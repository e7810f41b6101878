//! Validation for tuning constants and level definitions.
//!
//! Every check here runs once at startup; a non-empty error list aborts the
//! boot before the simulation loop ever starts.

use super::data::{GeometryDef, LevelDef, TuningDef};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source, self.field, self.message)
    }
}

/// Helper macro for a positivity/consistency check.
macro_rules! check {
    ($errors:expr, $cond:expr, $source:expr, $field:expr, $($msg:tt)*) => {
        if !$cond {
            $errors.push(ValidationError {
                source: $source,
                field: $field,
                message: format!($($msg)*),
            });
        }
    };
}

/// Validate tuning constants. Returns a list of errors, empty if valid.
pub fn validate_tuning(def: &TuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let m = &def.movement;

    check!(errors, m.tick_hz > 0.0, "movement", "tick_hz", "must be positive, got {}", m.tick_hz);
    check!(errors, m.accel > 0.0, "movement", "accel", "must be positive, got {}", m.accel);
    check!(errors, m.decel > 0.0, "movement", "decel", "must be positive, got {}", m.decel);
    check!(errors, m.max_speed > 0.0, "movement", "max_speed", "must be positive, got {}", m.max_speed);
    check!(errors, m.slide_factor >= 0.0, "movement", "slide_factor", "must be non-negative, got {}", m.slide_factor);
    // The slide nudge decays only because a residual at or below slide_factor
    // is smaller than one deceleration step; equal or larger would oscillate.
    check!(
        errors,
        m.slide_factor < m.decel,
        "movement",
        "slide_factor",
        "must be smaller than decel ({} >= {})",
        m.slide_factor,
        m.decel
    );
    check!(errors, m.jump_impulse > 0.0, "movement", "jump_impulse", "must be positive, got {}", m.jump_impulse);
    check!(errors, m.gravity < 0.0, "movement", "gravity", "must be negative (y-up world), got {}", m.gravity);
    check!(errors, m.turn_delay_ticks > 0, "movement", "turn_delay_ticks", "must be at least 1");
    check!(
        errors,
        m.small_hitbox.x > 0.0 && m.small_hitbox.y > 0.0,
        "movement",
        "small_hitbox",
        "dimensions must be positive, got ({}, {})",
        m.small_hitbox.x,
        m.small_hitbox.y
    );
    check!(
        errors,
        m.big_hitbox.x > 0.0 && m.big_hitbox.y > 0.0,
        "movement",
        "big_hitbox",
        "dimensions must be positive, got ({}, {})",
        m.big_hitbox.x,
        m.big_hitbox.y
    );

    let c = &def.camera;
    check!(errors, c.viewport_width > 0.0, "camera", "viewport_width", "must be positive, got {}", c.viewport_width);
    check!(errors, c.viewport_height > 0.0, "camera", "viewport_height", "must be positive, got {}", c.viewport_height);
    check!(
        errors,
        c.follow_threshold > 0.0 && c.follow_threshold < c.viewport_width,
        "camera",
        "follow_threshold",
        "must lie inside the viewport, got {}",
        c.follow_threshold
    );

    let a = &def.animation;
    check!(errors, a.frame_delay_ticks > 0, "animation", "frame_delay_ticks", "must be at least 1");
    check!(errors, a.walk_frames > 0, "animation", "walk_frames", "walk sequence must not be empty");

    let s = &def.audio;
    check!(
        errors,
        (0.0..=1.0).contains(&s.music_volume),
        "audio",
        "music_volume",
        "must be in [0, 1], got {}",
        s.music_volume
    );

    errors
}

/// Validate one level definition against the configured viewport width.
pub fn validate_level(def: &LevelDef, viewport_width: f32) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(errors, !def.id.is_empty(), "level", "id", "must not be empty");
    check!(
        errors,
        def.width >= viewport_width,
        "level",
        "width",
        "{} is narrower than the {} viewport",
        def.width,
        viewport_width
    );
    check!(errors, def.height > 0.0, "level", "height", "must be positive, got {}", def.height);
    check!(
        errors,
        def.spawn_x >= 0.0 && def.spawn_x <= def.width,
        "level",
        "spawn_x",
        "{} lies outside the level",
        def.spawn_x
    );

    match &def.geometry {
        GeometryDef::Flat { surface_y } => {
            check!(
                errors,
                *surface_y >= 0.0 && *surface_y < def.height,
                "level",
                "geometry.surface_y",
                "{} lies outside the level",
                surface_y
            );
        }
        GeometryDef::Rects(solids) => {
            check!(errors, !solids.is_empty(), "level", "geometry", "solid rectangle list is empty");
            for solid in solids {
                check!(
                    errors,
                    solid.w > 0.0 && solid.h > 0.0,
                    "level",
                    "geometry.rects",
                    "degenerate solid at ({}, {})",
                    solid.x,
                    solid.y
                );
            }
        }
        GeometryDef::Tiles { tile_size, rows } => {
            check!(errors, *tile_size > 0.0, "level", "geometry.tile_size", "must be positive, got {}", tile_size);
            check!(errors, !rows.is_empty(), "level", "geometry.rows", "tile grid is empty");
            if let Some(first) = rows.first() {
                check!(
                    errors,
                    rows.iter().all(|r| r.len() == first.len()),
                    "level",
                    "geometry.rows",
                    "rows have inconsistent lengths"
                );
                check!(errors, !first.is_empty(), "level", "geometry.rows", "rows must not be empty strings");
            }
        }
    }

    for coin in &def.coins {
        check!(
            errors,
            coin.w > 0.0 && coin.h > 0.0,
            "level",
            "coins",
            "degenerate coin at ({}, {})",
            coin.x,
            coin.y
        );
    }

    errors
}
