//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. In-code defaults cover every constant, so a missing
//! tuning file still yields a playable game.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Common wrapper for RON files with schema_version and items.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Serializable Vec2 for data files.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

/// Top-level tuning file. Every simulation constant is supplied here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningDef {
    /// Level id to start in; defaults to the first entry in levels.ron.
    pub start_level: Option<String>,
    pub movement: MovementDef,
    pub camera: CameraDef,
    pub animation: AnimationDef,
    pub audio: AudioDef,
}

/// Locomotion and jump constants, all expressed per simulation tick.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    /// Logical simulation rate in ticks per second.
    pub tick_hz: f64,
    pub accel: f32,
    pub decel: f32,
    pub max_speed: f32,
    pub slide_factor: f32,
    pub jump_impulse: f32,
    /// Per-tick vertical velocity change; negative pulls down (y-up world).
    pub gravity: f32,
    pub turn_delay_ticks: u32,
    pub small_hitbox: Vec2Def,
    pub big_hitbox: Vec2Def,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            tick_hz: 30.0,
            accel: 0.2,
            decel: 0.6,
            max_speed: 4.0,
            slide_factor: 0.3,
            jump_impulse: 15.0,
            gravity: -1.25,
            turn_delay_ticks: 10,
            small_hitbox: Vec2Def { x: 100.0, y: 100.0 },
            big_hitbox: Vec2Def { x: 100.0, y: 200.0 },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraDef {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Screen-space x at which the camera starts scrolling with the player.
    pub follow_threshold: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            viewport_width: 1080.0,
            viewport_height: 600.0,
            follow_threshold: 550.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationDef {
    pub frame_delay_ticks: u32,
    pub walk_frames: u32,
    /// Substitute the idle sprite when a key has no manifest entry.
    pub missing_sprite_fallback: bool,
}

impl Default for AnimationDef {
    fn default() -> Self {
        Self {
            frame_delay_ticks: 5,
            walk_frames: 3,
            missing_sprite_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioDef {
    pub music_volume: f32,
    pub track: String,
}

impl Default for AudioDef {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            track: "sounds/overworld.mp3".to_string(),
        }
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// One level entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub width: f32,
    pub height: f32,
    /// Column the player spawns in; feet land on the first solid below it.
    pub spawn_x: f32,
    pub geometry: GeometryDef,
    #[serde(default)]
    pub coins: Vec<RectDef>,
}

/// Static solid geometry, one of three interchangeable sources.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum GeometryDef {
    /// Scrolling-background world: one unbroken ground surface.
    Flat { surface_y: f32 },
    /// Explicit solid rectangles in world coordinates.
    Rects(Vec<SolidDef>),
    /// Tile grid; rows listed top to bottom, `#` solid, anything else empty.
    Tiles { tile_size: f32, rows: Vec<String> },
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SolidDef {
    pub kind: SolidKind,
    pub x: f32,
    /// Bottom edge (y-up world coordinates).
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Level feature classification. Collectibles are deliberately not a kind
/// here: they go in `LevelDef::coins` and never join the solid set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SolidKind {
    Ground,
    Bricks,
    Pipe,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}
