//! Level domain: active-level session state built from content definitions.

mod geometry;

pub use geometry::{CollisionSource, TileGrid, overlaps};

use bevy::ecs::message::Message;
use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use crate::content::{GeometryDef, LevelDef, LevelLibrary, RectDef};
use crate::core::{GameState, SimSet};
use crate::movement::{Body, MovementTuning, Player};

/// Level dimensions in world units, for camera and world-edge clamping.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LevelBounds {
    pub width: f32,
    pub height: f32,
}

/// Where the player enters the level: spawn column plus the feet height
/// resolved by the downward ground scan.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SpawnPoint {
    pub x: f32,
    pub feet_y: f32,
}

/// Remaining coin trigger zones for the active level. Never part of the
/// solid set.
#[derive(Resource, Debug, Default)]
pub struct CoinTriggers {
    pub zones: Vec<Aabb2d>,
}

/// Coins collected this level session.
#[derive(Resource, Debug, Default)]
pub struct CoinCount(pub u32);

/// Message fired when the player touches a coin trigger.
#[derive(Debug)]
pub struct CoinCollected {
    pub position: Vec2,
}

impl Message for CoinCollected {}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionSource>()
            .init_resource::<LevelBounds>()
            .init_resource::<SpawnPoint>()
            .init_resource::<CoinTriggers>()
            .init_resource::<CoinCount>()
            .add_message::<CoinCollected>()
            .add_systems(OnEnter(GameState::Run), build_active_level)
            .add_systems(FixedUpdate, collect_coins.in_set(SimSet::Triggers));
    }
}

/// Build the collision source, bounds, spawn point, and coin triggers for
/// the library's active level.
pub(crate) fn build_active_level(
    library: Res<LevelLibrary>,
    mut source: ResMut<CollisionSource>,
    mut bounds: ResMut<LevelBounds>,
    mut spawn: ResMut<SpawnPoint>,
    mut triggers: ResMut<CoinTriggers>,
    mut count: ResMut<CoinCount>,
) {
    let Some(def) = library.active_def() else {
        error!("no active level definition; keeping the default flat world");
        return;
    };

    *source = build_source(def);
    if source.is_empty() {
        warn!("level '{}' has no solid geometry; nothing will stop the player", def.id);
    }

    *bounds = LevelBounds {
        width: def.width,
        height: def.height,
    };

    let feet_y = source.ground_below(def.spawn_x, def.height).unwrap_or_else(|| {
        warn!("no ground below spawn column {} in '{}'; spawning at the level floor", def.spawn_x, def.id);
        0.0
    });
    *spawn = SpawnPoint {
        x: def.spawn_x,
        feet_y,
    };

    triggers.zones = def.coins.iter().map(rect_aabb).collect();
    count.0 = 0;

    info!(
        "Built level '{}': {}x{} world, {} coin(s), spawn at ({}, {})",
        def.id,
        def.width,
        def.height,
        triggers.zones.len(),
        spawn.x,
        spawn.feet_y
    );
}

fn build_source(def: &LevelDef) -> CollisionSource {
    match &def.geometry {
        GeometryDef::Flat { surface_y } => CollisionSource::FlatGround {
            surface_y: *surface_y,
        },
        GeometryDef::Rects(solids) => CollisionSource::Rects(
            solids
                .iter()
                .map(|s| Aabb2d {
                    min: Vec2::new(s.x, s.y),
                    max: Vec2::new(s.x + s.w, s.y + s.h),
                })
                .collect(),
        ),
        GeometryDef::Tiles { tile_size, rows } => {
            CollisionSource::Tiles(TileGrid::from_rows(*tile_size, rows, def.height))
        }
    }
}

fn rect_aabb(r: &RectDef) -> Aabb2d {
    Aabb2d {
        min: Vec2::new(r.x, r.y),
        max: Vec2::new(r.x + r.w, r.y + r.h),
    }
}

/// Detect hitbox/coin overlap after collision resolution. A touched zone is
/// consumed, tallied, and announced to interested collaborators.
pub(crate) fn collect_coins(
    tuning: Res<MovementTuning>,
    mut triggers: ResMut<CoinTriggers>,
    mut count: ResMut<CoinCount>,
    mut collected: MessageWriter<CoinCollected>,
    query: Query<&Body, With<Player>>,
) {
    for body in &query {
        let aabb = body.aabb(&tuning);
        triggers.zones.retain(|zone| {
            if overlaps(zone, &aabb) {
                count.0 += 1;
                collected.write(CoinCollected {
                    position: (zone.min + zone.max) / 2.0,
                });
                info!("Coin collected ({} total)", count.0);
                false
            } else {
                true
            }
        });
    }
}
