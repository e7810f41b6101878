//! LevelLibrary resource providing lookup of loaded level definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{GeometryDef, LevelDef};

/// All loaded levels, keyed by id, plus the id the game starts in.
#[derive(Resource, Default)]
pub struct LevelLibrary {
    pub levels: HashMap<String, LevelDef>,
    pub active: String,
}

impl LevelLibrary {
    /// The definition of the level the session runs in.
    pub fn active_def(&self) -> Option<&LevelDef> {
        self.levels.get(&self.active)
    }

    /// Returns a summary of loaded content for logging.
    pub fn summary(&self) -> String {
        format!(
            "LevelLibrary loaded: {} level(s), starting in '{}'",
            self.levels.len(),
            self.active
        )
    }
}

/// Fallback scrolling-background world, used when no levels.ron exists.
pub(crate) fn builtin_overworld() -> LevelDef {
    LevelDef {
        id: "overworld-1".to_string(),
        width: 8000.0,
        height: 600.0,
        spawn_x: 100.0,
        geometry: GeometryDef::Flat { surface_y: 0.0 },
        coins: Vec::new(),
    }
}
