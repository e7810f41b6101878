//! Content domain: data-driven configuration loaded from RON at startup.
//!
//! Tuning constants and level definitions live in assets/data/*.ron. A
//! missing file falls back to built-in defaults with a warning; a
//! present-but-invalid file aborts the boot before the first tick.

mod data;
mod loader;
mod registry;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    AnimationDef, AudioDef, CameraDef, DataFile, GeometryDef, LevelDef, MovementDef, RectDef,
    SolidDef, SolidKind, TuningDef, Vec2Def,
};
pub use loader::{ContentLoadError, load_levels, load_tuning};
pub use registry::LevelLibrary;
pub use validation::{ValidationError, validate_level, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::audio::AudioTuning;
use crate::camera::CameraTuning;
use crate::movement::MovementTuning;
use crate::sprites::AnimationTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";
const LEVELS_PATH: &str = "assets/data/levels.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLibrary>()
            .add_systems(Startup, load_content);
    }
}

/// Load tuning and levels, validate, and populate the domain resources.
/// Runs before the fixed-tick rate is configured and before any level spawn.
pub(crate) fn load_content(
    mut movement: ResMut<MovementTuning>,
    mut camera: ResMut<CameraTuning>,
    mut animation: ResMut<AnimationTuning>,
    mut audio: ResMut<AudioTuning>,
    mut library: ResMut<LevelLibrary>,
) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(Some(def)) => def,
        Ok(None) => {
            warn!("{} not found, using built-in defaults", TUNING_PATH);
            TuningDef::default()
        }
        Err(e) => {
            error!("{}", e);
            panic!("could not load {}", TUNING_PATH);
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        panic!("{} failed validation with {} error(s)", TUNING_PATH, errors.len());
    }

    *movement = MovementTuning::from_def(&tuning.movement);
    *camera = CameraTuning::from_def(&tuning.camera);
    *animation = AnimationTuning::from_def(&tuning.animation);
    *audio = AudioTuning::from_def(&tuning.audio);

    let levels = match load_levels(Path::new(LEVELS_PATH)) {
        Ok(Some(items)) => items,
        Ok(None) => {
            warn!("{} not found, using the built-in overworld", LEVELS_PATH);
            vec![registry::builtin_overworld()]
        }
        Err(e) => {
            error!("{}", e);
            panic!("could not load {}", LEVELS_PATH);
        }
    };

    let mut level_errors = Vec::new();
    for level in &levels {
        level_errors.extend(validate_level(level, camera.viewport_width));
    }
    if !level_errors.is_empty() {
        for e in &level_errors {
            error!("{}", e);
        }
        panic!("{} failed validation with {} error(s)", LEVELS_PATH, level_errors.len());
    }

    let first_id = levels.first().map(|l| l.id.clone()).unwrap_or_default();
    library.active = tuning.start_level.clone().unwrap_or(first_id);
    for level in levels {
        library.levels.insert(level.id.clone(), level);
    }

    if library.active_def().is_none() {
        error!("start_level '{}' is not defined in {}", library.active, LEVELS_PATH);
        panic!("unknown start level");
    }

    info!("{}", library.summary());
}
