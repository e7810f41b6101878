//! Audio domain: background music and the mute toggle.
//!
//! The simulation's only audio surface: start the looping overworld track
//! and flip its volume on the mute edge. Mixing stays in bevy.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::content::AudioDef;
use crate::core::SimSet;
use crate::movement::InputSnapshot;

#[derive(Resource, Debug, Clone)]
pub struct AudioTuning {
    pub music_volume: f32,
    pub track: String,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self::from_def(&AudioDef::default())
    }
}

impl AudioTuning {
    pub fn from_def(def: &AudioDef) -> Self {
        Self {
            music_volume: def.music_volume,
            track: def.track.clone(),
        }
    }
}

/// Marker for the looping background track.
#[derive(Component)]
struct Music;

/// Whether the mute toggle currently silences the track.
#[derive(Resource, Debug, Default)]
pub struct MusicMuted(pub bool);

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioTuning>()
            .init_resource::<MusicMuted>()
            .add_systems(PostStartup, start_music)
            .add_systems(FixedUpdate, toggle_mute.in_set(SimSet::Triggers));
    }
}

/// Start the overworld track at the configured volume. Runs after content
/// loading so the tuning is final.
fn start_music(mut commands: Commands, asset_server: Res<AssetServer>, tuning: Res<AudioTuning>) {
    commands.spawn((
        Music,
        AudioPlayer::new(asset_server.load(tuning.track.clone())),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(tuning.music_volume)),
    ));
}

/// Flip the track between silent and the configured volume on the mute
/// edge (toggle, not hold).
fn toggle_mute(
    input: Res<InputSnapshot>,
    tuning: Res<AudioTuning>,
    mut muted: ResMut<MusicMuted>,
    mut sinks: Query<&mut AudioSink, With<Music>>,
) {
    if !input.mute_pressed {
        return;
    }
    muted.0 = !muted.0;
    let volume = if muted.0 {
        Volume::Linear(0.0)
    } else {
        Volume::Linear(tuning.music_volume)
    };
    for mut sink in &mut sinks {
        sink.set_volume(volume);
    }
    info!("Music {}", if muted.0 { "muted" } else { "unmuted" });
}
