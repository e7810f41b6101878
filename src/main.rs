mod audio;
mod camera;
mod content;
mod core;
mod level;
mod movement;
mod sprites;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Super Mary".to_string(),
                resolution: (1080u32, 600u32).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            level::LevelPlugin,
            movement::MovementPlugin,
            camera::CameraPlugin,
            sprites::SpritesPlugin,
            audio::AudioPlugin,
        ))
        .run();
}
