//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Loading and validating content; the simulation is not ticking.
    #[default]
    Boot,
    /// The level session: the fixed-tick simulation is live.
    Run,
}
