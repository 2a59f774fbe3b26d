//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Normal play inside a level.
    InLevel,
    /// One-frame bounce state used to tear down and rebuild the current
    /// level (death respawn, checkpoint reload, teleporter travel).
    Reloading,
    Won,
    Lost,
}
