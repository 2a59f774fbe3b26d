//! Levels domain: components for level furniture and lifecycle.

use bevy::prelude::*;

/// Marker for everything spawned as part of the current level. Torn down
/// wholesale when the level unloads; the saved stores are what persist.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// A checkpoint, ordered by its index within the level.
#[derive(Component, Debug)]
pub struct Checkpoint {
    pub index: usize,
}

/// Inserted once a checkpoint has banked progress this visit, so standing
/// on it does not save every frame.
#[derive(Component, Debug)]
pub struct CheckpointActivated;
