//! Progress domain: the live, per-life working copy of player progress.

use bevy::prelude::*;

use super::ids::CollectibleId;
use super::lists::CollectedLists;

/// Bankable player stats. Health is deliberately absent; it resets with
/// every life and never round-trips through a save.
#[derive(Debug, Clone, Default)]
pub struct PlayerSnapshot {
    pub level_id: u32,
    pub small_collectibles: i32,
    pub large_collectibles: i32,
    pub keys: i32,
    pub lives: i32,
    pub player_start: Vec3,
    pub camera_start: Vec3,
}

/// Working copy of player progress for the current life: the live
/// snapshot plus the per-level lists of pickups not yet banked. Pending
/// pickups are lost on death before a checkpoint.
#[derive(Resource, Debug, Default)]
pub struct SessionProgress {
    pub snapshot: PlayerSnapshot,
    pub unsaved: CollectedLists,
}

impl SessionProgress {
    /// Zero the counters and anchor the spawn for a brand-new game.
    /// Called exactly once, when level bootstrap decides this is a fresh
    /// start; lives are seeded separately through the saved store.
    pub fn initialize_new_player(&mut self, level_id: u32, spawn: Vec3, camera: Vec3) {
        self.snapshot.level_id = level_id;
        self.snapshot.small_collectibles = 0;
        self.snapshot.large_collectibles = 0;
        self.snapshot.keys = 0;
        self.snapshot.player_start = spawn;
        self.snapshot.camera_start = camera;
    }

    /// Remember a pickup until the next save banks it.
    pub fn record_pickup(&mut self, level_id: u32, id: CollectibleId) {
        self.unsaved.record(level_id, id);
    }

    /// The player will respawn here from now on.
    pub fn update_spawn_location(&mut self, spawn: Vec3) {
        self.snapshot.player_start = spawn;
    }
}
