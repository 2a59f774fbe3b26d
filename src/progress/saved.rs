//! Progress domain: the cross-level saved game state.

use bevy::prelude::*;

use super::ids::CollectibleId;
use super::lists::{CollectedList, CollectedLists};
use super::session::{PlayerSnapshot, SessionProgress};

/// The last-saved game state. Constructed once at startup and kept for
/// the whole process; levels reload around it. All mutation funnels
/// through `ResMut` access, so there is exactly one writer at a time.
#[derive(Resource, Debug)]
pub struct SavedProgress {
    pub snapshot: PlayerSnapshot,
    pub saved: CollectedLists,
    /// Cursor into the current level's checkpoint list; None until the
    /// first checkpoint is activated.
    pub checkpoint_index: Option<usize>,
    pub is_new_game: bool,
}

impl Default for SavedProgress {
    fn default() -> Self {
        Self {
            snapshot: default(),
            saved: default(),
            checkpoint_index: None,
            is_new_game: true,
        }
    }
}

impl SavedProgress {
    /// Bank the session: copy the live snapshot, then move every pending
    /// pickup for the level into the saved list. Calling with nothing
    /// pending is a no-op on the lists.
    ///
    /// Lives are copied like the rest of the snapshot; `add_lives` and
    /// `lose_lives` keep both stores current between saves so a death
    /// right before a checkpoint is never un-died by the copy.
    pub fn save(&mut self, session: &mut SessionProgress, level_id: u32) {
        self.snapshot = session.snapshot.clone();

        let pending = session.unsaved.take_items(level_id);
        if !pending.is_empty() {
            debug!("Banking {} pickups for level {}", pending.len(), level_id);
        }
        self.saved.get_or_create(level_id).items.extend(pending);
    }

    /// Copy the saved snapshot back into the live session.
    pub fn load(&self, session: &mut SessionProgress) {
        session.snapshot = self.snapshot.clone();
    }

    /// The saved list for a level, or None if it was never initialized.
    /// Callers treat None as "nothing collected".
    pub fn saved_list(&self, level_id: u32) -> Option<&CollectedList> {
        self.saved.get(level_id)
    }

    /// Make sure a saved list exists for the level. Idempotent; run once
    /// per level visit before reconciliation.
    pub fn ensure_level_list(&mut self, level_id: u32) {
        self.saved.get_or_create(level_id);
    }

    pub fn is_collected(&self, level_id: u32, id: CollectibleId) -> bool {
        self.saved.contains(level_id, id)
    }

    /// Flag a fresh game and forget what was collected in this level.
    /// The next level bootstrap re-initializes the player.
    pub fn new_game(&mut self, level_id: u32) {
        self.is_new_game = true;
        self.saved.clear_level(level_id);
        self.checkpoint_index = None;
    }

    /// Add lives up to the cap. Lives are written to both stores so the
    /// value survives a checkpoint revert.
    pub fn add_lives(&mut self, session: &mut SessionProgress, amount: i32, max_lives: i32) {
        self.snapshot.lives = (self.snapshot.lives + amount).min(max_lives);
        session.snapshot.lives = self.snapshot.lives;
    }

    /// Subtract lives, mirrored into the session like `add_lives`.
    pub fn lose_lives(&mut self, session: &mut SessionProgress, amount: i32) {
        self.snapshot.lives -= amount;
        session.snapshot.lives = self.snapshot.lives;
    }

    /// Seed the starting life count for a fresh game.
    pub fn set_lives(&mut self, session: &mut SessionProgress, lives: i32) {
        self.snapshot.lives = lives;
        session.snapshot.lives = lives;
    }
}
