//! Core domain: shared resources for level identity and pause control.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Stable integer identifier of the level the game is currently in.
/// Level hosts (bootstrap, reconciliation, save lists) key off this.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentLevel(pub u32);

impl Default for CurrentLevel {
    fn default() -> Self {
        Self(1)
    }
}
