//! LevelLibrary resource providing lookup of level definitions by id.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::LevelDef;

/// All authored levels, keyed by their stable integer id.
#[derive(Resource, Default)]
pub struct LevelLibrary {
    pub levels: HashMap<u32, LevelDef>,
}

impl LevelLibrary {
    pub fn get(&self, id: u32) -> Option<&LevelDef> {
        self.levels.get(&id)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let collectibles: usize = self.levels.values().map(|l| l.collectibles.len()).sum();
        let checkpoints: usize = self.levels.values().map(|l| l.checkpoints.len()).sum();
        format!(
            "LevelLibrary loaded: {} levels, {} collectibles, {} checkpoints",
            self.levels.len(),
            collectibles,
            checkpoints
        )
    }
}
