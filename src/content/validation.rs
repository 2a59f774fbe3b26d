//! Validation for level definitions after loading.

use std::collections::HashSet;

use super::library::LevelLibrary;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub level_id: u32,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {}: {}", self.level_id, self.message)
    }
}

/// Validate loaded levels: teleporter targets must exist and explicit
/// collectible/door identities must be unique within their level. Two
/// instances sharing an identity would both despawn once either is saved.
pub fn validate_content(library: &LevelLibrary) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, level) in &library.levels {
        let mut seen_ids = HashSet::new();
        let explicit = level
            .collectibles
            .iter()
            .filter_map(|c| c.id)
            .chain(level.doors.iter().filter_map(|d| d.id));
        for item_id in explicit {
            if !seen_ids.insert(item_id) {
                errors.push(ValidationError {
                    level_id: *id,
                    message: format!("duplicate collectible identity {}", item_id),
                });
            }
        }

        for teleporter in &level.teleporters {
            if !library.levels.contains_key(&teleporter.target_level) {
                errors.push(ValidationError {
                    level_id: *id,
                    message: format!(
                        "teleporter targets missing level {}",
                        teleporter.target_level
                    ),
                });
            }
        }
    }

    errors
}
