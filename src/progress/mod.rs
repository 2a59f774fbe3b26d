//! Progress domain: collectible identity, per-level collected lists, and
//! the two-tier (banked vs pending) save state that survives level
//! reloads for the lifetime of the process.

mod events;
mod ids;
mod lists;
mod saved;
mod session;

#[cfg(test)]
mod tests;

pub use events::ProgressSavedEvent;
pub use ids::CollectibleId;
pub use lists::{CollectedList, CollectedLists};
pub use saved::SavedProgress;
pub use session::{PlayerSnapshot, SessionProgress};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

/// The single entry point for banking progress: copies the session
/// snapshot into the saved store, moves pending pickups for the level
/// into the saved list, and broadcasts the save.
pub fn save_game(
    saved: &mut SavedProgress,
    session: &mut SessionProgress,
    level_id: u32,
    events: &mut MessageWriter<ProgressSavedEvent>,
) {
    saved.save(session, level_id);
    events.write(ProgressSavedEvent { level_id });
    info!("Saved progress for level {}", level_id);
}

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionProgress>()
            .init_resource::<SavedProgress>()
            .add_message::<ProgressSavedEvent>();
    }
}
