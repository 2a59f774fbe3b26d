//! Content domain: RON-authored level and tuning data.

mod data;
mod library;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    CollectibleDef, CollectibleKind, DoorDef, GameplayConfig, HazardDef, HazardKind, LevelDef,
    PlatformDef, PowerupDef, PowerupKind, RoamerDef, TeleporterDef, TextVolumeDef, ZoneDef,
};
pub use library::LevelLibrary;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_all_content;
use crate::content::validation::validate_content;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLibrary>()
            .init_resource::<GameplayConfig>()
            .add_systems(Startup, setup_content);
    }
}

/// Load all content at startup. Load failures degrade to compiled
/// defaults so a missing assets directory still boots a playable game.
fn setup_content(mut library: ResMut<LevelLibrary>, mut gameplay: ResMut<GameplayConfig>) {
    let (loaded_library, loaded_gameplay, errors) = load_all_content(Path::new("assets/data"));

    for error in &errors {
        error!("{}", error);
    }

    *library = loaded_library;
    *gameplay = loaded_gameplay;

    if library.levels.is_empty() {
        warn!("No levels loaded, using built-in fallback level");
        let fallback = LevelDef::fallback();
        library.levels.insert(fallback.id, fallback);
    }

    for issue in validate_content(&library) {
        warn!("{}", issue);
    }

    info!("{}", library.summary());
}
