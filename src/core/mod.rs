//! Core domain: game states, pause control, and level identity.

mod resources;
mod state;
mod systems;

pub use resources::{CurrentLevel, GameplayPaused, gameplay_active};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_reload, setup_camera, transition_to_level};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .init_resource::<CurrentLevel>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Boot), transition_to_level)
            .add_systems(OnEnter(GameState::Reloading), finish_reload);
    }
}
