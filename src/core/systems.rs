//! Core domain: boot flow and camera setup.

use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Leave Boot as soon as startup content has had a chance to load.
pub(crate) fn transition_to_level(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::InLevel);
}

/// Bounce state: tear-down happened on exit from InLevel, now rebuild.
pub(crate) fn finish_reload(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::InLevel);
}
