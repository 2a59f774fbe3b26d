//! Levels domain: level lifecycle around the persistent progress stores.

mod checkpoints;
mod components;
mod events;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use checkpoints::{advance_cursor, reverse_cursor};
pub use components::{Checkpoint, CheckpointActivated, LevelEntity};
pub use events::{LevelWonEvent, TravelEvent};
pub use systems::RespawnCountdown;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::levels::spawn::spawn_level;
use crate::levels::systems::{
    activate_checkpoints, begin_level, cleanup_level, enter_lost, enter_won, finalize_new_game,
    follow_player_camera, handle_level_won, handle_player_downed, handle_travel, place_camera,
    reconcile_collected, restart_from_screens, spawn_player, tick_respawn,
};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnCountdown>()
            .add_message::<LevelWonEvent>()
            .add_message::<TravelEvent>()
            .add_systems(
                OnEnter(GameState::InLevel),
                (
                    spawn_level,
                    begin_level,
                    reconcile_collected,
                    finalize_new_game,
                    spawn_player,
                    place_camera,
                )
                    .chain(),
            )
            .add_systems(OnExit(GameState::InLevel), cleanup_level)
            .add_systems(OnEnter(GameState::Won), enter_won)
            .add_systems(OnEnter(GameState::Lost), enter_lost)
            .add_systems(
                Update,
                (
                    activate_checkpoints,
                    handle_level_won,
                    handle_travel,
                    handle_player_downed,
                )
                    .run_if(in_state(GameState::InLevel).and(gameplay_active)),
            )
            .add_systems(
                Update,
                (tick_respawn, follow_player_camera).run_if(in_state(GameState::InLevel)),
            )
            .add_systems(
                Update,
                restart_from_screens
                    .run_if(in_state(GameState::Won).or(in_state(GameState::Lost))),
            );
    }
}
