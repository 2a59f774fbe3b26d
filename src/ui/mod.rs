//! UI domain: HUD, message panel, flash feedback, and end screens.

mod hud;
mod message;
mod screens;

pub use message::{ClearMessageEvent, DisplayMessageEvent, ScreenFlashEvent};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud::{spawn_hud, update_healthbar, update_stats_text};
use crate::ui::message::{
    MessageTimer, fade_screen_flash, handle_screen_flash, spawn_message_panel,
    update_message_panel,
};
use crate::ui::screens::{despawn_end_screen, spawn_lose_screen, spawn_win_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MessageTimer>()
            .add_message::<DisplayMessageEvent>()
            .add_message::<ClearMessageEvent>()
            .add_message::<ScreenFlashEvent>()
            .add_systems(Startup, (spawn_hud, spawn_message_panel))
            .add_systems(
                Update,
                (
                    update_healthbar,
                    update_stats_text,
                    update_message_panel,
                    handle_screen_flash,
                    fade_screen_flash,
                ),
            )
            .add_systems(OnEnter(GameState::Won), spawn_win_screen)
            .add_systems(OnExit(GameState::Won), despawn_end_screen)
            .add_systems(OnEnter(GameState::Lost), spawn_lose_screen)
            .add_systems(OnExit(GameState::Lost), despawn_end_screen);
    }
}
