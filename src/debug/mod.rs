//! Debug tools for fast iteration and playtesting.
//!
//! Hotkeys:
//! - `]` / `[`: warp the spawn point to the next / previous checkpoint
//! - Backspace: reload from the last save without banking anything
//! - Ctrl+I: toggle invincibility

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{CurrentLevel, GameState};
use crate::levels::{Checkpoint, advance_cursor, reverse_cursor};
use crate::movement::Player;
use crate::player::{Health, Invulnerable};
use crate::progress::{ProgressSavedEvent, SavedProgress, SessionProgress, save_game};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub invincible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, apply_invincibility, log_saves)
                .run_if(in_state(GameState::InLevel)),
        );
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    checkpoint_query: Query<(&Checkpoint, &Transform)>,
    current_level: Res<CurrentLevel>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
    mut save_events: MessageWriter<ProgressSavedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    if ctrl && keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        let msg = if debug_state.invincible {
            "Invincibility ON"
        } else {
            "Invincibility OFF"
        };
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::Backspace) {
        info!("[DEBUG] Reloading level from last save");
        next_state.set(GameState::Reloading);
    }

    if keyboard.just_pressed(KeyCode::BracketRight) {
        warp_spawn(
            advance_cursor,
            &checkpoint_query,
            &current_level,
            &mut saved,
            &mut session,
            &mut save_events,
        );
    }
    if keyboard.just_pressed(KeyCode::BracketLeft) {
        warp_spawn(
            reverse_cursor,
            &checkpoint_query,
            &current_level,
            &mut saved,
            &mut session,
            &mut save_events,
        );
    }
}

/// Move the checkpoint cursor with the given step function, anchor the
/// spawn at the checkpoint it lands on, and bank the new position.
fn warp_spawn(
    step: fn(Option<usize>, usize) -> Option<usize>,
    checkpoint_query: &Query<(&Checkpoint, &Transform)>,
    current_level: &CurrentLevel,
    saved: &mut SavedProgress,
    session: &mut SessionProgress,
    save_events: &mut MessageWriter<ProgressSavedEvent>,
) {
    let count = checkpoint_query.iter().count();
    if count == 0 {
        return;
    }

    let cursor = step(saved.checkpoint_index, count);
    let Some(index) = cursor else {
        return;
    };
    let Some((_, transform)) = checkpoint_query.iter().find(|(c, _)| c.index == index) else {
        warn!("[DEBUG] No checkpoint with index {}", index);
        return;
    };

    session.update_spawn_location(transform.translation);
    session.snapshot.camera_start = transform.translation;
    saved.checkpoint_index = cursor;
    save_game(saved, session, current_level.0, save_events);
    info!("[DEBUG] Spawn warped to checkpoint {}", index);
}

/// Keep invulnerability frames open and health topped up while on.
fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<(&mut Health, &mut Invulnerable), With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }

    for (mut health, mut invulnerable) in &mut player_query {
        invulnerable.timer = 1.0;
        if health.current < health.max {
            health.current = health.max;
        }
    }
}

fn log_saves(mut save_events: MessageReader<ProgressSavedEvent>) {
    for event in save_events.read() {
        debug!("[DEBUG] Progress banked for level {}", event.level_id);
    }
}
