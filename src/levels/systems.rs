//! Levels domain: bootstrap orchestration, reconciliation, respawn flow,
//! checkpoints, and win/lose handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySfxEvent, SfxKey};
use crate::content::{GameplayConfig, LevelLibrary};
use crate::core::{CurrentLevel, GameState, GameplayPaused};
use crate::levels::components::{Checkpoint, CheckpointActivated, LevelEntity};
use crate::levels::events::{LevelWonEvent, TravelEvent};
use crate::movement::{Player, spawn_player_at};
use crate::pickups::Persistent;
use crate::player::PlayerDownedEvent;
use crate::progress::{
    CollectedLists, ProgressSavedEvent, SavedProgress, SessionProgress, save_game,
};

/// Countdown between death and the level reload, so the death registers
/// before the world resets.
#[derive(Resource, Debug, Default)]
pub struct RespawnCountdown {
    pub pending: bool,
    pub timer: f32,
}

// ----------------------------------------------------------------------------
// Level bootstrap (runs as a chain on entering InLevel)
// ----------------------------------------------------------------------------

/// Decide fresh start vs continue before the world is reconciled.
/// Fresh: zero the session and seed lives. Continue: restore the last
/// saved snapshot. The fresh-game flag stays set until `finalize_new_game`
/// has banked the initialized state.
pub(crate) fn begin_level(
    current_level: Res<CurrentLevel>,
    library: Res<LevelLibrary>,
    config: Res<GameplayConfig>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
) {
    let level_id = current_level.0;

    // The pending store is life-local: reaching this point means either a
    // fresh life or a level change, and level changes bank first. Anything
    // still pending here was never saved and is forfeit.
    session.unsaved = CollectedLists::default();

    // Both tiers get a list before anything reads or records
    saved.ensure_level_list(level_id);
    session.unsaved.get_or_create(level_id);

    let anchors = library
        .get(level_id)
        .map(|def| (def.player_start, def.camera_start));

    if saved.is_new_game {
        let (player_start, camera_offset) = anchors.unwrap_or(((0.0, 0.0), (0.0, 0.0)));
        let spawn = Vec3::new(player_start.0, player_start.1, 0.0);
        let camera = spawn + Vec3::new(camera_offset.0, camera_offset.1, 0.0);
        session.initialize_new_player(level_id, spawn, camera);
        saved.set_lives(&mut session, config.starting_lives);
        info!("Fresh game: initializing player in level {}", level_id);
    } else {
        saved.load(&mut session);
        if session.snapshot.level_id != level_id {
            // First arrival in this level: the stored spawn belongs to the
            // previous one, so anchor at this level's start instead.
            if let Some((player_start, camera_offset)) = anchors {
                let spawn = Vec3::new(player_start.0, player_start.1, 0.0);
                session.snapshot.level_id = level_id;
                session.update_spawn_location(spawn);
                session.snapshot.camera_start =
                    spawn + Vec3::new(camera_offset.0, camera_offset.1, 0.0);
            }
        }
        sfx_events.write(PlaySfxEvent::one_shot(SfxKey::Respawn));
        info!("Continuing in level {}", level_id);
    }
}

/// Strip every tracked object whose identity was already banked for this
/// level. Skipped silently when the level has no saved list yet. Safe to
/// run any number of times: matching objects despawn, the rest stay.
pub(crate) fn reconcile_collected(
    mut commands: Commands,
    current_level: Res<CurrentLevel>,
    saved: Res<SavedProgress>,
    query: Query<(Entity, &Persistent)>,
) {
    let Some(list) = saved.saved_list(current_level.0) else {
        return;
    };

    let mut removed = 0;
    for (entity, persistent) in &query {
        if list.contains(persistent.id) {
            commands.entity(entity).despawn();
            removed += 1;
        }
    }
    if removed > 0 {
        info!(
            "Removed {} already-collected objects from level {}",
            removed, current_level.0
        );
    }
}

/// Bank the freshly initialized state, then drop the fresh-game flag.
pub(crate) fn finalize_new_game(
    current_level: Res<CurrentLevel>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
    mut save_events: MessageWriter<ProgressSavedEvent>,
) {
    if !saved.is_new_game {
        return;
    }
    save_game(&mut saved, &mut session, current_level.0, &mut save_events);
    saved.is_new_game = false;
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<GameplayConfig>,
    session: Res<SessionProgress>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }
    spawn_player_at(&mut commands, session.snapshot.player_start, &config);
}

pub(crate) fn place_camera(
    session: Res<SessionProgress>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if let Ok(mut transform) = camera_query.single_mut() {
        transform.translation.x = session.snapshot.camera_start.x;
        transform.translation.y = session.snapshot.camera_start.y;
    }
}

pub(crate) fn cleanup_level(
    mut commands: Commands,
    query: Query<Entity, Or<(With<LevelEntity>, With<Player>)>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

// ----------------------------------------------------------------------------
// In-level systems
// ----------------------------------------------------------------------------

pub(crate) fn follow_player_camera(
    time: Res<Time>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let target = player_transform.translation.truncate();
    let current = camera_transform.translation.truncate();
    let eased = current.lerp(target, (6.0 * time.delta_secs()).min(1.0));
    camera_transform.translation.x = eased.x;
    camera_transform.translation.y = eased.y;
}

/// Touching a checkpoint moves the spawn anchor there, points the cursor
/// at it, and banks everything pending.
pub(crate) fn activate_checkpoints(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    checkpoint_query: Query<(&Checkpoint, &Transform), Without<CheckpointActivated>>,
    player_query: Query<Entity, With<Player>>,
    current_level: Res<CurrentLevel>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
    mut save_events: MessageWriter<ProgressSavedEvent>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (checkpoint_entity, other) = if checkpoint_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if checkpoint_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        let Ok((checkpoint, transform)) = checkpoint_query.get(checkpoint_entity) else {
            continue;
        };

        session.update_spawn_location(transform.translation);
        session.snapshot.camera_start = transform.translation;
        saved.checkpoint_index = Some(checkpoint.index);
        save_game(&mut saved, &mut session, current_level.0, &mut save_events);
        sfx_events.write(PlaySfxEvent::one_shot(SfxKey::Checkpoint));
        commands.entity(checkpoint_entity).insert(CheckpointActivated);
        info!("Checkpoint {} activated", checkpoint.index);
    }
}

/// Decide between respawn and game over once a life is gone. Respawn
/// freezes and hides the player, lets the death sink in, then reloads the
/// level; game over hands control to the Lost screen.
pub(crate) fn handle_player_downed(
    mut downed_events: MessageReader<PlayerDownedEvent>,
    config: Res<GameplayConfig>,
    mut paused: ResMut<GameplayPaused>,
    mut respawn: ResMut<RespawnCountdown>,
    mut player_query: Query<(&mut Visibility, &mut LinearVelocity), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in downed_events.read() {
        if config.infinite_lives || event.lives_remaining > 0 {
            if let Ok((mut visibility, mut velocity)) = player_query.single_mut() {
                *visibility = Visibility::Hidden;
                velocity.0 = Vec2::ZERO;
            }
            paused.pause("respawn");
            respawn.pending = true;
            respawn.timer = config.respawn_time;
        } else {
            info!("Out of lives, game over");
            next_state.set(GameState::Lost);
        }
    }
}

pub(crate) fn tick_respawn(
    time: Res<Time>,
    mut respawn: ResMut<RespawnCountdown>,
    mut paused: ResMut<GameplayPaused>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !respawn.pending {
        return;
    }
    respawn.timer -= time.delta_secs();
    if respawn.timer <= 0.0 {
        respawn.pending = false;
        paused.unpause("respawn");
        next_state.set(GameState::Reloading);
    }
}

pub(crate) fn handle_level_won(
    mut won_events: MessageReader<LevelWonEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for _ in won_events.read() {
        info!("Level complete!");
        next_state.set(GameState::Won);
    }
}

/// Level changes are save-worthy events: bank first, then travel.
pub(crate) fn handle_travel(
    mut travel_events: MessageReader<TravelEvent>,
    library: Res<LevelLibrary>,
    mut current_level: ResMut<CurrentLevel>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
    mut save_events: MessageWriter<ProgressSavedEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in travel_events.read() {
        if library.get(event.target_level).is_none() {
            warn!(
                "Teleporter targets unknown level {}, ignoring",
                event.target_level
            );
            continue;
        }

        save_game(&mut saved, &mut session, current_level.0, &mut save_events);
        current_level.0 = event.target_level;
        // The cursor indexes the old level's checkpoint list
        saved.checkpoint_index = None;
        next_state.set(GameState::Reloading);
    }
}

// ----------------------------------------------------------------------------
// End screens
// ----------------------------------------------------------------------------

pub(crate) fn enter_won(
    current_level: Res<CurrentLevel>,
    mut saved: ResMut<SavedProgress>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
) {
    sfx_events.write(PlaySfxEvent::one_shot(SfxKey::Win));
    saved.new_game(current_level.0);
}

pub(crate) fn enter_lost(
    current_level: Res<CurrentLevel>,
    mut saved: ResMut<SavedProgress>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
) {
    sfx_events.write(PlaySfxEvent::one_shot(SfxKey::Lose));
    saved.new_game(current_level.0);
}

pub(crate) fn restart_from_screens(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        next_state.set(GameState::Reloading);
    }
}
