//! Audio domain: fire-and-forget one-shot sound effects.
//!
//! Gameplay code never touches audio sources directly; it writes a
//! `PlaySfxEvent` and moves on. Nothing reads anything back.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use crate::content::GameplayConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfxKey {
    Collect,
    Pickup,
    Unlock,
    Checkpoint,
    PlayerDamage,
    Respawn,
    Win,
    Lose,
}

impl SfxKey {
    fn asset_path(self) -> &'static str {
        match self {
            SfxKey::Collect => "audio/collect.ogg",
            SfxKey::Pickup => "audio/pickup.ogg",
            SfxKey::Unlock => "audio/unlock.ogg",
            SfxKey::Checkpoint => "audio/checkpoint.ogg",
            SfxKey::PlayerDamage => "audio/damage.ogg",
            SfxKey::Respawn => "audio/respawn.ogg",
            SfxKey::Win => "audio/win.ogg",
            SfxKey::Lose => "audio/lose.ogg",
        }
    }

    fn all() -> [SfxKey; 8] {
        [
            SfxKey::Collect,
            SfxKey::Pickup,
            SfxKey::Unlock,
            SfxKey::Checkpoint,
            SfxKey::PlayerDamage,
            SfxKey::Respawn,
            SfxKey::Win,
            SfxKey::Lose,
        ]
    }
}

/// Request to play a one-shot clip.
#[derive(Debug)]
pub struct PlaySfxEvent {
    pub key: SfxKey,
    pub volume: f32,
    pub randomize_pitch: bool,
}

impl Message for PlaySfxEvent {}

impl PlaySfxEvent {
    pub fn one_shot(key: SfxKey) -> Self {
        Self {
            key,
            volume: 1.0,
            randomize_pitch: false,
        }
    }

    pub fn randomized(key: SfxKey) -> Self {
        Self {
            key,
            volume: 1.0,
            randomize_pitch: true,
        }
    }
}

#[derive(Resource, Default)]
pub struct SfxLibrary {
    clips: HashMap<SfxKey, Handle<AudioSource>>,
}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SfxLibrary>()
            .add_message::<PlaySfxEvent>()
            .add_systems(Startup, load_sfx)
            .add_systems(Update, play_sfx);
    }
}

fn load_sfx(asset_server: Res<AssetServer>, mut library: ResMut<SfxLibrary>) {
    for key in SfxKey::all() {
        library
            .clips
            .insert(key, asset_server.load(key.asset_path()));
    }
}

fn play_sfx(
    mut commands: Commands,
    mut events: MessageReader<PlaySfxEvent>,
    library: Res<SfxLibrary>,
    config: Res<GameplayConfig>,
) {
    for event in events.read() {
        let Some(handle) = library.clips.get(&event.key) else {
            warn!("No clip wired for {:?}, skipping", event.key);
            continue;
        };

        let speed = if event.randomize_pitch && config.pitch_high > config.pitch_low {
            rand::rng().random_range(config.pitch_low..config.pitch_high)
        } else {
            1.0
        };

        commands.spawn((
            AudioPlayer(handle.clone()),
            PlaybackSettings::DESPAWN
                .with_volume(bevy::audio::Volume::Linear(event.volume))
                .with_speed(speed),
        ));
    }
}
