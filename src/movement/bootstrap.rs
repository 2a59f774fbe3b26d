//! Movement domain: player spawn helper.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::GameplayConfig;
use crate::movement::components::{GameLayer, MovementState, Player};
use crate::player::{Health, Invulnerable, Stunned};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player at a position with fresh vitality. The level flow
/// picks the position (fresh start vs stored spawn) before calling.
pub fn spawn_player_at(commands: &mut Commands, position: Vec3, config: &GameplayConfig) -> Entity {
    commands
        .spawn((
            (
                Player,
                MovementState::default(),
                Health::new(config.starting_health, config.max_health),
                Invulnerable::default(),
                Stunned::default(),
            ),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(position),
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                // Gravity is handled manually in the movement systems
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Enemy, GameLayer::Sensor],
                ),
            ),
        ))
        .id()
}
