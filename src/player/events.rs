//! Player domain: vitality messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// An attempt to hit the player. Ignored while invulnerable.
#[derive(Debug)]
pub struct PlayerHitEvent {
    pub damage: i32,
    /// Velocity applied straight away from the impact point
    pub push_back: f32,
    pub stun_time: f32,
    pub impact_point: Vec3,
}

impl Message for PlayerHitEvent {}

/// Direct life loss, bypassing health (kill volumes, depleted health).
#[derive(Debug)]
pub struct LoseLifeEvent {
    pub amount: i32,
}

impl Message for LoseLifeEvent {}

/// Fired once per death after lives were deducted; the level flow decides
/// between respawn and game over.
#[derive(Debug)]
pub struct PlayerDownedEvent {
    pub lives_remaining: i32,
}

impl Message for PlayerDownedEvent {}

/// Heal request from pickups.
#[derive(Debug)]
pub struct AddHealthEvent {
    pub amount: i32,
}

impl Message for AddHealthEvent {}

/// Extra-life request from pickups.
#[derive(Debug)]
pub struct AddLifeEvent {
    pub amount: i32,
}

impl Message for AddLifeEvent {}
