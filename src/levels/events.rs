//! Levels domain: level flow messages.

use bevy::ecs::message::Message;

/// The player reached the win volume.
#[derive(Debug)]
pub struct LevelWonEvent;

impl Message for LevelWonEvent {}

/// The player entered a teleporter to another level.
#[derive(Debug)]
pub struct TravelEvent {
    pub target_level: u32,
}

impl Message for TravelEvent {}
