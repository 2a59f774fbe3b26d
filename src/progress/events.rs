//! Progress domain: save broadcast messages.

use bevy::ecs::message::Message;

/// Broadcast after every successful save. Nobody has to listen; anything
/// that wants to react to a bank (autosave indicators, logging) reads it.
#[derive(Debug)]
pub struct ProgressSavedEvent {
    pub level_id: u32,
}

impl Message for ProgressSavedEvent {}
