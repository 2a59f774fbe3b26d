//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Sensors (pickups, hazards, triggers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
