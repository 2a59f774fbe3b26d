//! Player domain: vitality components and state.

use bevy::prelude::*;

/// Health for the player. Damage is applied raw so `current` can go
/// negative; depletion checks use `is_depleted`, never equality with zero.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(current: i32, max: i32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Heal up to the cap. Returns the amount actually applied.
    pub fn add(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Fill ratio for UI bars, clamped to [0, 1].
    pub fn percent(&self) -> f32 {
        (self.current.max(0) as f32) / (self.max as f32)
    }
}

/// Invulnerability frames: the player cannot take damage while the timer
/// runs. Opened on every successful hit.
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Stun: movement input is ignored while the timer runs.
#[derive(Component, Debug, Default)]
pub struct Stunned {
    pub timer: f32,
}

impl Stunned {
    pub fn is_stunned(&self) -> bool {
        self.timer > 0.0
    }
}

/// One-shot death latch. Locks out repeated life loss between the moment
/// health is depleted and the respawn that rebuilds the level.
#[derive(Resource, Debug, Default)]
pub struct DeathState {
    pub is_dead: bool,
}
