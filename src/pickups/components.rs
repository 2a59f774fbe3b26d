//! Pickups domain: components for trigger-volume world objects.

use bevy::prelude::*;

use crate::content::CollectibleKind;
use crate::progress::CollectibleId;

/// Attach to anything whose collection should survive level reloads.
/// The identity is computed once at spawn and never changes.
#[derive(Component, Debug, Clone, Copy)]
pub struct Persistent {
    pub id: CollectibleId,
}

/// A collectible the player picks up by touch.
#[derive(Component, Debug)]
pub struct Collectible {
    pub kind: CollectibleKind,
}

/// A one-shot powerup (extra life or heal).
#[derive(Component, Debug)]
pub struct Powerup {
    pub lives: i32,
    pub health: i32,
}

/// A door that a key opens. Stays solid until unlocked.
#[derive(Component, Debug)]
pub struct LockedDoor;

/// Costs the player a full life on contact, regardless of health.
#[derive(Component, Debug)]
pub struct KillVolume {
    pub kill_enemies: bool,
}

/// Damages the player on contact and keeps re-applying the hit while
/// they stay inside.
#[derive(Component, Debug)]
pub struct ContactDamage {
    pub damage: i32,
    pub push_back: f32,
    pub stun_time: f32,
    /// Seconds between repeated hits while the player stays in contact
    pub frequency: f32,
}

/// Repeat-damage bookkeeping. Lives on the hazard entity so despawning
/// the hazard cancels any pending repeats with it.
#[derive(Component, Debug, Default)]
pub struct DamageRepeat {
    pub in_contact: bool,
    pub timer: f32,
}

/// Marker for patrolling enemies.
#[derive(Component, Debug)]
pub struct Enemy;

/// Walks back and forth around its spawn point.
#[derive(Component, Debug)]
pub struct Roamer {
    pub origin: f32,
    pub range: f32,
    pub speed: f32,
    pub direction: f32,
}

/// Shows a message while the player is inside.
#[derive(Component, Debug)]
pub struct TextVolume {
    pub text: String,
    /// 0 = show until the player leaves the volume
    pub seconds: f32,
}

/// Ends the level in victory on touch.
#[derive(Component, Debug)]
pub struct WinVolume;

/// Sends the player to another level on touch.
#[derive(Component, Debug)]
pub struct Teleporter {
    pub target_level: u32,
}
