//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The LevelLibrary provides lookup by level id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Gameplay tuning (gameplay.ron)
// ============================================================================

/// Global gameplay tuning, loaded once at startup.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct GameplayConfig {
    /// Maximum amount of health the player can reach
    pub max_health: i32,
    /// Health the player starts a life with (never above max_health)
    pub starting_health: i32,
    /// How long the player stays invulnerable after being hit
    pub hit_invulnerable_time: f32,
    /// Maximum number of lives the player can bank
    pub max_lives: i32,
    /// Lives a fresh game starts with
    pub starting_lives: i32,
    /// If true, lives still tick down but never trigger a game over
    pub infinite_lives: bool,
    /// Delay between death and the level reload
    pub respawn_time: f32,
    /// Lower bound of the randomized SFX pitch range
    pub pitch_low: f32,
    /// Upper bound of the randomized SFX pitch range
    pub pitch_high: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            max_health: 10,
            starting_health: 10,
            hit_invulnerable_time: 0.2,
            max_lives: 3,
            starting_lives: 3,
            infinite_lives: false,
            respawn_time: 2.0,
            pitch_low: 0.95,
            pitch_high: 1.05,
        }
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: u32,
    pub name: String,
    /// Where the player spawns on a fresh visit
    pub player_start: (f32, f32),
    /// Camera offset from the player start
    pub camera_start: (f32, f32),
    pub platforms: Vec<PlatformDef>,
    /// Checkpoints in activation order; the cursor indexes into this list
    pub checkpoints: Vec<(f32, f32)>,
    pub collectibles: Vec<CollectibleDef>,
    pub powerups: Vec<PowerupDef>,
    pub doors: Vec<DoorDef>,
    pub hazards: Vec<HazardDef>,
    pub roamers: Vec<RoamerDef>,
    pub text_volumes: Vec<TextVolumeDef>,
    pub teleporters: Vec<TeleporterDef>,
    pub win_zone: Option<ZoneDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CollectibleKind {
    Small,
    Large,
    Key,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectibleDef {
    pub kind: CollectibleKind,
    pub pos: (f32, f32),
    /// If false, the instance respawns on every level load (not tracked)
    pub persist: bool,
    /// Author-assigned identity override; position-derived when absent
    pub id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum PowerupKind {
    ExtraLife { lives: i32 },
    Health { amount: i32 },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PowerupDef {
    pub kind: PowerupKind,
    pub pos: (f32, f32),
}

/// A locked door that a key opens. Opened doors are tracked like
/// collectibles so they stay open across reloads once saved.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoorDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
    pub id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum HazardKind {
    /// Always costs a full life, regardless of health
    Kill { kill_enemies: bool },
    /// Damage on contact, re-applied every `frequency` seconds while inside
    Damage {
        damage: i32,
        push_back: f32,
        stun_time: f32,
        frequency: f32,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub kind: HazardKind,
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextVolumeDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
    pub text: String,
    /// 0 = show until the player leaves the volume
    pub seconds: f32,
}

/// A patrolling enemy that walks back and forth and hurts on contact.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RoamerDef {
    pub pos: (f32, f32),
    /// Half-width of the patrol path around the spawn point
    pub range: f32,
    pub speed: f32,
    pub damage: i32,
    pub push_back: f32,
    pub stun_time: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeleporterDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
    pub target_level: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneDef {
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

impl LevelDef {
    /// Minimal built-in level used when assets/data/levels.ron is missing
    /// or unreadable, so the game still boots into something playable.
    pub fn fallback() -> Self {
        Self {
            id: 1,
            name: "Fallback Ridge".to_string(),
            player_start: (-400.0, -80.0),
            camera_start: (0.0, 40.0),
            platforms: vec![
                PlatformDef {
                    pos: (0.0, -150.0),
                    size: (1200.0, 40.0),
                },
                PlatformDef {
                    pos: (250.0, -40.0),
                    size: (160.0, 20.0),
                },
            ],
            checkpoints: vec![(0.0, -120.0), (420.0, -120.0)],
            collectibles: vec![
                CollectibleDef {
                    kind: CollectibleKind::Small,
                    pos: (-200.0, -110.0),
                    persist: true,
                    id: None,
                },
                CollectibleDef {
                    kind: CollectibleKind::Large,
                    pos: (250.0, 0.0),
                    persist: true,
                    id: None,
                },
            ],
            powerups: Vec::new(),
            doors: Vec::new(),
            hazards: Vec::new(),
            roamers: Vec::new(),
            text_volumes: Vec::new(),
            teleporters: Vec::new(),
            win_zone: Some(ZoneDef {
                pos: (560.0, -100.0),
                size: (40.0, 100.0),
            }),
        }
    }
}
