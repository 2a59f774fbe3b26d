//! Levels domain: spawning a level's geometry and furniture from content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{CollectibleKind, HazardKind, LevelDef, LevelLibrary};
use crate::core::CurrentLevel;
use crate::levels::components::{Checkpoint, LevelEntity};
use crate::movement::{GameLayer, Ground};
use crate::pickups::{
    Collectible, ContactDamage, DamageRepeat, Enemy, KillVolume, LockedDoor, Persistent, Powerup,
    Roamer, Teleporter, TextVolume, WinVolume,
};
use crate::progress::CollectibleId;

const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const CHECKPOINT_COLOR: Color = Color::srgb(0.4, 0.6, 0.9);
const DOOR_COLOR: Color = Color::srgb(0.55, 0.4, 0.25);
const HAZARD_COLOR: Color = Color::srgb(0.8, 0.25, 0.2);
const ROAMER_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);
const WIN_COLOR: Color = Color::srgb(0.9, 0.8, 0.3);
const TELEPORTER_COLOR: Color = Color::srgb(0.5, 0.3, 0.8);

/// Spawn every placed object the level definition describes. Which of the
/// tracked objects survive into play is decided afterwards by the
/// reconciliation pass.
pub(crate) fn spawn_level(
    mut commands: Commands,
    current_level: Res<CurrentLevel>,
    library: Res<LevelLibrary>,
) {
    let Some(def) = library.get(current_level.0) else {
        warn!("No level definition for id {}, nothing to spawn", current_level.0);
        return;
    };

    info!("Loading level {} '{}'", def.id, def.name);
    spawn_platforms(&mut commands, def);
    spawn_checkpoints(&mut commands, def);
    spawn_collectibles(&mut commands, def);
    spawn_powerups(&mut commands, def);
    spawn_doors(&mut commands, def);
    spawn_hazards(&mut commands, def);
    spawn_roamers(&mut commands, def);
    spawn_volumes(&mut commands, def);
}

fn spawn_platforms(commands: &mut Commands, def: &LevelDef) {
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    for platform in &def.platforms {
        commands.spawn((
            LevelEntity,
            Ground,
            Sprite {
                color: GROUND_COLOR,
                custom_size: Some(Vec2::new(platform.size.0, platform.size.1)),
                ..default()
            },
            Transform::from_xyz(platform.pos.0, platform.pos.1, 0.0),
            RigidBody::Static,
            Collider::rectangle(platform.size.0, platform.size.1),
            ground_layers,
        ));
    }
}

fn spawn_checkpoints(commands: &mut Commands, def: &LevelDef) {
    for (index, pos) in def.checkpoints.iter().enumerate() {
        commands.spawn((
            LevelEntity,
            Checkpoint { index },
            Sprite {
                color: CHECKPOINT_COLOR,
                custom_size: Some(Vec2::new(16.0, 48.0)),
                ..default()
            },
            Transform::from_xyz(pos.0, pos.1, 1.0),
            Collider::rectangle(24.0, 56.0),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }
}

fn spawn_collectibles(commands: &mut Commands, def: &LevelDef) {
    for collectible in &def.collectibles {
        let position = Vec3::new(collectible.pos.0, collectible.pos.1, 1.0);
        let (color, size) = match collectible.kind {
            CollectibleKind::Small => (Color::srgb(0.9, 0.8, 0.4), Vec2::new(14.0, 14.0)),
            CollectibleKind::Large => (Color::srgb(0.95, 0.7, 0.2), Vec2::new(24.0, 24.0)),
            CollectibleKind::Key => (Color::srgb(0.85, 0.85, 0.9), Vec2::new(12.0, 20.0)),
        };

        let mut spawned = commands.spawn((
            LevelEntity,
            Collectible {
                kind: collectible.kind,
            },
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));

        if collectible.persist {
            let id = collectible
                .id
                .map(CollectibleId)
                .unwrap_or_else(|| CollectibleId::from_position(position));
            spawned.insert(Persistent { id });
        }
    }
}

fn spawn_powerups(commands: &mut Commands, def: &LevelDef) {
    for powerup in &def.powerups {
        let (lives, health, color) = match powerup.kind {
            crate::content::PowerupKind::ExtraLife { lives } => {
                (lives, 0, Color::srgb(0.3, 0.85, 0.4))
            }
            crate::content::PowerupKind::Health { amount } => {
                (0, amount, Color::srgb(0.9, 0.4, 0.5))
            }
        };

        commands.spawn((
            LevelEntity,
            Powerup { lives, health },
            Sprite {
                color,
                custom_size: Some(Vec2::new(18.0, 18.0)),
                ..default()
            },
            Transform::from_xyz(powerup.pos.0, powerup.pos.1, 1.0),
            Collider::rectangle(18.0, 18.0),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }
}

fn spawn_doors(commands: &mut Commands, def: &LevelDef) {
    for door in &def.doors {
        let position = Vec3::new(door.pos.0, door.pos.1, 0.0);
        let id = door
            .id
            .map(CollectibleId)
            .unwrap_or_else(|| CollectibleId::from_position(position));

        // Doors stay solid until a key opens them; the contact itself is
        // the unlock attempt, so events are enabled on the solid body.
        commands.spawn((
            LevelEntity,
            LockedDoor,
            Persistent { id },
            Sprite {
                color: DOOR_COLOR,
                custom_size: Some(Vec2::new(door.size.0, door.size.1)),
                ..default()
            },
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::rectangle(door.size.0, door.size.1),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
        ));
    }
}

fn spawn_hazards(commands: &mut Commands, def: &LevelDef) {
    for hazard in &def.hazards {
        let mut spawned = commands.spawn((
            LevelEntity,
            Sprite {
                color: HAZARD_COLOR,
                custom_size: Some(Vec2::new(hazard.size.0, hazard.size.1)),
                ..default()
            },
            Transform::from_xyz(hazard.pos.0, hazard.pos.1, 0.5),
            Collider::rectangle(hazard.size.0, hazard.size.1),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player, GameLayer::Enemy]),
        ));

        match hazard.kind {
            HazardKind::Kill { kill_enemies } => {
                spawned.insert(KillVolume { kill_enemies });
            }
            HazardKind::Damage {
                damage,
                push_back,
                stun_time,
                frequency,
            } => {
                spawned.insert((
                    ContactDamage {
                        damage,
                        push_back,
                        stun_time,
                        frequency,
                    },
                    DamageRepeat::default(),
                ));
            }
        }
    }
}

fn spawn_roamers(commands: &mut Commands, def: &LevelDef) {
    for roamer in &def.roamers {
        commands.spawn((
            LevelEntity,
            Enemy,
            Roamer {
                origin: roamer.pos.0,
                range: roamer.range,
                speed: roamer.speed,
                direction: 1.0,
            },
            ContactDamage {
                damage: roamer.damage,
                push_back: roamer.push_back,
                stun_time: roamer.stun_time,
                frequency: 0.5,
            },
            DamageRepeat::default(),
            Sprite {
                color: ROAMER_COLOR,
                custom_size: Some(Vec2::new(28.0, 28.0)),
                ..default()
            },
            Transform::from_xyz(roamer.pos.0, roamer.pos.1, 1.0),
            RigidBody::Kinematic,
            Collider::rectangle(28.0, 28.0),
            LinearVelocity::default(),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player, GameLayer::Sensor]),
        ));
    }
}

fn spawn_volumes(commands: &mut Commands, def: &LevelDef) {
    for volume in &def.text_volumes {
        commands.spawn((
            LevelEntity,
            TextVolume {
                text: volume.text.clone(),
                seconds: volume.seconds,
            },
            Transform::from_xyz(volume.pos.0, volume.pos.1, 0.0),
            Collider::rectangle(volume.size.0, volume.size.1),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    for teleporter in &def.teleporters {
        commands.spawn((
            LevelEntity,
            Teleporter {
                target_level: teleporter.target_level,
            },
            Sprite {
                color: TELEPORTER_COLOR,
                custom_size: Some(Vec2::new(teleporter.size.0, teleporter.size.1)),
                ..default()
            },
            Transform::from_xyz(teleporter.pos.0, teleporter.pos.1, 0.5),
            Collider::rectangle(teleporter.size.0, teleporter.size.1),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    if let Some(win_zone) = &def.win_zone {
        commands.spawn((
            LevelEntity,
            WinVolume,
            Sprite {
                color: WIN_COLOR,
                custom_size: Some(Vec2::new(win_zone.size.0, win_zone.size.1)),
                ..default()
            },
            Transform::from_xyz(win_zone.pos.0, win_zone.pos.1, 0.5),
            Collider::rectangle(win_zone.size.0, win_zone.size.1),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }
}
