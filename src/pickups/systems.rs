//! Pickups domain: trigger systems for world objects the player touches.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySfxEvent, SfxKey};
use crate::content::CollectibleKind;
use crate::core::CurrentLevel;
use crate::levels::{LevelWonEvent, TravelEvent};
use crate::movement::Player;
use crate::pickups::components::{
    Collectible, ContactDamage, DamageRepeat, Enemy, KillVolume, LockedDoor, Persistent, Powerup,
    Roamer, Teleporter, TextVolume, WinVolume,
};
use crate::player::{
    AddHealthEvent, AddLifeEvent, DeathState, Health, LoseLifeEvent, PlayerHitEvent,
};
use crate::progress::SessionProgress;
use crate::ui::{ClearMessageEvent, DisplayMessageEvent};

pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    collectible_query: Query<(&Collectible, Option<&Persistent>)>,
    player_query: Query<Entity, With<Player>>,
    current_level: Res<CurrentLevel>,
    mut session: ResMut<SessionProgress>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (pickup_entity, other) = if collectible_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if collectible_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        let Ok((collectible, persistent)) = collectible_query.get(pickup_entity) else {
            continue;
        };

        // Tracked pickups are remembered until the next save banks them
        if let Some(persistent) = persistent {
            session.record_pickup(current_level.0, persistent.id);
        }

        match collectible.kind {
            CollectibleKind::Small => session.snapshot.small_collectibles += 1,
            CollectibleKind::Large => session.snapshot.large_collectibles += 1,
            CollectibleKind::Key => session.snapshot.keys += 1,
        }

        sfx_events.write(PlaySfxEvent::randomized(SfxKey::Collect));
        commands.entity(pickup_entity).despawn();
    }
}

pub(crate) fn collect_powerups(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    powerup_query: Query<&Powerup>,
    player_query: Query<Entity, With<Player>>,
    mut add_life_events: MessageWriter<AddLifeEvent>,
    mut add_health_events: MessageWriter<AddHealthEvent>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (powerup_entity, other) = if powerup_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if powerup_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        let Ok(powerup) = powerup_query.get(powerup_entity) else {
            continue;
        };

        if powerup.lives > 0 {
            add_life_events.write(AddLifeEvent {
                amount: powerup.lives,
            });
        }
        if powerup.health > 0 {
            add_health_events.write(AddHealthEvent {
                amount: powerup.health,
            });
        }

        sfx_events.write(PlaySfxEvent::randomized(SfxKey::Pickup));
        commands.entity(powerup_entity).despawn();
    }
}

/// A door is "collected" when opened so it stays open across reloads
/// once a checkpoint banks it.
pub(crate) fn unlock_doors(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    door_query: Query<(&LockedDoor, Option<&Persistent>)>,
    player_query: Query<Entity, With<Player>>,
    current_level: Res<CurrentLevel>,
    mut session: ResMut<SessionProgress>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
    mut message_events: MessageWriter<DisplayMessageEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (door_entity, other) = if door_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if door_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        let Ok((_, persistent)) = door_query.get(door_entity) else {
            continue;
        };

        if session.snapshot.keys == 0 {
            message_events.write(DisplayMessageEvent {
                text: "It's locked. Find a key.".to_string(),
                seconds: 2.0,
            });
            continue;
        }

        session.snapshot.keys -= 1;
        if let Some(persistent) = persistent {
            session.record_pickup(current_level.0, persistent.id);
        }
        sfx_events.write(PlaySfxEvent::randomized(SfxKey::Unlock));
        commands.entity(door_entity).despawn();
    }
}

pub(crate) fn apply_kill_volumes(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    kill_query: Query<&KillVolume>,
    player_query: Query<Entity, With<Player>>,
    enemy_query: Query<Entity, With<Enemy>>,
    death_state: Res<DeathState>,
    mut lose_life_events: MessageWriter<LoseLifeEvent>,
) {
    let player_entity = player_query.single().ok();

    for event in collision_start_events.read() {
        let (kill_entity, other) = if kill_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if kill_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        let Ok(kill_volume) = kill_query.get(kill_entity) else {
            continue;
        };

        if Some(other) == player_entity {
            // The latch keeps a pit from costing two lives in one death
            if !death_state.is_dead {
                lose_life_events.write(LoseLifeEvent { amount: 1 });
            }
        } else if kill_volume.kill_enemies && enemy_query.contains(other) {
            commands.entity(other).despawn();
        }
    }
}

pub(crate) fn track_contact_damage(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut hazard_query: Query<(&ContactDamage, &mut DamageRepeat, &Transform)>,
    player_query: Query<Entity, With<Player>>,
    mut hit_events: MessageWriter<PlayerHitEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (hazard_entity, other) = if hazard_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if hazard_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        if let Ok((damage, mut repeat, transform)) = hazard_query.get_mut(hazard_entity) {
            hit_events.write(PlayerHitEvent {
                damage: damage.damage,
                push_back: damage.push_back,
                stun_time: damage.stun_time,
                impact_point: transform.translation,
            });
            repeat.in_contact = true;
            repeat.timer = damage.frequency;
        }
    }

    for event in collision_end_events.read() {
        let (hazard_entity, other) = if hazard_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if hazard_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        if let Ok((_, mut repeat, _)) = hazard_query.get_mut(hazard_entity) {
            repeat.in_contact = false;
        }
    }
}

/// Re-apply contact damage on the hazard's cadence while the player stays
/// inside. The repeat state lives on the hazard, so despawning it stops
/// the loop; a depleted player stops it until they re-enter.
pub(crate) fn tick_damage_over_time(
    time: Res<Time>,
    mut hazard_query: Query<(&ContactDamage, &mut DamageRepeat, &Transform)>,
    player_query: Query<&Health, With<Player>>,
    mut hit_events: MessageWriter<PlayerHitEvent>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (damage, mut repeat, transform) in &mut hazard_query {
        if !repeat.in_contact {
            continue;
        }
        repeat.timer -= dt;
        if repeat.timer > 0.0 {
            continue;
        }
        if health.is_depleted() {
            repeat.in_contact = false;
            continue;
        }
        hit_events.write(PlayerHitEvent {
            damage: damage.damage,
            push_back: damage.push_back,
            stun_time: damage.stun_time,
            impact_point: transform.translation,
        });
        repeat.timer = damage.frequency;
    }
}

pub(crate) fn show_text_volumes(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    text_query: Query<&TextVolume>,
    player_query: Query<Entity, With<Player>>,
    mut message_events: MessageWriter<DisplayMessageEvent>,
    mut clear_events: MessageWriter<ClearMessageEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (text_entity, other) = if text_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if text_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        if let Ok(volume) = text_query.get(text_entity) {
            message_events.write(DisplayMessageEvent {
                text: volume.text.clone(),
                seconds: volume.seconds,
            });
        }
    }

    for event in collision_end_events.read() {
        let (text_entity, other) = if text_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if text_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        if let Ok(volume) = text_query.get(text_entity)
            && volume.seconds == 0.0
        {
            clear_events.write(ClearMessageEvent);
        }
    }
}

pub(crate) fn enter_win_volumes(
    mut collision_start_events: MessageReader<CollisionStart>,
    win_query: Query<Entity, With<WinVolume>>,
    player_query: Query<Entity, With<Player>>,
    mut won_events: MessageWriter<LevelWonEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let is_win = win_query.contains(event.collider1) || win_query.contains(event.collider2);
        let hit_player = event.collider1 == player_entity || event.collider2 == player_entity;
        if is_win && hit_player {
            won_events.write(LevelWonEvent);
        }
    }
}

pub(crate) fn enter_teleporters(
    mut collision_start_events: MessageReader<CollisionStart>,
    teleporter_query: Query<&Teleporter>,
    player_query: Query<Entity, With<Player>>,
    mut travel_events: MessageWriter<TravelEvent>,
) {
    let Ok(player_entity) = player_query.single() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (teleporter_entity, other) = if teleporter_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if teleporter_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };
        if other != player_entity {
            continue;
        }
        if let Ok(teleporter) = teleporter_query.get(teleporter_entity) {
            travel_events.write(TravelEvent {
                target_level: teleporter.target_level,
            });
        }
    }
}

pub(crate) fn move_roamers(mut query: Query<(&mut Roamer, &Transform, &mut LinearVelocity)>) {
    for (mut roamer, transform, mut velocity) in &mut query {
        let offset = transform.translation.x - roamer.origin;
        if offset.abs() > roamer.range {
            roamer.direction = -offset.signum();
        }
        velocity.x = roamer.speed * roamer.direction;
    }
}
