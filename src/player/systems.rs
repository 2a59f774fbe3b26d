//! Player domain: vitality systems for hits, life loss, and healing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySfxEvent, SfxKey};
use crate::content::GameplayConfig;
use crate::movement::Player;
use crate::player::components::{DeathState, Health, Invulnerable, Stunned};
use crate::player::events::{
    AddHealthEvent, AddLifeEvent, LoseLifeEvent, PlayerDownedEvent, PlayerHitEvent,
};
use crate::progress::{SavedProgress, SessionProgress};
use crate::ui::ScreenFlashEvent;

pub(crate) struct HitOutcome {
    pub applied: bool,
    pub life_lost: bool,
}

/// Core hit resolution, separated from the ECS plumbing. Damage lands
/// unless the invulnerability window is open; a successful hit re-opens
/// the window. Crossing into depleted health reports a life loss exactly
/// once; the latch stays set until the respawn clears it.
pub(crate) fn resolve_hit(
    health: &mut Health,
    invulnerable: &mut Invulnerable,
    death: &mut DeathState,
    damage: i32,
    invulnerable_time: f32,
) -> HitOutcome {
    if invulnerable.is_invulnerable() {
        return HitOutcome {
            applied: false,
            life_lost: false,
        };
    }

    invulnerable.timer = invulnerable_time;
    health.current -= damage;

    let life_lost = health.is_depleted() && !death.is_dead;
    if life_lost {
        death.is_dead = true;
    }

    HitOutcome {
        applied: true,
        life_lost,
    }
}

pub(crate) fn apply_player_hits(
    mut hit_events: MessageReader<PlayerHitEvent>,
    mut lose_life_events: MessageWriter<LoseLifeEvent>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
    mut flash_events: MessageWriter<ScreenFlashEvent>,
    config: Res<GameplayConfig>,
    mut death_state: ResMut<DeathState>,
    mut player_query: Query<
        (
            &mut Health,
            &mut Invulnerable,
            &mut Stunned,
            &Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for event in hit_events.read() {
        let Ok((mut health, mut invulnerable, mut stunned, transform, mut velocity)) =
            player_query.single_mut()
        else {
            continue;
        };

        let outcome = resolve_hit(
            &mut health,
            &mut invulnerable,
            &mut death_state,
            event.damage,
            config.hit_invulnerable_time,
        );
        if !outcome.applied {
            continue;
        }

        // Knock the player straight away from the impact point
        if event.push_back > 0.0 {
            let direction = (transform.translation - event.impact_point)
                .truncate()
                .normalize_or_zero();
            velocity.0 = direction * event.push_back;
        }
        if event.stun_time > 0.0 {
            stunned.timer = stunned.timer.max(event.stun_time);
        }

        flash_events.write(ScreenFlashEvent {
            color: Color::srgba(0.9, 0.1, 0.1, 0.35),
            duration: 0.25,
        });
        sfx_events.write(PlaySfxEvent::randomized(SfxKey::PlayerDamage));

        if outcome.life_lost {
            lose_life_events.write(LoseLifeEvent { amount: 1 });
        }
    }
}

/// Deduct lives and hand the respawn-or-game-over decision to the level
/// flow. Lives live in the saved store so the deduction survives the
/// checkpoint revert that follows.
pub(crate) fn process_lose_life(
    mut lose_events: MessageReader<LoseLifeEvent>,
    mut downed_events: MessageWriter<PlayerDownedEvent>,
    mut sfx_events: MessageWriter<PlaySfxEvent>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
    mut death_state: ResMut<DeathState>,
) {
    for event in lose_events.read() {
        saved.lose_lives(&mut session, event.amount);
        death_state.is_dead = true;
        sfx_events.write(PlaySfxEvent::randomized(SfxKey::PlayerDamage));

        info!("Life lost, {} remaining", saved.snapshot.lives);
        downed_events.write(PlayerDownedEvent {
            lives_remaining: saved.snapshot.lives,
        });
    }
}

pub(crate) fn process_add_health(
    mut events: MessageReader<AddHealthEvent>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    for event in events.read() {
        let Ok(mut health) = player_query.single_mut() else {
            continue;
        };
        let applied = health.add(event.amount);
        debug!("Healed {} (requested {})", applied, event.amount);
    }
}

pub(crate) fn process_add_life(
    mut events: MessageReader<AddLifeEvent>,
    config: Res<GameplayConfig>,
    mut saved: ResMut<SavedProgress>,
    mut session: ResMut<SessionProgress>,
) {
    for event in events.read() {
        saved.add_lives(&mut session, event.amount, config.max_lives);
        info!("Lives now {}", saved.snapshot.lives);
    }
}

pub(crate) fn tick_vitality_timers(
    time: Res<Time>,
    mut query: Query<(&mut Invulnerable, &mut Stunned), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut invulnerable, mut stunned) in &mut query {
        if invulnerable.timer > 0.0 {
            invulnerable.timer -= dt;
        }
        if stunned.timer > 0.0 {
            stunned.timer -= dt;
        }
    }
}

/// A fresh life starts without the death latch.
pub(crate) fn reset_death_state(mut death_state: ResMut<DeathState>) {
    death_state.is_dead = false;
}
