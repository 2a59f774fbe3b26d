//! Player domain: vitality (health, invulnerability, stun, life loss).

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{DeathState, Health, Invulnerable, Stunned};
pub use events::{AddHealthEvent, AddLifeEvent, LoseLifeEvent, PlayerDownedEvent, PlayerHitEvent};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::player::systems::{
    apply_player_hits, process_add_health, process_add_life, process_lose_life, reset_death_state,
    tick_vitality_timers,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeathState>()
            .add_message::<PlayerHitEvent>()
            .add_message::<LoseLifeEvent>()
            .add_message::<PlayerDownedEvent>()
            .add_message::<AddHealthEvent>()
            .add_message::<AddLifeEvent>()
            .add_systems(OnEnter(GameState::InLevel), reset_death_state)
            .add_systems(
                Update,
                tick_vitality_timers.run_if(in_state(GameState::InLevel)),
            )
            .add_systems(
                Update,
                (
                    apply_player_hits,
                    process_lose_life,
                    process_add_health,
                    process_add_life,
                )
                    .chain()
                    .run_if(in_state(GameState::InLevel).and(gameplay_active)),
            );
    }
}
