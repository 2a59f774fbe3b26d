//! Pickups domain: trigger-volume world objects (collectibles, powerups,
//! doors, hazards, roamers, text and win volumes, teleporters).

mod components;
mod systems;

pub use components::{
    Collectible, ContactDamage, DamageRepeat, Enemy, KillVolume, LockedDoor, Persistent, Powerup,
    Roamer, Teleporter, TextVolume, WinVolume,
};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::pickups::systems::{
    apply_kill_volumes, collect_pickups, collect_powerups, enter_teleporters, enter_win_volumes,
    move_roamers, show_text_volumes, tick_damage_over_time, track_contact_damage, unlock_doors,
};

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                collect_pickups,
                collect_powerups,
                unlock_doors,
                apply_kill_volumes,
                track_contact_damage,
                tick_damage_over_time,
                show_text_volumes,
                enter_win_volumes,
                enter_teleporters,
                move_roamers,
            )
                .run_if(in_state(GameState::InLevel).and(gameplay_active)),
        );
    }
}
