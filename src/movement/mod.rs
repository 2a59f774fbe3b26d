//! Movement domain: platformer locomotion for the player.

mod bootstrap;
mod components;
mod resources;
mod systems;

pub use bootstrap::spawn_player_at;
pub use components::{Facing, GameLayer, Ground, MovementState, Player};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump_and_gravity, detect_ground, read_move_input,
    update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                Update,
                (
                    read_move_input,
                    detect_ground,
                    update_timers,
                    apply_horizontal_movement,
                    apply_jump_and_gravity,
                )
                    .chain()
                    .run_if(in_state(GameState::InLevel).and(gameplay_active)),
            );
    }
}
