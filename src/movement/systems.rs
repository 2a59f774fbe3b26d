//! Movement domain: input, grounding, and locomotion systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::components::{Facing, GameLayer, MovementState, Player};
use crate::movement::resources::{MovementInput, MovementTuning};
use crate::player::Stunned;

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    stunned_query: Query<&Stunned, With<Player>>,
    mut input: ResMut<MovementInput>,
) {
    input.axis = Vec2::ZERO;
    input.jump_just_pressed = false;

    // A stunned player has no say in where they go
    if stunned_query.iter().any(|s| s.is_stunned()) {
        return;
    }

    if keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA) {
        input.axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD) {
        input.axis.x += 1.0;
    }
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyW);
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            state.coyote_timer = 0.0;
        }
    }
}

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        // Coyote time: starts counting when leaving ground
        if !state.on_ground {
            state.coyote_timer += dt;
        }
        // Jump buffer: counts down after pressing jump
        if state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer -= dt;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let target_vx = input.axis.x * tuning.max_speed;

        if input.axis.x.abs() > 0.1 {
            state.facing = if input.axis.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
            let accel = tuning.accel * dt;
            if velocity.x < target_vx {
                velocity.x = (velocity.x + accel).min(target_vx);
            } else {
                velocity.x = (velocity.x - accel).max(target_vx);
            }
        } else {
            let decel = tuning.decel * dt;
            if velocity.x > 0.0 {
                velocity.x = (velocity.x - decel).max(0.0);
            } else {
                velocity.x = (velocity.x + decel).min(0.0);
            }
        }
    }
}

pub(crate) fn apply_jump_and_gravity(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        if input.jump_just_pressed {
            state.jump_buffer_timer = tuning.jump_buffer_time;
        }

        let wants_jump = state.jump_buffer_timer > 0.0;
        let can_jump = state.on_ground || state.coyote_timer < tuning.coyote_time;

        if wants_jump && can_jump {
            velocity.y = tuning.jump_velocity;
            state.jump_buffer_timer = 0.0;
            state.coyote_timer = tuning.coyote_time; // Consume coyote time
        }

        // Gravity is applied manually; bodies spawn with GravityScale(0.0)
        if !state.on_ground || velocity.y > 0.0 {
            velocity.y -= tuning.gravity * dt;
        }
    }
}
