//! UI domain: message panel and screen flash feedback.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

/// Show a message on the message panel. `seconds` of 0 keeps it up until
/// something clears it.
#[derive(Debug)]
pub struct DisplayMessageEvent {
    pub text: String,
    pub seconds: f32,
}

impl Message for DisplayMessageEvent {}

/// Clear whatever the message panel is showing.
#[derive(Debug)]
pub struct ClearMessageEvent;

impl Message for ClearMessageEvent {}

/// Flash the whole screen briefly (damage feedback).
#[derive(Debug)]
pub struct ScreenFlashEvent {
    pub color: Color,
    pub duration: f32,
}

impl Message for ScreenFlashEvent {}

/// Marker for the message panel text
#[derive(Component)]
pub struct MessageText;

/// Full-screen overlay that fades out over its lifetime
#[derive(Component)]
pub struct ScreenFlash {
    pub timer: f32,
    pub duration: f32,
    pub color: Color,
}

/// Remaining display time of a timed message; None while sticky or empty.
#[derive(Resource, Debug, Default)]
pub struct MessageTimer {
    pub remaining: Option<f32>,
}

pub(crate) fn spawn_message_panel(mut commands: Commands) {
    commands.spawn((
        MessageText,
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(48.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
    ));
}

pub(crate) fn update_message_panel(
    time: Res<Time>,
    mut display_events: MessageReader<DisplayMessageEvent>,
    mut clear_events: MessageReader<ClearMessageEvent>,
    mut timer: ResMut<MessageTimer>,
    mut text_query: Query<&mut Text, With<MessageText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    for event in display_events.read() {
        **text = event.text.clone();
        timer.remaining = (event.seconds > 0.0).then_some(event.seconds);
    }

    for _ in clear_events.read() {
        **text = String::new();
        timer.remaining = None;
    }

    if let Some(remaining) = &mut timer.remaining {
        *remaining -= time.delta_secs();
        if *remaining <= 0.0 {
            **text = String::new();
            timer.remaining = None;
        }
    }
}

pub(crate) fn handle_screen_flash(
    mut commands: Commands,
    mut flash_events: MessageReader<ScreenFlashEvent>,
) {
    for event in flash_events.read() {
        commands.spawn((
            ScreenFlash {
                timer: event.duration,
                duration: event.duration,
                color: event.color,
            },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(event.color),
            ZIndex(90),
        ));
    }
}

pub(crate) fn fade_screen_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut flash_query: Query<(Entity, &mut ScreenFlash, &mut BackgroundColor)>,
) {
    for (entity, mut flash, mut bg_color) in &mut flash_query {
        flash.timer -= time.delta_secs();
        if flash.timer <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let alpha = flash.color.alpha() * (flash.timer / flash.duration);
        bg_color.0 = flash.color.with_alpha(alpha);
    }
}
