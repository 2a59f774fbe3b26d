//! UI domain: win and game-over screens.

use bevy::prelude::*;

/// Marker for either end-screen overlay
#[derive(Component)]
pub struct EndScreenUI;

pub(crate) fn spawn_win_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        "YOU MADE IT",
        Color::srgb(0.9, 0.8, 0.3),
        "The ridge is yours. Every shiny thing found its way home.",
    );
}

pub(crate) fn spawn_lose_screen(mut commands: Commands) {
    spawn_end_screen(
        &mut commands,
        "GAME OVER",
        Color::srgb(0.8, 0.15, 0.15),
        "Out of lives. The ridge keeps what you left behind.",
    );
}

pub(crate) fn despawn_end_screen(
    mut commands: Commands,
    query: Query<Entity, With<EndScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

fn spawn_end_screen(commands: &mut Commands, title: &str, title_color: Color, subtext: &str) {
    commands
        .spawn((
            EndScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtext),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Press [Enter] to start a new game"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
            ));
        });
}
