//! UI domain: in-level HUD (health bar and counters).

use bevy::prelude::*;

use crate::movement::Player;
use crate::player::Health;
use crate::progress::{SavedProgress, SessionProgress};

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct HealthBarUI;

/// Marker for the health bar fill element
#[derive(Component)]
pub struct HealthBarFill;

/// Marker for the counters line (keys, collectibles, lives)
#[derive(Component)]
pub struct HudStatsText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    // Health bar at top-left
    commands
        .spawn((
            HealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                width: Val::Px(HEALTHBAR_WIDTH),
                height: Val::Px(HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });

    // Counters at top-right
    commands.spawn((
        HudStatsText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_healthbar(
    player_query: Query<&Health, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<HealthBarFill>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = health.percent();
        node.width = Val::Percent(percent * 100.0);

        // Color gradient: green -> yellow -> red
        let color = if percent > 0.5 {
            let t = (percent - 0.5) * 2.0;
            Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
        } else {
            let t = percent * 2.0;
            Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
        };
        bg_color.0 = color;
    }
}

pub(crate) fn update_stats_text(
    session: Res<SessionProgress>,
    saved: Res<SavedProgress>,
    mut text_query: Query<&mut Text, With<HudStatsText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    // Lives read from the saved store; it is the authority between saves
    **text = format!(
        "Keys: {}   Gems: {}   Relics: {}   Lives: {}",
        session.snapshot.keys,
        session.snapshot.small_collectibles,
        session.snapshot.large_collectibles,
        saved.snapshot.lives
    );
}
