//! Content domain: tests for parsing and validation.

use ron::Options;

use super::data::{DataFile, GameplayConfig, LevelDef};
use super::library::LevelLibrary;
use super::validation::validate_content;

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_gameplay_config() {
    let source = r#"(
        max_health: 12,
        starting_health: 10,
        hit_invulnerable_time: 0.25,
        max_lives: 5,
        starting_lives: 3,
        infinite_lives: true,
        respawn_time: 1.5,
        pitch_low: 0.9,
        pitch_high: 1.1,
    )"#;

    let config: GameplayConfig = ron_options().from_str(source).unwrap();
    assert_eq!(config.max_health, 12);
    assert!(config.infinite_lives);
}

#[test]
fn test_parse_level_data_file() {
    let source = r#"(
        schema_version: 1,
        items: [
            (
                id: 7,
                name: "Test Ridge",
                player_start: (-10.0, 0.0),
                camera_start: (0.0, 40.0),
                platforms: [
                    (pos: (0.0, -100.0), size: (400.0, 40.0)),
                ],
                checkpoints: [(50.0, -70.0)],
                collectibles: [
                    (kind: Small, pos: (0.0, -60.0), persist: true, id: None),
                    (kind: Key, pos: (30.0, -60.0), persist: true, id: Some(9)),
                ],
                powerups: [
                    (kind: ExtraLife(lives: 1), pos: (60.0, -60.0)),
                ],
                doors: [
                    (pos: (100.0, -70.0), size: (20.0, 60.0), id: Some(10)),
                ],
                hazards: [
                    (
                        kind: Damage(damage: 1, push_back: 300.0, stun_time: 0.2, frequency: 0.5),
                        pos: (-50.0, -90.0),
                        size: (40.0, 20.0),
                    ),
                    (kind: Kill(kill_enemies: true), pos: (0.0, -300.0), size: (400.0, 20.0)),
                ],
                roamers: [
                    (pos: (80.0, -80.0), range: 60.0, speed: 50.0, damage: 1, push_back: 300.0, stun_time: 0.2),
                ],
                text_volumes: [
                    (pos: (-10.0, -70.0), size: (60.0, 60.0), text: "hi", seconds: 0.0),
                ],
                teleporters: [],
                win_zone: Some((pos: (180.0, -70.0), size: (30.0, 80.0))),
            ),
        ],
    )"#;

    let data: DataFile<LevelDef> = ron_options().from_str(source).unwrap();
    assert_eq!(data.items.len(), 1);

    let level = &data.items[0];
    assert_eq!(level.id, 7);
    assert_eq!(level.collectibles.len(), 2);
    assert_eq!(level.collectibles[1].id, Some(9));
    assert!(level.win_zone.is_some());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_fallback_level_passes_validation() {
    let mut library = LevelLibrary::default();
    let fallback = LevelDef::fallback();
    library.levels.insert(fallback.id, fallback);

    assert!(validate_content(&library).is_empty());
}

#[test]
fn test_duplicate_explicit_identity_is_flagged() {
    let mut library = LevelLibrary::default();
    let mut level = LevelDef::fallback();
    level.collectibles[0].id = Some(42);
    level.collectibles[1].id = Some(42);
    library.levels.insert(level.id, level);

    let errors = validate_content(&library);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("duplicate"));
}

#[test]
fn test_teleporter_to_missing_level_is_flagged() {
    let mut library = LevelLibrary::default();
    let mut level = LevelDef::fallback();
    level.teleporters.push(crate::content::TeleporterDef {
        pos: (0.0, 0.0),
        size: (20.0, 40.0),
        target_level: 99,
    });
    library.levels.insert(level.id, level);

    let errors = validate_content(&library);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("missing level 99"));
}
