//! Player domain: tests for health clamping and hit resolution.

use super::components::{DeathState, Health, Invulnerable};
use super::systems::resolve_hit;

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_add_health_clamps_at_max() {
    let mut health = Health::new(8, 10);
    let applied = health.add(5);
    assert_eq!(health.current, 10);
    assert_eq!(applied, 2);
}

#[test]
fn test_new_health_cannot_start_above_max() {
    let health = Health::new(15, 10);
    assert_eq!(health.current, 10);
}

#[test]
fn test_percent_clamps_negative_health_to_zero() {
    let mut health = Health::new(1, 10);
    health.current = -4;
    assert_eq!(health.percent(), 0.0);
    assert!(health.is_depleted());
}

// -----------------------------------------------------------------------------
// Hit resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_hit_while_invulnerable_changes_nothing() {
    let mut health = Health::new(10, 10);
    let mut invulnerable = Invulnerable { timer: 0.2 };
    let mut death = DeathState::default();

    let outcome = resolve_hit(&mut health, &mut invulnerable, &mut death, 5, 0.2);

    assert!(!outcome.applied);
    assert!(!outcome.life_lost);
    assert_eq!(health.current, 10);
    assert!(!death.is_dead);
}

#[test]
fn test_hit_opens_invulnerability_window() {
    let mut health = Health::new(10, 10);
    let mut invulnerable = Invulnerable::default();
    let mut death = DeathState::default();

    let outcome = resolve_hit(&mut health, &mut invulnerable, &mut death, 3, 0.2);

    assert!(outcome.applied);
    assert!(!outcome.life_lost);
    assert_eq!(health.current, 7);
    assert!(invulnerable.is_invulnerable());
}

#[test]
fn test_lethal_hit_goes_negative_and_loses_exactly_one_life() {
    // health=1, max=10, hit for 5 while vulnerable
    let mut health = Health::new(1, 10);
    let mut invulnerable = Invulnerable::default();
    let mut death = DeathState::default();

    let first = resolve_hit(&mut health, &mut invulnerable, &mut death, 5, 0.2);

    assert!(first.applied);
    assert!(first.life_lost);
    assert_eq!(health.current, -4);
    assert!(health.is_depleted());
    assert!(death.is_dead);
    assert!(invulnerable.is_invulnerable());

    // A second hit lands before the window expires: nothing happens
    let second = resolve_hit(&mut health, &mut invulnerable, &mut death, 5, 0.2);
    assert!(!second.applied);
    assert!(!second.life_lost);
    assert_eq!(health.current, -4);
}

#[test]
fn test_hit_at_depleted_health_after_window_does_not_double_kill() {
    let mut health = Health::new(1, 10);
    let mut invulnerable = Invulnerable::default();
    let mut death = DeathState::default();

    resolve_hit(&mut health, &mut invulnerable, &mut death, 5, 0.2);

    // Window expired but the player is still down waiting for respawn
    invulnerable.timer = 0.0;
    let late = resolve_hit(&mut health, &mut invulnerable, &mut death, 2, 0.2);

    assert!(late.applied);
    assert!(!late.life_lost);
    assert!(death.is_dead);
}
