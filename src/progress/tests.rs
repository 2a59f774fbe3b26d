//! Progress domain: tests for identity, list banking, and the two-tier
//! save flow.

use bevy::prelude::*;

use super::{CollectedLists, CollectibleId, SavedProgress, SessionProgress};

// -----------------------------------------------------------------------------
// CollectibleId tests
// -----------------------------------------------------------------------------

#[test]
fn test_identity_is_deterministic() {
    let position = Vec3::new(123.4, -56.7, 1.0);
    assert_eq!(
        CollectibleId::from_position(position),
        CollectibleId::from_position(position)
    );
}

#[test]
fn test_identity_differs_across_grid_cells() {
    let a = CollectibleId::from_position(Vec3::new(100.0, 50.0, 0.0));
    let b = CollectibleId::from_position(Vec3::new(100.5, 50.0, 0.0));
    let c = CollectibleId::from_position(Vec3::new(100.0, 50.5, 0.0));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn test_identity_negative_coordinates() {
    let a = CollectibleId::from_position(Vec3::new(-100.0, -50.0, 0.0));
    let b = CollectibleId::from_position(Vec3::new(100.0, 50.0, 0.0));
    assert_ne!(a, b);
}

// -----------------------------------------------------------------------------
// CollectedLists tests
// -----------------------------------------------------------------------------

#[test]
fn test_get_or_create_is_idempotent() {
    let mut lists = CollectedLists::default();
    lists.get_or_create(3);
    lists.get_or_create(3);
    assert_eq!(lists.lists.len(), 1);
    assert_eq!(lists.lists[0].level_id, 3);
}

#[test]
fn test_record_does_not_deduplicate() {
    let mut lists = CollectedLists::default();
    let id = CollectibleId(42);
    lists.record(1, id);
    lists.record(1, id);

    // Two entries, but membership is what consumers check
    assert_eq!(lists.get(1).map(|l| l.items.len()), Some(2));
    assert!(lists.contains(1, id));
}

#[test]
fn test_contains_on_missing_level_is_false() {
    let lists = CollectedLists::default();
    assert!(!lists.contains(9, CollectibleId(1)));
    assert!(lists.get(9).is_none());
}

#[test]
fn test_take_items_empties_but_keeps_list_usable() {
    let mut lists = CollectedLists::default();
    lists.record(1, CollectibleId(1));
    lists.record(1, CollectibleId(2));

    let taken = lists.take_items(1);
    assert_eq!(taken.len(), 2);
    assert_eq!(lists.get(1).map(|l| l.items.len()), Some(0));

    // Records after a drain land in a fresh batch
    lists.record(1, CollectibleId(3));
    assert!(lists.contains(1, CollectibleId(3)));
    assert!(!lists.contains(1, CollectibleId(1)));
}

#[test]
fn test_take_items_on_untouched_level_is_empty() {
    let mut lists = CollectedLists::default();
    assert!(lists.take_items(7).is_empty());
}

// -----------------------------------------------------------------------------
// Save / load flow tests
// -----------------------------------------------------------------------------

#[test]
fn test_save_banks_every_recorded_pickup() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    session.record_pickup(1, CollectibleId(10));
    session.record_pickup(1, CollectibleId(11));
    session.record_pickup(2, CollectibleId(12)); // other level stays pending

    saved.save(&mut session, 1);

    assert!(saved.is_collected(1, CollectibleId(10)));
    assert!(saved.is_collected(1, CollectibleId(11)));
    assert!(!saved.is_collected(1, CollectibleId(12)));
    assert_eq!(session.unsaved.get(1).map(|l| l.items.len()), Some(0));
    assert!(session.unsaved.contains(2, CollectibleId(12)));
}

#[test]
fn test_save_with_nothing_pending_is_a_no_op_on_lists() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    session.record_pickup(1, CollectibleId(10));
    saved.save(&mut session, 1);
    let banked_before = saved.saved_list(1).map(|l| l.items.clone());

    saved.save(&mut session, 1);
    let banked_after = saved.saved_list(1).map(|l| l.items.clone());
    assert_eq!(banked_before, banked_after);
}

#[test]
fn test_successive_saves_accumulate() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    session.record_pickup(1, CollectibleId(1));
    saved.save(&mut session, 1);
    session.record_pickup(1, CollectibleId(2));
    saved.save(&mut session, 1);

    assert!(saved.is_collected(1, CollectibleId(1)));
    assert!(saved.is_collected(1, CollectibleId(2)));
}

#[test]
fn test_load_restores_snapshot() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    session.snapshot.level_id = 1;
    session.snapshot.keys = 2;
    session.snapshot.small_collectibles = 5;
    session.snapshot.player_start = Vec3::new(10.0, 20.0, 0.0);
    saved.save(&mut session, 1);

    // Death before a checkpoint: the session drifts, then reloads
    session.snapshot.keys = 9;
    session.snapshot.small_collectibles = 99;
    saved.load(&mut session);

    assert_eq!(session.snapshot.keys, 2);
    assert_eq!(session.snapshot.small_collectibles, 5);
    assert_eq!(session.snapshot.player_start, Vec3::new(10.0, 20.0, 0.0));
}

#[test]
fn test_pending_pickups_are_lost_on_reload_without_save() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    saved.ensure_level_list(1);
    session.record_pickup(1, CollectibleId(77));

    // Reload without a save: a fresh session list, nothing banked
    let mut fresh = SessionProgress::default();
    saved.load(&mut fresh);

    assert!(!saved.is_collected(1, CollectibleId(77)));
    assert!(!fresh.unsaved.contains(1, CollectibleId(77)));
}

#[test]
fn test_saved_list_missing_level_is_none() {
    let saved = SavedProgress::default();
    assert!(saved.saved_list(5).is_none());
}

#[test]
fn test_ensure_level_list_is_idempotent() {
    let mut saved = SavedProgress::default();
    saved.ensure_level_list(4);
    saved.ensure_level_list(4);
    assert_eq!(saved.saved.lists.len(), 1);
    assert!(saved.saved_list(4).is_some());
}

// -----------------------------------------------------------------------------
// Lives tests
// -----------------------------------------------------------------------------

#[test]
fn test_add_lives_clamps_at_max() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    saved.set_lives(&mut session, 3);
    saved.add_lives(&mut session, 5, 3);
    assert_eq!(saved.snapshot.lives, 3);
    assert_eq!(session.snapshot.lives, 3);
}

#[test]
fn test_lose_lives_survives_a_save() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    saved.set_lives(&mut session, 3);
    saved.save(&mut session, 1);
    saved.lose_lives(&mut session, 1);

    // A later save must not resurrect the lost life
    saved.save(&mut session, 1);
    assert_eq!(saved.snapshot.lives, 2);
}

// -----------------------------------------------------------------------------
// New game tests
// -----------------------------------------------------------------------------

#[test]
fn test_new_game_clears_current_level_only() {
    let mut saved = SavedProgress::default();
    let mut session = SessionProgress::default();

    session.record_pickup(1, CollectibleId(1));
    saved.save(&mut session, 1);
    session.record_pickup(2, CollectibleId(2));
    saved.save(&mut session, 2);
    saved.is_new_game = false;
    saved.checkpoint_index = Some(1);

    saved.new_game(1);

    assert!(saved.is_new_game);
    assert!(saved.checkpoint_index.is_none());
    assert!(!saved.is_collected(1, CollectibleId(1)));
    assert!(saved.is_collected(2, CollectibleId(2)));
}

#[test]
fn test_fresh_store_starts_as_new_game() {
    let saved = SavedProgress::default();
    assert!(saved.is_new_game);
    assert!(saved.checkpoint_index.is_none());
}

#[test]
fn test_initialize_new_player_zeroes_counters() {
    let mut session = SessionProgress::default();
    session.snapshot.keys = 3;
    session.snapshot.small_collectibles = 7;
    session.snapshot.large_collectibles = 2;

    session.initialize_new_player(1, Vec3::new(-5.0, 0.0, 0.0), Vec3::ZERO);

    assert_eq!(session.snapshot.keys, 0);
    assert_eq!(session.snapshot.small_collectibles, 0);
    assert_eq!(session.snapshot.large_collectibles, 0);
    assert_eq!(session.snapshot.level_id, 1);
    assert_eq!(session.snapshot.player_start, Vec3::new(-5.0, 0.0, 0.0));
}
