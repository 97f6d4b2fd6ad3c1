//! Leaderboard and persistence integration tests.

use anyhow::{bail, Result};

use solitaire_engine::records::FixedClock;
use solitaire_engine::{Game, GameConfig, Leaderboard, MemoryStorage, ScoreRecord, Storage};

/// Storage that refuses every write and fails every read.
struct BrokenStorage;

impl Storage for BrokenStorage {
    fn save(&mut self, _key: &str, _data: &[u8]) -> Result<()> {
        bail!("disk full")
    }

    fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        bail!("disk unreadable")
    }
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// Test that only the best nine records are kept, highest first.
#[test]
fn test_keeps_top_nine() {
    let mut board = Leaderboard::new();
    for (i, points) in [300, 50, 700, 120, 900, 10, 450, 600, 80, 250, 1000, 5]
        .into_iter()
        .enumerate()
    {
        board.add(ScoreRecord::new(points, format!("{:04}", i)));
    }

    let points: Vec<i32> = board.items().iter().map(|r| r.points).collect();
    assert_eq!(points, vec![1000, 900, 700, 600, 450, 300, 250, 120, 80]);
    assert_eq!(board.best().map(|r| r.points), Some(1000));
}

/// Test that equal scores order the newer timestamp first.
#[test]
fn test_ties_break_on_timestamp() {
    let mut board = Leaderboard::new();
    board.add(ScoreRecord::new(400, "0001"));
    board.add(ScoreRecord::new(400, "0003"));
    board.add(ScoreRecord::new(400, "0002"));

    let stamps: Vec<&str> = board.items().iter().map(|r| r.timestamp.as_str()).collect();
    assert_eq!(stamps, vec!["0003", "0002", "0001"]);
}

/// Test that a record below a full board is dropped.
#[test]
fn test_low_score_not_kept() {
    let mut board = Leaderboard::new();
    for i in 0..Leaderboard::MAX_RECORDS {
        board.add(ScoreRecord::new(100 + i as i32, "0001"));
    }
    board.add(ScoreRecord::new(1, "0002"));

    assert_eq!(board.len(), Leaderboard::MAX_RECORDS);
    assert!(board.items().iter().all(|r| r.points >= 100));
}

// =============================================================================
// Persistence Tests
// =============================================================================

/// Test that a game loads records already in its storage.
#[test]
fn test_builder_loads_stored_records() {
    let mut stored = Leaderboard::new();
    stored.add(ScoreRecord::new(520, "0007"));
    stored.add(ScoreRecord::new(300, "0003"));

    let mut storage = MemoryStorage::new();
    stored.save(&mut storage).unwrap();
    assert!(storage.get(Leaderboard::KEY).is_some());

    let game = Game::builder(GameConfig::new())
        .with_storage(storage)
        .with_clock(FixedClock::new("0010"))
        .build();

    assert_eq!(game.leaderboard(), &stored);
}

/// Test that corrupted data is ignored without a panic.
#[test]
fn test_corrupted_storage_is_ignored() {
    let mut storage = MemoryStorage::new();
    storage.insert(Leaderboard::KEY, vec![0xFF, 0x01]);

    let game = Game::builder(GameConfig::new()).with_storage(storage).build();
    assert!(game.leaderboard().is_empty());

    let mut board = Leaderboard::new();
    board.add(ScoreRecord::new(10, "0001"));
    assert!(!board.load(game.storage()));
    assert_eq!(board.len(), 1, "a failed load keeps existing records");
}

/// Test that a failing backend surfaces as an error on save and is skipped on load.
#[test]
fn test_broken_storage() {
    let mut board = Leaderboard::new();
    board.add(ScoreRecord::new(10, "0001"));

    let err = board.save(&mut BrokenStorage).unwrap_err();
    assert_eq!(err.to_string(), "Failed to save leaderboard");
    assert!(format!("{:#}", err).contains("disk full"));

    assert!(!board.load(&BrokenStorage));

    let game = Game::builder(GameConfig::new())
        .with_storage(BrokenStorage)
        .build();
    assert!(game.leaderboard().is_empty());
}

/// Test that records survive a save and load through storage.
#[test]
fn test_save_then_load() {
    let mut board = Leaderboard::new();
    board.add(ScoreRecord::new(85, "0002"));
    board.add(ScoreRecord::new(140, "0005"));

    let mut storage = MemoryStorage::new();
    board.save(&mut storage).unwrap();

    let mut loaded = Leaderboard::new();
    assert!(loaded.load(&storage));
    assert_eq!(loaded, board);

    let empty = MemoryStorage::new();
    assert!(!Leaderboard::new().load(&empty), "nothing stored yet");
}
