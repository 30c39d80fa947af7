use chrono::Duration;
use geoquiz_core::model::HighScore;
use geoquiz_core::time::fixed_now;
use storage::repository::{HighScoreRecord, HighScoreRepository, Storage};
use storage::sqlite::SqliteRepository;

const SLOT: &str = "geoquiz_highscore";

#[tokio::test]
async fn sqlite_missing_slot_is_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_missing?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load_high_score(SLOT).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_roundtrip_overwrites_slot() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let first = HighScoreRecord::new(SLOT, HighScore::new(4), fixed_now());
    repo.save_high_score(&first).await.unwrap();

    let later = fixed_now() + Duration::minutes(5);
    let second = HighScoreRecord::new(SLOT, HighScore::new(9), later);
    repo.save_high_score(&second).await.unwrap();
    // Same write twice leaves the same state.
    repo.save_high_score(&second).await.unwrap();

    let stored = repo.load_high_score(SLOT).await.unwrap().expect("stored");
    assert_eq!(stored.score, HighScore::new(9));
    assert_eq!(stored.updated_at, later);
    assert_eq!(stored.slot, SLOT);
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.save_high_score(&HighScoreRecord::new(SLOT, HighScore::new(2), fixed_now()))
        .await
        .unwrap();
    repo.migrate().await.expect("second migrate");

    let stored = repo.load_high_score(SLOT).await.unwrap();
    assert_eq!(stored.map(|r| r.score), Some(HighScore::new(2)));
}

#[tokio::test]
async fn storage_sqlite_builds_migrated_backend() {
    let storage = Storage::sqlite("sqlite::memory:").await.expect("storage");
    storage
        .high_scores
        .save_high_score(&HighScoreRecord::new(SLOT, HighScore::new(5), fixed_now()))
        .await
        .unwrap();
    let loaded = storage.high_scores.load_high_score(SLOT).await.unwrap();
    assert_eq!(loaded.map(|r| r.score), Some(HighScore::new(5)));
}
