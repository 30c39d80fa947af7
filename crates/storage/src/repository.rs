use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geoquiz_core::model::HighScore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the high score held in a named slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub slot: String,
    pub score: HighScore,
    pub updated_at: DateTime<Utc>,
}

impl HighScoreRecord {
    #[must_use]
    pub fn new(slot: impl Into<String>, score: HighScore, updated_at: DateTime<Utc>) -> Self {
        Self {
            slot: slot.into(),
            score,
            updated_at,
        }
    }
}

/// Repository contract for the persisted high score.
///
/// One slot stores one non-negative integer; saving overwrites.
#[async_trait]
pub trait HighScoreRepository: Send + Sync {
    /// Fetch the record stored in `slot`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the medium cannot be read or holds a malformed value.
    async fn load_high_score(&self, slot: &str) -> Result<Option<HighScoreRecord>, StorageError>;

    /// Overwrite the slot named by `record.slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_high_score(&self, record: &HighScoreRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository, used for tests and when no database is available.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    high_scores: Arc<Mutex<HashMap<String, HighScoreRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HighScoreRepository for InMemoryRepository {
    async fn load_high_score(&self, slot: &str) -> Result<Option<HighScoreRecord>, StorageError> {
        let guard = self
            .high_scores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(slot).cloned())
    }

    async fn save_high_score(&self, record: &HighScoreRecord) -> Result<(), StorageError> {
        let mut guard = self
            .high_scores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.slot.clone(), record.clone());
        Ok(())
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub high_scores: Arc<dyn HighScoreRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let high_scores: Arc<dyn HighScoreRepository> = Arc::new(InMemoryRepository::new());
        Self { high_scores }
    }
}
