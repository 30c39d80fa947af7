use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{HighScoreRecord, HighScoreRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{high_score_from_i64, high_score_to_i64, ser};

#[async_trait]
impl HighScoreRepository for SqliteRepository {
    async fn load_high_score(&self, slot: &str) -> Result<Option<HighScoreRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT slot, score, updated_at
            FROM high_scores
            WHERE slot = ?1
            ",
        )
        .bind(slot)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let slot: String = row.try_get("slot").map_err(ser)?;
        let score: i64 = row.try_get("score").map_err(ser)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(ser)?;

        Ok(Some(HighScoreRecord {
            slot,
            score: high_score_from_i64(score)?,
            updated_at,
        }))
    }

    async fn save_high_score(&self, record: &HighScoreRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO high_scores (slot, score, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(slot) DO UPDATE SET
                score = excluded.score,
                updated_at = excluded.updated_at
            ",
        )
        .bind(record.slot.as_str())
        .bind(high_score_to_i64(record.score))
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
