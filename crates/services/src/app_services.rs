use std::sync::Arc;

use tracing::{info, warn};

use geoquiz_core::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::config::{QuizConfig, prepare_sqlite_file};
use crate::error::AppServicesError;
use crate::high_score_service::HighScoreService;
use crate::sessions::RoundLoopService;

/// Assembles the round workflow and the high-score store over one storage backend.
#[derive(Clone)]
pub struct QuizServices {
    rounds: Arc<RoundLoopService>,
    high_scores: Arc<HighScoreService>,
}

impl QuizServices {
    /// Build services backed by `SQLite`, falling back to memory if the database
    /// cannot be opened. The high score is loaded once here.
    pub async fn from_config(config: &QuizConfig, clock: Clock) -> Self {
        let storage = match open_sqlite(&config.db_url).await {
            Ok(storage) => storage,
            Err(err) => {
                warn!(
                    target: "high_score",
                    db_url = %config.db_url,
                    error = %err,
                    "Database unavailable; high score will not survive restarts"
                );
                Storage::in_memory()
            }
        };
        Self::with_storage(config, clock, storage, QuestionBank::builtin()).await
    }

    /// Build services with in-memory storage only.
    pub async fn in_memory(config: &QuizConfig, clock: Clock) -> Self {
        Self::with_storage(config, clock, Storage::in_memory(), QuestionBank::builtin()).await
    }

    /// Build services over explicit storage and bank.
    pub async fn with_storage(
        config: &QuizConfig,
        clock: Clock,
        storage: Storage,
        bank: QuestionBank,
    ) -> Self {
        let high_scores = Arc::new(HighScoreService::new(
            config.high_score_slot.as_str(),
            clock,
            Arc::clone(&storage.high_scores),
        ));
        let loaded = high_scores.load().await;
        info!(
            target: "high_score",
            slot = %config.high_score_slot,
            high_score = %loaded,
            questions = bank.len(),
            "Quiz services ready"
        );

        let rounds = Arc::new(RoundLoopService::new(
            Arc::new(bank),
            config.settings.clone(),
            config.shuffle,
            Arc::clone(&high_scores),
        ));

        Self {
            rounds,
            high_scores,
        }
    }

    #[must_use]
    pub fn rounds(&self) -> Arc<RoundLoopService> {
        Arc::clone(&self.rounds)
    }

    #[must_use]
    pub fn high_scores(&self) -> Arc<HighScoreService> {
        Arc::clone(&self.high_scores)
    }
}

async fn open_sqlite(db_url: &str) -> Result<Storage, AppServicesError> {
    prepare_sqlite_file(db_url)?;
    Ok(Storage::sqlite(db_url).await?)
}
