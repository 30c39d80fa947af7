//! High-score store with graceful degradation.
//!
//! The store caches the current high score and writes through to a
//! `HighScoreRepository`. If the repository fails (on load or save) the store
//! keeps working in memory for the rest of the process and never surfaces the
//! failure to the round.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use geoquiz_core::model::{HighScore, HighScoreUpdate};
use storage::repository::{HighScoreRecord, HighScoreRepository};

use crate::Clock;

#[derive(Debug, Clone, Copy)]
struct HighScoreState {
    current: HighScore,
    persistent: bool,
    loaded: bool,
}

pub struct HighScoreService {
    slot: String,
    clock: Clock,
    repo: Arc<dyn HighScoreRepository>,
    state: Mutex<HighScoreState>,
}

impl HighScoreService {
    #[must_use]
    pub fn new(slot: impl Into<String>, clock: Clock, repo: Arc<dyn HighScoreRepository>) -> Self {
        Self {
            slot: slot.into(),
            clock,
            repo,
            state: Mutex::new(HighScoreState {
                current: HighScore::default(),
                persistent: true,
                loaded: false,
            }),
        }
    }

    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Read the persisted high score.
    ///
    /// An absent slot reads as 0. A storage failure also reads as the cached
    /// value (0 at startup) and switches the store to memory-only.
    pub async fn load(&self) -> HighScore {
        let mut state = self.state.lock().await;
        self.refresh(&mut state).await;
        state.current
    }

    async fn ensure_loaded(&self, state: &mut HighScoreState) {
        if !state.loaded {
            self.refresh(state).await;
        }
    }

    async fn refresh(&self, state: &mut HighScoreState) {
        state.loaded = true;
        if !state.persistent {
            return;
        }

        match self.repo.load_high_score(&self.slot).await {
            Ok(Some(record)) => {
                state.current = state.current.max(record.score);
                debug!(
                    target: "high_score",
                    slot = %self.slot,
                    score = %record.score,
                    "Loaded high score"
                );
            }
            Ok(None) => {
                debug!(
                    target: "high_score",
                    slot = %self.slot,
                    "No stored high score; starting at 0"
                );
            }
            Err(err) => {
                state.persistent = false;
                warn!(
                    target: "high_score",
                    slot = %self.slot,
                    error = %err,
                    "High score storage unavailable; keeping it in memory"
                );
            }
        }
    }

    /// The high score as currently known to this process; reads storage first
    /// if nothing was loaded yet.
    pub async fn current(&self) -> HighScore {
        let mut state = self.state.lock().await;
        self.ensure_loaded(&mut state).await;
        state.current
    }

    /// False once a storage failure forced the memory-only fallback.
    pub async fn is_persistent(&self) -> bool {
        self.state.lock().await.persistent
    }

    /// Overwrite the stored high score with `value`.
    ///
    /// Saving the same value twice leaves the same state. No merging happens:
    /// callers decide with [`HighScore::record_if_higher`] first.
    pub async fn save(&self, value: HighScore) {
        let mut state = self.state.lock().await;
        self.write(&mut state, value).await;
    }

    /// Offer a finished round's score; persists it when it beats the high score.
    ///
    /// The stored value is read first if it was never loaded, so a record is
    /// never compared against a stale zero.
    pub async fn record_round(&self, score: u32) -> HighScoreUpdate {
        let mut state = self.state.lock().await;
        self.ensure_loaded(&mut state).await;
        let update = state.current.record_if_higher(score);
        if update.updated {
            self.write(&mut state, update.high_score).await;
            info!(target: "high_score", slot = %self.slot, score, "New high score");
        }
        update
    }

    async fn write(&self, state: &mut HighScoreState, value: HighScore) {
        state.current = value;
        state.loaded = true;
        if !state.persistent {
            return;
        }

        let record = HighScoreRecord::new(self.slot.as_str(), value, self.clock.now());
        match self.repo.save_high_score(&record).await {
            Ok(()) => {
                debug!(target: "high_score", slot = %self.slot, score = %value, "Saved high score");
            }
            Err(err) => {
                state.persistent = false;
                warn!(
                    target: "high_score",
                    slot = %self.slot,
                    error = %err,
                    "Failed to save high score; keeping it in memory"
                );
            }
        }
    }
}

impl std::fmt::Debug for HighScoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScoreService")
            .field("slot", &self.slot)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use geoquiz_core::time::{fixed_clock, fixed_now};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use storage::repository::{InMemoryRepository, StorageError};

    const SLOT: &str = "geoquiz_highscore";

    /// Storage that is never reachable.
    struct OfflineRepository {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl HighScoreRepository for OfflineRepository {
        async fn load_high_score(
            &self,
            _slot: &str,
        ) -> Result<Option<HighScoreRecord>, StorageError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Connection("offline".into()))
        }

        async fn save_high_score(&self, _record: &HighScoreRecord) -> Result<(), StorageError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StorageError::Connection("offline".into()))
        }
    }

    fn service(repo: Arc<dyn HighScoreRepository>) -> HighScoreService {
        HighScoreService::new(SLOT, fixed_clock(), repo)
    }

    #[tokio::test]
    async fn absent_slot_loads_zero() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        assert_eq!(svc.load().await, HighScore::new(0));
        assert!(svc.is_persistent().await);
    }

    #[tokio::test]
    async fn loads_stored_value() {
        let repo = InMemoryRepository::new();
        repo.save_high_score(&HighScoreRecord::new(SLOT, HighScore::new(4), fixed_now()))
            .await
            .unwrap();
        let svc = service(Arc::new(repo));
        assert_eq!(svc.load().await, HighScore::new(4));
        assert_eq!(svc.current().await, HighScore::new(4));
    }

    #[tokio::test]
    async fn record_round_persists_only_new_records() {
        let repo = InMemoryRepository::new();
        let svc = service(Arc::new(repo.clone()));
        svc.load().await;

        let first = svc.record_round(3).await;
        assert!(first.updated);
        let stored = repo.load_high_score(SLOT).await.unwrap().unwrap();
        assert_eq!(stored.score, HighScore::new(3));
        assert_eq!(stored.updated_at, fixed_now());

        let tie = svc.record_round(3).await;
        assert!(!tie.updated);
        let lower = svc.record_round(1).await;
        assert_eq!(lower.high_score, HighScore::new(3));
        assert!(!lower.updated);
        assert_eq!(
            repo.load_high_score(SLOT).await.unwrap().unwrap().score,
            HighScore::new(3)
        );
    }

    #[tokio::test]
    async fn record_round_reads_stored_score_before_comparing() {
        let repo = InMemoryRepository::new();
        repo.save_high_score(&HighScoreRecord::new(SLOT, HighScore::new(10), fixed_now()))
            .await
            .unwrap();
        let svc = service(Arc::new(repo.clone()));

        let update = svc.record_round(3).await;
        assert!(!update.updated);
        assert_eq!(update.high_score, HighScore::new(10));
        assert_eq!(
            repo.load_high_score(SLOT).await.unwrap().unwrap().score,
            HighScore::new(10)
        );
        assert_eq!(svc.current().await, HighScore::new(10));
    }

    #[tokio::test]
    async fn current_reads_stored_score_without_load() {
        let repo = InMemoryRepository::new();
        repo.save_high_score(&HighScoreRecord::new(SLOT, HighScore::new(6), fixed_now()))
            .await
            .unwrap();
        let svc = service(Arc::new(repo));
        assert_eq!(svc.current().await, HighScore::new(6));
    }

    #[tokio::test]
    async fn save_overwrites() {
        let repo = InMemoryRepository::new();
        let svc = service(Arc::new(repo.clone()));
        svc.save(HighScore::new(8)).await;
        svc.save(HighScore::new(8)).await;
        assert_eq!(
            repo.load_high_score(SLOT).await.unwrap().unwrap().score,
            HighScore::new(8)
        );
        assert_eq!(svc.current().await, HighScore::new(8));
    }

    #[tokio::test]
    async fn unavailable_storage_degrades_to_memory() {
        let repo = Arc::new(OfflineRepository {
            attempts: AtomicUsize::new(0),
        });
        let svc = service(repo.clone());

        assert_eq!(svc.load().await, HighScore::new(0));
        assert!(!svc.is_persistent().await);

        let update = svc.record_round(2).await;
        assert!(update.updated);
        assert_eq!(svc.current().await, HighScore::new(2));
        assert_eq!(svc.load().await, HighScore::new(2));

        // Storage is not touched again after the first failure.
        assert_eq!(repo.attempts.load(Ordering::SeqCst), 1);
    }
}
