use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use geoquiz_core::model::{CountChoice, Difficulty, QuizSettings, RoundSummary};
use geoquiz_core::{QuestionBank, ShuffleSource};

use super::service::QuizSession;
use crate::error::SessionError;
use crate::high_score_service::HighScoreService;

/// Orchestrates round start, progression and end-of-round high-score recording.
///
/// Each call to a `start_*` method hands out an independent `QuizSession`; the
/// bank, the shuffle generator and the high-score store are the only shared state.
#[derive(Clone)]
pub struct RoundLoopService {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
    rng: Arc<Mutex<StdRng>>,
    high_scores: Arc<HighScoreService>,
}

impl RoundLoopService {
    #[must_use]
    pub fn new(
        bank: Arc<QuestionBank>,
        settings: QuizSettings,
        shuffle: ShuffleSource,
        high_scores: Arc<HighScoreService>,
    ) -> Self {
        Self {
            bank,
            settings,
            rng: Arc::new(Mutex::new(shuffle.rng())),
            high_scores,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScoreService {
        &self.high_scores
    }

    /// Round sizes for `difficulty`, with those larger than its pool disabled.
    #[must_use]
    pub fn count_choices(&self, difficulty: Difficulty) -> Vec<CountChoice> {
        self.settings.count_choices(self.bank.pool_size(difficulty))
    }

    /// Start a new round, replacing whatever round the caller held before.
    pub fn start_round(&self, difficulty: Difficulty, requested: usize) -> QuizSession {
        let session = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            QuizSession::start(&self.bank, difficulty, requested, &mut *rng)
        };

        if session.is_unavailable() {
            warn!(target: "round", %difficulty, requested, "No questions available for this round");
        } else {
            debug!(
                target: "round",
                %difficulty,
                requested,
                total = session.total(),
                "Round started"
            );
        }
        session
    }

    /// Start a round with the configured default size.
    pub fn start_default_round(&self, difficulty: Difficulty) -> QuizSession {
        let requested = usize::try_from(self.settings.questions_per_round()).unwrap_or(usize::MAX);
        self.start_round(difficulty, requested)
    }

    /// New round with the same difficulty and requested size.
    pub fn play_again(&self, session: &QuizSession) -> QuizSession {
        self.start_round(session.difficulty(), session.requested())
    }

    /// New default-sized round on easy.
    pub fn reset_to_easy(&self) -> QuizSession {
        self.start_default_round(Difficulty::Easy)
    }

    /// Advance past the answered question; when that ends the round, record the
    /// score and return the summary.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session refuses to advance.
    pub async fn advance(
        &self,
        session: &mut QuizSession,
    ) -> Result<Option<RoundSummary>, SessionError> {
        session.try_advance()?;
        if session.is_round_over() {
            return self.finish_round(session).await.map(Some);
        }
        Ok(None)
    }

    /// Record a finished round against the high score. Calling it again returns
    /// the summary from the first call without recording twice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` for a zero-question round and
    /// `SessionError::RoundInProgress` if questions remain.
    pub async fn finish_round(
        &self,
        session: &mut QuizSession,
    ) -> Result<RoundSummary, SessionError> {
        if let Some(summary) = session.summary() {
            return Ok(summary.clone());
        }
        if session.is_unavailable() {
            return Err(SessionError::Unavailable);
        }
        if !session.is_round_over() {
            return Err(SessionError::RoundInProgress);
        }

        let update = self.high_scores.record_round(session.score()).await;
        let summary = RoundSummary::new(
            session.difficulty(),
            session.score(),
            session.total(),
            update,
        )?;
        info!(
            target: "round",
            difficulty = %summary.difficulty(),
            score = summary.score(),
            total = summary.total(),
            new_high_score = summary.is_new_high_score(),
            "Round complete"
        );
        session.set_summary(summary.clone());
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoquiz_core::model::HighScore;
    use geoquiz_core::time::{fixed_clock, fixed_now};
    use storage::repository::{HighScoreRecord, HighScoreRepository, InMemoryRepository};

    fn service_with(repo: InMemoryRepository) -> RoundLoopService {
        let high_scores = Arc::new(HighScoreService::new(
            "geoquiz_highscore",
            fixed_clock(),
            Arc::new(repo),
        ));
        RoundLoopService::new(
            Arc::new(QuestionBank::builtin()),
            QuizSettings::default(),
            ShuffleSource::seeded(17),
            high_scores,
        )
    }

    async fn play(
        svc: &RoundLoopService,
        session: &mut QuizSession,
        correct: bool,
    ) -> RoundSummary {
        loop {
            let question = session.current_question().unwrap();
            let pick = if correct {
                question.correct_index()
            } else {
                (question.correct_index() + 1) % question.options().len()
            };
            session.select_option(pick).unwrap();
            if let Some(summary) = svc.advance(session).await.unwrap() {
                return summary;
            }
        }
    }

    #[tokio::test]
    async fn perfect_easy_round_sets_high_score() {
        let repo = InMemoryRepository::new();
        let svc = service_with(repo.clone());
        svc.high_scores().load().await;

        let mut session = svc.start_round(Difficulty::Easy, 10);
        assert_eq!(session.total(), 5);

        let summary = play(&svc, &mut session, true).await;
        assert_eq!(summary.score(), 5);
        assert!(summary.is_new_high_score());
        assert_eq!(summary.high_score(), HighScore::new(5));

        let stored = repo.load_high_score("geoquiz_highscore").await.unwrap();
        assert_eq!(stored.map(|r| r.score), Some(HighScore::new(5)));
    }

    #[tokio::test]
    async fn unloaded_store_never_lowers_saved_high_score() {
        let repo = InMemoryRepository::new();
        repo.save_high_score(&HighScoreRecord::new(
            "geoquiz_highscore",
            HighScore::new(10),
            fixed_now(),
        ))
        .await
        .unwrap();
        let svc = service_with(repo.clone());

        let mut session = svc.start_round(Difficulty::Easy, 3);
        let summary = play(&svc, &mut session, true).await;
        assert_eq!(summary.score(), 3);
        assert!(!summary.is_new_high_score());
        assert_eq!(summary.high_score(), HighScore::new(10));

        let stored = repo.load_high_score("geoquiz_highscore").await.unwrap();
        assert_eq!(stored.map(|r| r.score), Some(HighScore::new(10)));
    }

    #[tokio::test]
    async fn finish_round_is_idempotent() {
        let svc = service_with(InMemoryRepository::new());
        let mut session = svc.start_round(Difficulty::Hard, 2);
        let first = play(&svc, &mut session, true).await;

        let again = svc.finish_round(&mut session).await.unwrap();
        assert_eq!(first, again);
        assert!(again.is_new_high_score());
        assert_eq!(svc.high_scores().current().await, HighScore::new(2));
    }

    #[tokio::test]
    async fn losing_round_keeps_high_score() {
        let svc = service_with(InMemoryRepository::new());
        svc.high_scores().save(HighScore::new(4)).await;

        let mut session = svc.start_round(Difficulty::Medium, 3);
        let summary = play(&svc, &mut session, false).await;
        assert_eq!(summary.score(), 0);
        assert!(!summary.is_new_high_score());
        assert_eq!(summary.high_score(), HighScore::new(4));
        assert_eq!(summary.headline(), "Round complete");
    }

    #[tokio::test]
    async fn finish_round_rejects_unfinished_rounds() {
        let svc = service_with(InMemoryRepository::new());
        let mut session = svc.start_round(Difficulty::Hard, 3);
        assert_eq!(
            svc.finish_round(&mut session).await.unwrap_err(),
            SessionError::RoundInProgress
        );
        assert_eq!(
            svc.advance(&mut session).await.unwrap_err(),
            SessionError::NotAnswered
        );
    }

    #[tokio::test]
    async fn empty_round_never_records() {
        let high_scores = Arc::new(HighScoreService::new(
            "slot",
            fixed_clock(),
            Arc::new(InMemoryRepository::new()),
        ));
        let svc = RoundLoopService::new(
            Arc::new(QuestionBank::new(Vec::new()).unwrap()),
            QuizSettings::default(),
            ShuffleSource::seeded(1),
            high_scores,
        );
        let mut session = svc.start_round(Difficulty::Easy, 10);
        assert!(session.is_round_over());
        assert_eq!(
            svc.finish_round(&mut session).await.unwrap_err(),
            SessionError::Unavailable
        );
    }

    #[test]
    fn default_rounds_and_restarts() {
        let svc = service_with(InMemoryRepository::new());

        let hard = svc.start_default_round(Difficulty::Hard);
        assert_eq!(hard.total(), 6);
        assert_eq!(hard.requested(), 10);

        let replay = svc.play_again(&hard);
        assert_eq!(replay.difficulty(), Difficulty::Hard);
        assert_eq!(replay.requested(), 10);
        assert_eq!(replay.current_index(), 0);

        let easy = svc.reset_to_easy();
        assert_eq!(easy.difficulty(), Difficulty::Easy);
        assert_eq!(easy.total(), 5);
    }

    #[test]
    fn count_choices_follow_pool_size() {
        let svc = service_with(InMemoryRepository::new());
        assert!(svc.count_choices(Difficulty::Easy).iter().all(|c| !c.enabled));
    }
}
