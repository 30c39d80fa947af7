use rand::Rng;
use rand::seq::SliceRandom;

use geoquiz_core::QuestionBank;
use geoquiz_core::model::{Difficulty, Question};

/// Selection result for a round build.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlan {
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub requested: usize,
    pub pool_size: usize,
}

impl RoundPlan {
    /// Number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// True when the pool had no questions for this difficulty (or zero were requested).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// True when fewer questions were selected than requested.
    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.requested > self.questions.len()
    }
}

/// Picks the questions of a round from the bank.
pub struct RoundBuilder<'a> {
    bank: &'a QuestionBank,
}

impl<'a> RoundBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Build a round plan.
    ///
    /// - the bank is filtered to `difficulty`
    /// - the pool is shuffled uniformly (Fisher–Yates via `SliceRandom`)
    /// - the first `min(requested, pool size)` questions are kept
    ///
    /// Questions never repeat within a plan since each pool entry appears once.
    pub fn build<R: Rng + ?Sized>(
        self,
        difficulty: Difficulty,
        requested: usize,
        rng: &mut R,
    ) -> RoundPlan {
        let mut pool: Vec<Question> = self
            .bank
            .by_difficulty(difficulty)
            .into_iter()
            .cloned()
            .collect();
        let pool_size = pool.len();

        pool.shuffle(rng);
        pool.truncate(requested.min(pool_size));

        RoundPlan {
            difficulty,
            questions: pool,
            requested,
            pool_size,
        }
    }
}
