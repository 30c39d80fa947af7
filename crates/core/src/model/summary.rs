use thiserror::Error;

use crate::model::{Difficulty, HighScore, HighScoreUpdate};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundSummaryError {
    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: usize },
}

/// End-of-round result shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    difficulty: Difficulty,
    score: u32,
    total: usize,
    high_score: HighScore,
    new_high_score: bool,
}

impl RoundSummary {
    /// # Errors
    ///
    /// Returns `RoundSummaryError::ScoreExceedsTotal` if the score is larger than the round.
    pub fn new(
        difficulty: Difficulty,
        score: u32,
        total: usize,
        update: HighScoreUpdate,
    ) -> Result<Self, RoundSummaryError> {
        if usize::try_from(score).map_or(true, |s| s > total) {
            return Err(RoundSummaryError::ScoreExceedsTotal { score, total });
        }
        Ok(Self {
            difficulty,
            score,
            total,
            high_score: update.high_score,
            new_high_score: update.updated,
        })
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    #[must_use]
    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.new_high_score {
            "New high score!"
        } else {
            "Round complete"
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        if self.new_high_score {
            format!("You scored {} points.", self.score)
        } else {
            format!("Your score: {}/{}", self.score, self.total)
        }
    }
}
