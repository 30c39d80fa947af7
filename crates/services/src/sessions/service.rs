use rand::Rng;
use std::fmt;

use geoquiz_core::QuestionBank;
use geoquiz_core::model::{Difficulty, Question, QuestionId, RoundSummary};

use super::plan::{RoundBuilder, RoundPlan};
use super::progress::RoundProgress;
use super::view::AnswerFeedback;
use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Captures the outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question_id: QuestionId,
    pub selected: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub score: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One round of the quiz.
///
/// Steps through its questions in order. Each question accepts exactly one
/// selection, and the round only moves forward once the current question is
/// answered. The round is over once `current_index` reaches the question count;
/// that is derived, never stored.
///
/// Commands come in two flavours: `try_*` returns a `SessionError` when called
/// out of sequence, while the plain form treats that as a no-op.
pub struct QuizSession {
    difficulty: Difficulty,
    requested: usize,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    selected: Option<usize>,
    summary: Option<RoundSummary>,
}

impl QuizSession {
    /// Create a round from an already built plan.
    #[must_use]
    pub fn new(plan: RoundPlan) -> Self {
        Self {
            difficulty: plan.difficulty,
            requested: plan.requested,
            questions: plan.questions,
            current: 0,
            score: 0,
            selected: None,
            summary: None,
        }
    }

    /// Start a fresh round: filter, shuffle and truncate the pool for `difficulty`.
    ///
    /// An empty pool yields a round with zero questions, which is over from the
    /// start and should be presented as unavailable.
    pub fn start<R: Rng + ?Sized>(
        bank: &QuestionBank,
        difficulty: Difficulty,
        requested: usize,
        rng: &mut R,
    ) -> Self {
        Self::new(RoundBuilder::new(bank).build(difficulty, requested, rng))
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Round size the player asked for, before clamping to the pool.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based position of the current question, for display.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.total())
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// A round with zero questions: nothing to answer.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.questions.is_empty()
    }

    /// True while the final question is on screen.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.is_round_over() && self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        let answered = self.current + usize::from(self.answered());
        RoundProgress {
            total: self.total(),
            answered: answered.min(self.total()),
            remaining: self.total().saturating_sub(self.current),
            is_over: self.is_round_over(),
        }
    }

    /// Feedback for the answered current question.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback<'_>> {
        let selected = self.selected?;
        let question = self.current_question()?;
        Some(AnswerFeedback::new(question, selected))
    }

    /// Record a selection for the current question.
    ///
    /// `option` is not range-checked: an index outside the options is never the
    /// correct one and scores as wrong.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` for a zero-question round,
    /// `SessionError::RoundOver` once every question was shown, and
    /// `SessionError::AlreadyAnswered` if the current question has a selection.
    pub fn try_select_option(&mut self, option: usize) -> Result<AnswerOutcome, SessionError> {
        if self.is_unavailable() {
            return Err(SessionError::Unavailable);
        }
        if self.answered() {
            return Err(SessionError::AlreadyAnswered);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::RoundOver);
        };

        let is_correct = question.is_correct(option);
        let outcome_id = question.id().clone();
        let correct_index = question.correct_index();

        self.selected = Some(option);
        if is_correct {
            self.score = self.score.saturating_add(1);
        }

        Ok(AnswerOutcome {
            question_id: outcome_id,
            selected: option,
            correct_index,
            is_correct,
            score: self.score,
        })
    }

    /// Lenient form of [`QuizSession::try_select_option`]: out-of-sequence calls return `None`.
    pub fn select_option(&mut self, option: usize) -> Option<AnswerOutcome> {
        self.try_select_option(option).ok()
    }

    /// Move past the answered current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unavailable` for a zero-question round,
    /// `SessionError::RoundOver` once every question was shown, and
    /// `SessionError::NotAnswered` if the current question has no selection yet.
    pub fn try_advance(&mut self) -> Result<(), SessionError> {
        if self.is_unavailable() {
            return Err(SessionError::Unavailable);
        }
        if self.is_round_over() {
            return Err(SessionError::RoundOver);
        }
        if !self.answered() {
            return Err(SessionError::NotAnswered);
        }

        self.current += 1;
        self.selected = None;
        Ok(())
    }

    /// Lenient form of [`QuizSession::try_advance`]; returns whether the round moved.
    pub fn advance(&mut self) -> bool {
        self.try_advance().is_ok()
    }

    pub(crate) fn set_summary(&mut self, summary: RoundSummary) {
        self.summary = Some(summary);
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("difficulty", &self.difficulty)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("selected", &self.selected)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
