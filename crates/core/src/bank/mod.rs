//! The fixed, read-only question bank.
//!
//! A bank is validated once on construction: every question passes
//! `QuestionDraft::validate` and ids are unique across the whole bank.
//! After that it never changes, so services share it behind an `Arc`.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Difficulty, Question, QuestionDraft, QuestionError, QuestionId};

mod builtin;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("invalid question {id}: {source}")]
    InvalidQuestion {
        id: String,
        #[source]
        source: QuestionError,
    },

    #[error("malformed question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from drafts, keeping declaration order.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidQuestion` for the first draft that fails validation,
    /// or `BankError::DuplicateId` if two questions share an id.
    pub fn new(drafts: impl IntoIterator<Item = QuestionDraft>) -> Result<Self, BankError> {
        let mut seen = HashSet::new();
        let mut questions = Vec::new();
        for draft in drafts {
            let id = draft.id.clone();
            let question = draft
                .validate()
                .map_err(|source| BankError::InvalidQuestion { id, source })?;
            if !seen.insert(question.id().clone()) {
                return Err(BankError::DuplicateId(question.id().clone()));
            }
            questions.push(question);
        }
        Ok(Self { questions })
    }

    /// Decode a JSON array of question drafts.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` on malformed input, otherwise the errors of [`QuestionBank::new`].
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        Self::new(drafts)
    }

    /// The geography questions shipped with the game.
    ///
    /// # Panics
    ///
    /// Panics if the built-in drafts fail validation; a unit test guards this.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin::drafts()).expect("built-in question bank should be valid")
    }

    #[must_use]
    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions with the given difficulty, in declaration order.
    #[must_use]
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .collect()
    }

    /// Like [`QuestionBank::by_difficulty`] for a raw tag; unknown tags yield nothing.
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<&Question> {
        tag.parse::<Difficulty>()
            .map(|difficulty| self.by_difficulty(difficulty))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn pool_size(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .count()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, difficulty: Difficulty) -> QuestionDraft {
        QuestionDraft {
            id: id.into(),
            prompt: format!("Prompt {id}"),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_index: 1,
            fact: String::new(),
            difficulty,
            image: None,
        }
    }

    #[test]
    fn builtin_bank_is_valid_and_partitioned() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 17);
        assert_eq!(bank.pool_size(Difficulty::Easy), 5);
        assert_eq!(bank.pool_size(Difficulty::Medium), 6);
        assert_eq!(bank.pool_size(Difficulty::Hard), 6);

        let total: usize = Difficulty::ALL.iter().map(|d| bank.pool_size(*d)).sum();
        assert_eq!(total, bank.len());
    }

    #[test]
    fn by_difficulty_keeps_declaration_order() {
        let bank = QuestionBank::builtin();
        let ids: Vec<&str> = bank
            .by_difficulty(Difficulty::Easy)
            .iter()
            .map(|q| q.id().as_str())
            .collect();
        assert_eq!(ids, vec!["e1", "e2", "e3", "e4", "e5"]);
    }

    #[test]
    fn unknown_tag_yields_empty_pool() {
        let bank = QuestionBank::builtin();
        assert!(bank.by_tag("impossible").is_empty());
        assert_eq!(bank.by_tag("HARD").len(), 6);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuestionBank::new(vec![
            draft("q1", Difficulty::Easy),
            draft("q1", Difficulty::Hard),
        ])
        .unwrap_err();
        assert!(matches!(err, BankError::DuplicateId(id) if id.as_str() == "q1"));
    }

    #[test]
    fn reports_which_question_is_invalid() {
        let mut bad = draft("q2", Difficulty::Medium);
        bad.correct_index = 7;
        let err = QuestionBank::new(vec![draft("q1", Difficulty::Easy), bad]).unwrap_err();
        assert!(matches!(
            err,
            BankError::InvalidQuestion {
                ref id,
                source: QuestionError::CorrectIndexOutOfRange { index: 7, count: 3 },
            } if id == "q2"
        ));
    }

    #[test]
    fn loads_from_json() {
        let json = serde_json::to_string(&vec![
            draft("a", Difficulty::Easy),
            draft("b", Difficulty::Hard),
        ])
        .unwrap();
        let bank = QuestionBank::from_json(&json).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(bank.get(&QuestionId::new("b")).is_some());
        assert!(bank.by_difficulty(Difficulty::Medium).is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            QuestionBank::from_json("{not json"),
            Err(BankError::Json(_))
        ));
    }
}
