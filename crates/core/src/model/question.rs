use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::difficulty::Difficulty;
use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("option {index} is blank")]
    BlankOption { index: usize },

    #[error("correct index {index} is out of range for {count} options")]
    CorrectIndexOutOfRange { index: usize, count: usize },
}

//
// ─── IMAGE ─────────────────────────────────────────────────────────────────────
//

const DEFAULT_IMAGE_ALT: &str = "Question image";

/// Illustrative image attached to a question (a flag, usually).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Alt text for rendering, falling back to a generic label.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.alt
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(DEFAULT_IMAGE_ALT)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question, as decoded from a bank file or built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub fact: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id or prompt is blank, there are fewer than
    /// two options, an option is blank, or `correct_index` does not point at an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(QuestionError::EmptyId);
        }
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let count = self.options.len();
        if count < 2 {
            return Err(QuestionError::TooFewOptions { count });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::BlankOption { index });
        }
        if self.correct_index >= count {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                count,
            });
        }

        Ok(Question {
            id: QuestionId::new(id),
            prompt: prompt.to_string(),
            options: self.options,
            correct_index: self.correct_index,
            fact: self.fact.trim().to_string(),
            difficulty: self.difficulty,
            image: self.image,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question.
///
/// Always holds at least two options and a `correct_index` inside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    fact: String,
    difficulty: Difficulty,
    image: Option<ImageRef>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        self.option(self.correct_index).unwrap_or_default()
    }

    /// Whether `index` is the correct option. Out-of-range indices are simply wrong.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    #[must_use]
    pub fn fact(&self) -> &str {
        &self.fact
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Convert back into the serializable draft shape.
    #[must_use]
    pub fn to_draft(&self) -> QuestionDraft {
        QuestionDraft {
            id: self.id.to_string(),
            prompt: self.prompt.clone(),
            options: self.options.clone(),
            correct_index: self.correct_index,
            fact: self.fact.clone(),
            difficulty: self.difficulty,
            image: self.image.clone(),
        }
    }
}
