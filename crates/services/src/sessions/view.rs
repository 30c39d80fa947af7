use geoquiz_core::model::{ImageRef, Question};

pub const CORRECT_TITLE: &str = "Correct!";
pub const INCORRECT_TITLE: &str = "Not quite";

/// Presentation-agnostic feedback for an answered question.
///
/// Carries what the host needs to render the result card: whether the pick was
/// right, the correct option text, and the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback<'a> {
    pub is_correct: bool,
    pub title: &'static str,
    pub selected: usize,
    pub correct_answer: &'a str,
    pub fact: &'a str,
    pub image: Option<&'a ImageRef>,
}

impl<'a> AnswerFeedback<'a> {
    #[must_use]
    pub fn new(question: &'a Question, selected: usize) -> Self {
        let is_correct = question.is_correct(selected);
        Self {
            is_correct,
            title: if is_correct {
                CORRECT_TITLE
            } else {
                INCORRECT_TITLE
            },
            selected,
            correct_answer: question.correct_option(),
            fact: question.fact(),
            image: question.image(),
        }
    }

    /// Body text: the fact, prefixed with the right answer after a miss.
    #[must_use]
    pub fn description(&self) -> String {
        if self.is_correct {
            self.fact.to_string()
        } else {
            format!("Answer: {}. {}", self.correct_answer, self.fact)
        }
    }
}
