mod plan;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{RoundBuilder, RoundPlan};
pub use progress::RoundProgress;
pub use service::{AnswerOutcome, QuizSession};
pub use view::{AnswerFeedback, CORRECT_TITLE, INCORRECT_TITLE};
pub use workflow::RoundLoopService;
