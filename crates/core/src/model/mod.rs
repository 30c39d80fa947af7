mod difficulty;
mod high_score;
mod ids;
mod question;
mod settings;
mod summary;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use high_score::{HighScore, HighScoreUpdate};
pub use ids::{ParseIdError, QuestionId};
pub use question::{ImageRef, Question, QuestionDraft, QuestionError};
pub use settings::{CountChoice, QuizSettings, SettingsError};
pub use summary::{RoundSummary, RoundSummaryError};
