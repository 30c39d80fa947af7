#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod high_score_service;
pub mod sessions;

pub use geoquiz_core::{Clock, QuestionBank, ShuffleSource};
pub use sessions as session;

pub use app_services::QuizServices;
pub use config::QuizConfig;
pub use error::{AppServicesError, ConfigError, SessionError};
pub use high_score_service::HighScoreService;

pub use sessions::{
    AnswerFeedback, AnswerOutcome, QuizSession, RoundBuilder, RoundLoopService, RoundPlan,
    RoundProgress,
};
