use thiserror::Error;

use crate::bank::BankError;
use crate::model::{QuestionError, RoundSummaryError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Summary(#[from] RoundSummaryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionBank;
    use crate::model::QuizSettings;

    fn load(json: &str, per_round: u32) -> Result<(QuestionBank, QuizSettings), Error> {
        let bank = QuestionBank::from_json(json)?;
        let settings = QuizSettings::with_questions_per_round(per_round)?;
        Ok((bank, settings))
    }

    #[test]
    fn component_errors_convert() {
        assert!(matches!(load("not json", 10), Err(Error::Bank(_))));
        assert!(matches!(load("[]", 0), Err(Error::Settings(_))));
        assert!(load("[]", 5).is_ok());
    }
}
