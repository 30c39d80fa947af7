use thiserror::Error;

/// Questions per round when the player does not pick a size.
pub const DEFAULT_QUESTIONS_PER_ROUND: u32 = 10;

/// Round sizes offered to the player.
pub const DEFAULT_COUNT_OPTIONS: [u32; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("questions per round must be > 0")]
    InvalidQuestionsPerRound,

    #[error("at least one round size option is required")]
    NoCountOptions,

    #[error("round size options must be > 0 and strictly ascending")]
    InvalidCountOptions,
}

/// A round size the player can pick, and whether the pool is big enough for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountChoice {
    pub count: u32,
    pub enabled: bool,
}

/// Round sizing preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    questions_per_round: u32,
    count_options: Vec<u32>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
            count_options: DEFAULT_COUNT_OPTIONS.to_vec(),
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if `questions_per_round` is zero or the options are
    /// empty, contain zero, or are not strictly ascending.
    pub fn new(questions_per_round: u32, count_options: Vec<u32>) -> Result<Self, SettingsError> {
        if questions_per_round == 0 {
            return Err(SettingsError::InvalidQuestionsPerRound);
        }
        if count_options.is_empty() {
            return Err(SettingsError::NoCountOptions);
        }
        let ascending = count_options.windows(2).all(|pair| pair[0] < pair[1]);
        if !ascending || count_options.contains(&0) {
            return Err(SettingsError::InvalidCountOptions);
        }
        Ok(Self {
            questions_per_round,
            count_options,
        })
    }

    /// Default options with a custom default round size.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionsPerRound` if the count is zero.
    pub fn with_questions_per_round(questions_per_round: u32) -> Result<Self, SettingsError> {
        Self::new(questions_per_round, DEFAULT_COUNT_OPTIONS.to_vec())
    }

    #[must_use]
    pub fn questions_per_round(&self) -> u32 {
        self.questions_per_round
    }

    #[must_use]
    pub fn count_options(&self) -> &[u32] {
        &self.count_options
    }

    /// Options larger than the pool are offered but disabled.
    #[must_use]
    pub fn count_choices(&self, pool_size: usize) -> Vec<CountChoice> {
        self.count_options
            .iter()
            .map(|&count| CountChoice {
                count,
                enabled: usize::try_from(count).is_ok_and(|n| n <= pool_size),
            })
            .collect()
    }
}
