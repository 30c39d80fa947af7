use serde::{Deserialize, Serialize};
use std::fmt;

/// Best score ever achieved across completed rounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HighScore(u32);

/// Outcome of offering a round score to the current high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreUpdate {
    pub high_score: HighScore,
    pub updated: bool,
}

impl HighScore {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Decide whether `candidate` beats this high score.
    ///
    /// Pure: persisting the new value is the caller's job.
    #[must_use]
    pub fn record_if_higher(self, candidate: u32) -> HighScoreUpdate {
        if candidate > self.0 {
            HighScoreUpdate {
                high_score: Self(candidate),
                updated: true,
            }
        } else {
            HighScoreUpdate {
                high_score: self,
                updated: false,
            }
        }
    }
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HighScore {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_only_on_strictly_higher_scores() {
        for current in 0..12_u32 {
            for candidate in 0..12_u32 {
                let update = HighScore::new(current).record_if_higher(candidate);
                assert_eq!(update.updated, candidate > current);
                let expected = if update.updated { candidate } else { current };
                assert_eq!(update.high_score.value(), expected);
                assert!(update.high_score >= HighScore::new(current));
            }
        }
    }

    #[test]
    fn tie_keeps_existing_score() {
        let update = HighScore::new(5).record_if_higher(5);
        assert_eq!(
            update,
            HighScoreUpdate {
                high_score: HighScore::new(5),
                updated: false
            }
        );
    }

    #[test]
    fn defaults_to_zero() {
        assert_eq!(HighScore::default().value(), 0);
    }
}
