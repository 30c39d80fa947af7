use geoquiz_core::model::HighScore;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn high_score_from_i64(v: i64) -> Result<HighScore, StorageError> {
    u32::try_from(v)
        .map(HighScore::new)
        .map_err(|_| StorageError::Serialization(format!("score out of range: {v}")))
}

pub(crate) fn high_score_to_i64(score: HighScore) -> i64 {
    i64::from(score.value())
}
