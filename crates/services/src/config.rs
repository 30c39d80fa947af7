//! Environment-driven configuration.
//!
//! Variables:
//!   GEOQUIZ_DB_URL          : SQLite URL or path (default `sqlite://geoquiz.sqlite3`)
//!   GEOQUIZ_HIGH_SCORE_SLOT : name of the high-score slot (default `geoquiz_highscore`)
//!   GEOQUIZ_QUESTION_COUNT  : default questions per round (default 10)
//!   GEOQUIZ_SEED            : optional u64; seeds the round shuffle

use std::path::{Path, PathBuf};

use geoquiz_core::ShuffleSource;
use geoquiz_core::model::QuizSettings;
use storage::sqlite::is_memory_url;

use crate::error::ConfigError;

pub const DB_URL_VAR: &str = "GEOQUIZ_DB_URL";
pub const HIGH_SCORE_SLOT_VAR: &str = "GEOQUIZ_HIGH_SCORE_SLOT";
pub const QUESTION_COUNT_VAR: &str = "GEOQUIZ_QUESTION_COUNT";
pub const SEED_VAR: &str = "GEOQUIZ_SEED";

pub const DEFAULT_DB_URL: &str = "sqlite://geoquiz.sqlite3";
pub const DEFAULT_HIGH_SCORE_SLOT: &str = "geoquiz_highscore";
pub const MEMORY_DB_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub db_url: String,
    pub high_score_slot: String,
    pub settings: QuizSettings,
    pub shuffle: ShuffleSource,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            db_url: normalize_sqlite_url(DEFAULT_DB_URL),
            high_score_slot: DEFAULT_HIGH_SCORE_SLOT.to_string(),
            settings: QuizSettings::default(),
            shuffle: ShuffleSource::Entropy,
        }
    }
}

impl QuizConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the variable whose value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the variable whose value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DB_URL_VAR) {
            if raw.trim().is_empty() {
                return Err(ConfigError::InvalidDbUrl {
                    var: DB_URL_VAR,
                    raw,
                });
            }
            config.db_url = normalize_sqlite_url(&raw);
        }

        if let Some(raw) = lookup(HIGH_SCORE_SLOT_VAR) {
            let slot = raw.trim();
            if slot.is_empty() {
                return Err(ConfigError::EmptySlot {
                    var: HIGH_SCORE_SLOT_VAR,
                });
            }
            config.high_score_slot = slot.to_string();
        }

        if let Some(raw) = lookup(QUESTION_COUNT_VAR) {
            let count: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidQuestionCount {
                    var: QUESTION_COUNT_VAR,
                    raw: raw.clone(),
                })?;
            config.settings = QuizSettings::with_questions_per_round(count)?;
        }

        if let Some(raw) = lookup(SEED_VAR) {
            let seed: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidSeed {
                var: SEED_VAR,
                raw: raw.clone(),
            })?;
            config.shuffle = ShuffleSource::seeded(seed);
        }

        Ok(config)
    }

    /// Config for a throwaway in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            db_url: MEMORY_DB_URL.to_string(),
            ..Self::default()
        }
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
///
/// In-memory and `file:` URIs are returned unchanged; a query string is kept.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_memory_url(trimmed) {
        return trimmed.to_string();
    }

    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    if rest.starts_with("file:") {
        return trimmed.to_string();
    }

    let (path_str, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}", absolute.display()),
    }
}

/// Make sure the database file (and its directory) exists before connecting.
///
/// In-memory URLs and `file:` URIs are left to the driver.
///
/// # Errors
///
/// Returns `ConfigError::InvalidDbUrl` for URLs without a path and
/// `ConfigError::Io` if the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> Result<(), ConfigError> {
    if is_memory_url(db_url) || db_url.starts_with("sqlite:file:") {
        return Ok(());
    }

    let invalid = || ConfigError::InvalidDbUrl {
        var: DB_URL_VAR,
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }
    Ok(())
}
