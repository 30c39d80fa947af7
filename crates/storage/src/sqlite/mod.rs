use std::sync::Arc;
use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;
use tracing::debug;

use crate::repository::{HighScoreRepository, Storage};

mod high_score_repo;
mod mapping;
mod migrate;

#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl SqliteRepository {
    /// Connect to `SQLite` using the given URL.
    ///
    /// A private `:memory:` database lives per connection, so the pool is
    /// pinned to a single connection in that case. In-memory databases also
    /// keep their connections forever: closing the last one drops the data.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the connection cannot be established or
    /// connection setup pragmas fail.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let pool = pool_options(database_url)
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        debug!(
            target: "storage",
            %database_url,
            max_connections = pool.options().get_max_connections(),
            "SQLite pool connected"
        );
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if migration queries fail.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }
}

/// True for URLs whose database only lives as long as its connections.
#[must_use]
pub fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn pool_options(database_url: &str) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(5));
    if !is_memory_url(database_url) {
        return options.max_connections(5);
    }

    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        5
    };
    options
        .max_connections(max_connections)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

impl Storage {
    /// Build a `Storage` backed by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if connection or migrations cannot be
    /// completed.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::connect(database_url).await?;
        repo.migrate().await?;
        let high_scores: Arc<dyn HighScoreRepository> = Arc::new(repo);
        Ok(Self { high_scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_detected() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite:file:quiz?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite:///tmp/quiz.sqlite3"));
    }

    #[test]
    fn memory_pools_never_recycle_connections() {
        let private = pool_options("sqlite::memory:");
        assert_eq!(private.get_max_connections(), 1);
        assert_eq!(private.get_min_connections(), 1);
        assert_eq!(private.get_idle_timeout(), None);
        assert_eq!(private.get_max_lifetime(), None);

        let shared = pool_options("sqlite:file:quiz?mode=memory&cache=shared");
        assert_eq!(shared.get_min_connections(), 1);
        assert_eq!(shared.get_idle_timeout(), None);

        let file = pool_options("sqlite:///tmp/quiz.sqlite3");
        assert_eq!(file.get_max_connections(), 5);
        assert!(file.get_idle_timeout().is_some());
    }

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteRepository>();
    }
}
