use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    connect_with_settings(database_url, 1, 30).await
}

/// Opens a pool against `database_url`, creating the database file on first use.
pub async fn connect_with_settings(
    database_url: &str,
    max_connections: u32,
    timeout_secs: u64,
) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(timeout_secs.max(1)))
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{connect, connect_with_settings};

    #[tokio::test]
    async fn creates_missing_database_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("clubs.db");
        let url = format!("sqlite://{}", path.display());

        let pool = connect(&url).await.expect("connect");
        sqlx::query("SELECT 1").execute(&pool).await.expect("ping");
        pool.close().await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn zero_connections_are_clamped_to_one() {
        let pool = connect_with_settings("sqlite::memory:", 0, 0).await.expect("connect");
        sqlx::query("SELECT 1").execute(&pool).await.expect("ping");
    }
}
