//! Utilities for easily connecting to the database

use crate::service::environment::env_or;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

/// Database connection pool type
pub type Db = Pool<Sqlite>;

/// Where the database lives when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/local.db";

const SQLITE_READONLY: i32 = 8;

/// Get a database connection pool
///
/// The location comes from the `DATABASE_URL` environment variable, or
/// [`DEFAULT_DATABASE_URL`] if it's not set.
///
/// # Errors
///
/// - If the URL is not a valid SQLite URL
/// - If the database directory can't be created
/// - If the database connection fails
pub async fn require_db() -> anyhow::Result<Db> {
    connect_db(&env_or("DATABASE_URL", DEFAULT_DATABASE_URL)).await
}

/// Connect to a SQLite database file, creating it (and its directory) if needed
///
/// # Errors
///
/// - If the URL is not a valid SQLite URL
/// - If the database directory can't be created
/// - If the database connection fails
pub async fn connect_db(url: &str) -> anyhow::Result<Db> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    if let Some(dir) = options.get_filename().parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir).await?;
    }

    let pool: Db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!(url, "connected to database");
    Ok(pool)
}

/// Get a pool over a fresh in-memory database
///
/// Every SQLite memory connection is a separate database, so the pool holds
/// exactly one connection and never recycles it.
///
/// # Errors
///
/// - If opening the connection fails
pub async fn memory_db() -> anyhow::Result<Db> {
    let pool: Db = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await?;

    Ok(pool)
}

pub trait DbResultExt {
    fn is_read_only(&self) -> bool;
}

impl DbResultExt for sqlx::Error {
    fn is_read_only(&self) -> bool {
        self.as_database_error()
            .and_then(|err| err.code())
            .and_then(|code| code.parse::<i32>().ok())
            .is_some_and(|code| code & 0xff == SQLITE_READONLY)
    }
}

impl<T> DbResultExt for Result<T, sqlx::Error> {
    fn is_read_only(&self) -> bool {
        if let Err(err) = self {
            err.is_read_only()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local.db");
        let url = format!("sqlite://{}", path.display());

        let db = connect_db(&url).await.unwrap();
        sqlx::query("select 1").execute(&db).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn memory_db_keeps_state_between_queries() {
        let db = memory_db().await.unwrap();
        sqlx::query("create table t (x integer)")
            .execute(&db)
            .await
            .unwrap();
        sqlx::query("insert into t (x) values (1)")
            .execute(&db)
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("select count(*) from t")
            .fetch_one(&db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn read_only_database_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro.db");
        let db = connect_db(&format!("sqlite://{}", path.display()))
            .await
            .unwrap();
        sqlx::query("create table t (x integer)")
            .execute(&db)
            .await
            .unwrap();
        db.close().await;

        let options = SqliteConnectOptions::new().filename(&path).read_only(true);
        let ro = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        let result = sqlx::query("insert into t (x) values (1)").execute(&ro).await;
        assert!(result.is_read_only());
    }
}
