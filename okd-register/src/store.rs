//! The only code allowed to talk to the user table

mod sqlite;

pub use sqlite::SqliteUserStore;

use crate::models::user::{NewUser, UserProfile, UserSummary};
use async_trait::async_trait;
use okd_core::status::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored photo is corrupt: {0}")]
    CorruptPhoto(#[from] base64::DecodeError),
}

impl StoreError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::Database
    }
}

/// Persistence for registered users
///
/// Writes fail loudly. Reads never fail: a broken store reads as empty, and
/// the cause is logged instead.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create the user table if it doesn't exist yet
    ///
    /// Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// - If the table can't be created
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Store a validated user and return their new id
    ///
    /// # Errors
    ///
    /// - If the write fails for any reason; it is not retried
    async fn insert(&self, user: &NewUser) -> Result<i64, StoreError>;

    /// Every stored user, newest first
    async fn list_all(&self) -> Vec<UserSummary>;

    /// A single user with their photo, or `None` if there is no such user
    async fn get_by_id(&self, id: i64) -> Option<UserProfile>;
}
