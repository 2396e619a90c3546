use crate::models::user::{NewUser, RawUser, RawUserSummary, UserProfile, UserSummary};
use crate::store::{StoreError, UserStore};
use async_trait::async_trait;
use okd_core::log_if_error::LogIfErrorExt;
use okd_core::service::database::{Db, DbResultExt};
use tokio::sync::OnceCell;
use tracing::{error, info};

const CREATE_USERS_TABLE: &str = "
    create table if not exists users (
        id integer primary key autoincrement,
        name text not null,
        age integer not null,
        photo_base64 text,
        photo_type text,
        hobby text,
        qualification text,
        role text,
        interests text,
        place text,
        income integer,
        bio text,
        created_at datetime not null default (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )";

/// [`UserStore`] backed by a SQLite pool
///
/// The table is created on first use, so callers don't have to remember
/// [`UserStore::ensure_schema`] before anything else.
#[derive(Debug)]
pub struct SqliteUserStore {
    db: Db,
    schema: OnceCell<()>,
}

impl SqliteUserStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            schema: OnceCell::new(),
        }
    }

    async fn ready(&self) -> Result<(), StoreError> {
        self.schema
            .get_or_try_init(|| self.create_table())
            .await
            .map(|_| ())
    }

    async fn create_table(&self) -> Result<(), StoreError> {
        let result = sqlx::query(CREATE_USERS_TABLE).execute(&self.db).await;

        if result.is_read_only() {
            error!("database is read-only, check file permissions");
        }
        result?;

        info!("database schema initialized");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<UserSummary>, StoreError> {
        self.ready().await?;

        let users = sqlx::query_as::<_, RawUserSummary>(
            "select id, name, age, hobby, qualification, role, interests, place, income, bio, created_at
             from users
             order by created_at desc, id desc",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn fetch_one(&self, id: i64) -> Result<Option<UserProfile>, StoreError> {
        self.ready().await?;

        let user = sqlx::query_as::<_, RawUser>(
            "select id, name, age, photo_base64, photo_type, hobby, qualification, role,
                    interests, place, income, bio, created_at
             from users
             where id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user.map(UserProfile::try_from).transpose()?)
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.create_table().await?;
        let _ = self.schema.set(());
        Ok(())
    }

    async fn insert(&self, user: &NewUser) -> Result<i64, StoreError> {
        self.ready().await?;

        let result = sqlx::query_scalar::<_, i64>(
            "insert into users
             (name, age, photo_base64, photo_type, hobby, qualification, role, interests, place, income, bio)
             values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             returning id",
        )
        .bind(&user.name)
        .bind(user.age)
        .bind(user.photo.encode())
        .bind(&user.photo.content_type)
        .bind(user.hobby.as_deref())
        .bind(user.qualification.as_deref())
        .bind(user.role.as_deref())
        .bind(user.interests.as_deref())
        .bind(user.place.as_deref())
        .bind(user.income)
        .bind(user.bio.as_deref())
        .fetch_one(&self.db)
        .await;

        match result {
            Ok(id) => {
                info!(id, "user added");
                Ok(id)
            }
            Err(err) => {
                error!(%err, "failed to add user");
                Err(err.into())
            }
        }
    }

    async fn list_all(&self) -> Vec<UserSummary> {
        self.fetch_all().await.or_with_log_default("listing users")
    }

    async fn get_by_id(&self, id: i64) -> Option<UserProfile> {
        self.fetch_one(id)
            .await
            .or_with_log(&format!("fetching user {id}"), None)
    }
}
