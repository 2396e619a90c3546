use axum::body::Bytes;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use chrono::{DateTime, NaiveDateTime, Utc};
use o2o::o2o;

/// An image and the content type it was uploaded with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub bytes: Bytes,
    pub content_type: String,
}

impl Photo {
    /// Text form of the image bytes, as kept in the `photo_base64` column
    #[must_use]
    pub fn encode(&self) -> String {
        BASE64_STANDARD.encode(&self.bytes)
    }

    /// Rebuild a photo from its stored columns
    ///
    /// # Errors
    ///
    /// - If `encoded` is not valid base64
    pub fn decode(encoded: &str, content_type: String) -> Result<Self, base64::DecodeError> {
        Ok(Self {
            bytes: BASE64_STANDARD.decode(encoded)?.into(),
            content_type,
        })
    }
}

/// A validated registration, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub photo: Photo,
    pub hobby: Option<String>,
    pub qualification: Option<String>,
    pub role: Option<String>,
    pub interests: Option<String>,
    pub place: Option<String>,
    pub income: Option<i64>,
    pub bio: Option<String>,
}

/// A stored user, without the photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub hobby: Option<String>,
    pub qualification: Option<String>,
    pub role: Option<String>,
    pub interests: Option<String>,
    pub place: Option<String>,
    pub income: Option<i64>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored user with their photo decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub photo: Photo,
    pub hobby: Option<String>,
    pub qualification: Option<String>,
    pub role: Option<String>,
    pub interests: Option<String>,
    pub place: Option<String>,
    pub income: Option<i64>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow, o2o)]
#[owned_into(UserSummary)]
pub struct RawUserSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub hobby: Option<String>,
    pub qualification: Option<String>,
    pub role: Option<String>,
    pub interests: Option<String>,
    pub place: Option<String>,
    pub income: Option<i64>,
    pub bio: Option<String>,
    #[into(~.and_utc())]
    pub created_at: NaiveDateTime,
}

#[derive(sqlx::FromRow)]
pub struct RawUser {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub photo_base64: Option<String>,
    pub photo_type: Option<String>,
    pub hobby: Option<String>,
    pub qualification: Option<String>,
    pub role: Option<String>,
    pub interests: Option<String>,
    pub place: Option<String>,
    pub income: Option<i64>,
    pub bio: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<RawUser> for UserProfile {
    type Error = base64::DecodeError;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        let photo = Photo::decode(
            raw.photo_base64.as_deref().unwrap_or_default(),
            raw.photo_type.unwrap_or_default(),
        )?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            age: raw.age,
            photo,
            hobby: raw.hobby,
            qualification: raw.qualification,
            role: raw.role,
            interests: raw.interests,
            place: raw.place,
            income: raw.income,
            bio: raw.bio,
            created_at: raw.created_at.and_utc(),
        })
    }
}
