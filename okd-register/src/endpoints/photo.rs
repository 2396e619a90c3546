use crate::RegisterService;
use axum::Extension;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// Uploads are served from our own origin, so nothing in them may run
const PHOTO_CSP: &str = "default-src 'none'; sandbox";

/// Serve a user's photo with the content type it was uploaded with
///
/// Unknown users and unreadable rows are both a plain 404.
pub async fn user_photo(
    Path(id): Path<i64>,
    Extension(service): Extension<RegisterService>,
) -> Result<impl IntoResponse, StatusCode> {
    let profile = service
        .store
        .get_by_id(id)
        .await
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok((
        [
            (header::CONTENT_TYPE, profile.photo.content_type),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
            (header::CONTENT_SECURITY_POLICY, PHOTO_CSP.to_string()),
        ],
        profile.photo.bytes,
    ))
}
