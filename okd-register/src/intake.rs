//! Reading a multipart registration form into a [`Submission`]

use crate::models::submission::{PhotoPart, Submission};
use crate::validation::MAX_PHOTO_SIZE;
use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use axum::http::StatusCode;
use tracing::{debug, warn};

const PHOTO_FIELD: &str = "photo";

/// Collect the fields of a registration form
///
/// Only the first occurrence of each field is kept and unknown fields are
/// skipped. Photo bytes past [`MAX_PHOTO_SIZE`] are counted but not kept.
/// If the body runs past the request size limit, reading stops and the
/// submission is marked truncated; validation then reports only the size.
///
/// # Errors
///
/// - If the body isn't valid `multipart/form-data`
pub async fn read_submission(multipart: &mut Multipart) -> Result<Submission, MultipartError> {
    let mut submission = Submission::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) if is_over_limit(&err) => {
                mark_oversized(&mut submission);
                break;
            }
            Err(err) => return Err(err),
        };

        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == PHOTO_FIELD {
            if submission.photo.is_some() {
                debug!("ignoring repeated photo field");
                continue;
            }

            let mut photo = PhotoPart::default();
            let result = read_photo(field, &mut photo).await;
            submission.photo = Some(photo);

            match result {
                Ok(()) => {}
                Err(err) if is_over_limit(&err) => {
                    mark_oversized(&mut submission);
                    break;
                }
                Err(err) => return Err(err),
            }
        } else if let Some(slot) = submission.values.slot_mut(&name) {
            if slot.is_some() {
                debug!(field = %name, "ignoring repeated form field");
                continue;
            }

            match field.text().await {
                Ok(text) => *slot = Some(text),
                Err(err) if is_over_limit(&err) => {
                    mark_oversized(&mut submission);
                    break;
                }
                Err(err) => return Err(err),
            }
        } else {
            debug!(field = %name, "ignoring unknown form field");
        }
    }

    Ok(submission)
}

async fn read_photo(mut field: Field<'_>, photo: &mut PhotoPart) -> Result<(), MultipartError> {
    photo.file_name = field.file_name().map(str::to_owned);
    photo.content_type = field.content_type().map(str::to_owned);

    let mut bytes = Vec::new();
    while let Some(chunk) = field.chunk().await? {
        photo.size += chunk.len();
        if photo.size > MAX_PHOTO_SIZE {
            photo.oversized = true;
            bytes = Vec::new();
        } else {
            bytes.extend_from_slice(&chunk);
        }
    }

    if !photo.oversized {
        photo.bytes = bytes.into();
    }
    Ok(())
}

fn is_over_limit(err: &MultipartError) -> bool {
    err.status() == StatusCode::PAYLOAD_TOO_LARGE
}

fn mark_oversized(submission: &mut Submission) {
    warn!("registration body exceeded the size limit");
    submission.truncated = true;
    let photo = submission.photo.get_or_insert_with(PhotoPart::default);
    photo.oversized = true;
    photo.bytes = Default::default();
}
