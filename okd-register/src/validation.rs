//! Turning a raw submission into a [`NewUser`]

use crate::error::{Field, FieldErrors};
use crate::models::submission::{FormValues, PhotoPart, Submission};
use crate::models::user::{NewUser, Photo};
use okd_core::status::ErrorCode;

/// Largest accepted photo, in bytes
pub const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

const PHOTO_TOO_LARGE: &str = "Photo size must be less than 5MB";

/// Why a submission was turned down, with what was typed so the form can be refilled
#[derive(Debug, Clone)]
pub struct Rejection {
    pub errors: FieldErrors,
    pub values: FormValues,
}

/// Check every field of a submission
///
/// All rules run, so the result lists every problem at once rather than
/// stopping at the first.
///
/// # Errors
///
/// - If any field breaks its rules (see [`Rejection`])
pub fn validate(submission: Submission) -> Result<NewUser, Rejection> {
    let Submission {
        values,
        photo,
        truncated,
    } = submission;
    let mut errors = FieldErrors::default();

    // fields after the cut were never read, so missing ones can't be told apart
    if truncated {
        errors.push(Field::Photo, ErrorCode::TooLarge, PHOTO_TOO_LARGE);
        return Err(Rejection { errors, values });
    }

    let name = check_name(values.name.as_deref(), &mut errors);
    let age = check_age(values.age.as_deref(), &mut errors);
    let photo = check_photo(photo, &mut errors);
    let income = check_income(values.income.as_deref(), &mut errors);

    let (Some(name), Some(age), Some(photo), Ok(income)) = (name, age, photo, income) else {
        return Err(Rejection { errors, values });
    };

    Ok(NewUser {
        name,
        age,
        photo,
        hobby: optional_text(values.hobby),
        qualification: optional_text(values.qualification),
        role: optional_text(values.role),
        interests: optional_text(values.interests),
        place: optional_text(values.place),
        income,
        bio: optional_text(values.bio),
    })
}

fn check_name(name: Option<&str>, errors: &mut FieldErrors) -> Option<String> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        _ => {
            errors.push(Field::Name, ErrorCode::MissingField, "Name is required");
            None
        }
    }
}

fn check_age(age: Option<&str>, errors: &mut FieldErrors) -> Option<i64> {
    let Some(age) = age.map(str::trim).filter(|age| !age.is_empty()) else {
        errors.push(Field::Age, ErrorCode::MissingField, "Age is required");
        return None;
    };

    match age.parse::<i64>() {
        Ok(age) if age > 0 => Some(age),
        _ => {
            errors.push(
                Field::Age,
                ErrorCode::InvalidFormat,
                "Age must be a valid positive number",
            );
            None
        }
    }
}

fn check_photo(photo: Option<PhotoPart>, errors: &mut FieldErrors) -> Option<Photo> {
    let Some(photo) = photo.filter(|photo| !photo.is_empty()) else {
        errors.push(Field::Photo, ErrorCode::MissingField, "Photo is required");
        return None;
    };

    let mut valid = true;

    if photo.oversized || photo.size > MAX_PHOTO_SIZE {
        errors.push(Field::Photo, ErrorCode::TooLarge, PHOTO_TOO_LARGE);
        valid = false;
    }

    // a body cut off before the photo headers tells us nothing about the type
    let type_unknown = photo.oversized && photo.content_type.is_none();
    let content_type = photo.content_type.unwrap_or_default();
    if !type_unknown && !content_type.starts_with("image/") {
        errors.push(
            Field::Photo,
            ErrorCode::UnsupportedType,
            "Invalid file type, please upload an image.",
        );
        valid = false;
    }

    valid.then(|| Photo {
        bytes: photo.bytes,
        content_type,
    })
}

/// `Ok(None)` when no income was given, `Err` when it isn't a number
fn check_income(income: Option<&str>, errors: &mut FieldErrors) -> Result<Option<i64>, ()> {
    let Some(income) = income.map(str::trim).filter(|income| !income.is_empty()) else {
        return Ok(None);
    };

    income.parse::<i64>().map(Some).map_err(|_| {
        errors.push(Field::Income, ErrorCode::InvalidFormat, "Income must be a number");
    })
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
