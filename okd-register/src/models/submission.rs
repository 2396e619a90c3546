use axum::body::Bytes;
use serde::Serialize;

/// Text fields of a registration form, exactly as they were submitted
///
/// Sent back to the form when a submission is rejected so the user doesn't
/// have to type everything again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: Option<String>,
    pub age: Option<String>,
    pub hobby: Option<String>,
    pub qualification: Option<String>,
    pub role: Option<String>,
    pub interests: Option<String>,
    pub place: Option<String>,
    pub income: Option<String>,
    pub bio: Option<String>,
}

impl FormValues {
    /// Slot for a text field, or `None` if `name` isn't one of ours
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        Some(match name {
            "name" => &mut self.name,
            "age" => &mut self.age,
            "hobby" => &mut self.hobby,
            "qualification" => &mut self.qualification,
            "role" => &mut self.role,
            "interests" => &mut self.interests,
            "place" => &mut self.place,
            "income" => &mut self.income,
            "bio" => &mut self.bio,
            _ => return None,
        })
    }
}

/// The photo part of a submission, before validation
#[derive(Debug, Clone, Default)]
pub struct PhotoPart {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    /// Number of bytes the client sent, including any that weren't kept
    pub size: usize,
    /// Set when the part went over the size limit; `bytes` is then empty
    pub oversized: bool,
    pub bytes: Bytes,
}

impl PhotoPart {
    #[must_use]
    pub fn new(content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            file_name: None,
            content_type: Some(content_type.into()),
            size: bytes.len(),
            oversized: false,
            bytes,
        }
    }

    /// Browsers send an empty, nameless part when no file was picked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0 && !self.oversized
    }
}

#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub values: FormValues,
    pub photo: Option<PhotoPart>,
    /// The body hit the request size limit, so later fields were never read
    pub truncated: bool,
}
