use axum::http::StatusCode;
use okd_core::status::ErrorCode;
use std::collections::BTreeMap;
use strum::Display;

/// Form field an error is attached to
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Age,
    Photo,
    Income,
    /// Errors that aren't about any single field
    Form,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub code: ErrorCode,
    pub message: String,
}

/// All problems found with one submission
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, code: ErrorCode, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            code,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn single(field: Field, code: ErrorCode, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, code, message);
        errors
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First error recorded for `field`
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|err| err.field == field)
    }

    /// Every error code recorded for `field`, in the order they were found
    #[must_use]
    pub fn codes(&self, field: Field) -> Vec<ErrorCode> {
        self.0
            .iter()
            .filter(|err| err.field == field)
            .map(|err| err.code)
            .collect()
    }

    /// Fields with at least one error, without duplicates
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.0.iter().map(|err| err.field).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// One message per field, for showing next to the inputs
    #[must_use]
    pub fn messages(&self) -> BTreeMap<String, String> {
        let mut messages = BTreeMap::new();
        for err in &self.0 {
            messages
                .entry(err.field.to_string())
                .or_insert_with(|| err.message.clone());
        }
        messages
    }

    /// Server-side failures win over input problems
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.0
            .iter()
            .map(|err| err.code.status_code())
            .max_by_key(StatusCode::as_u16)
            .unwrap_or(StatusCode::BAD_REQUEST)
    }
}
