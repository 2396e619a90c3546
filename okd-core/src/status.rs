//! Machine-readable error codes shared by the services

use axum::http::StatusCode;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
pub enum ErrorCode {
    /// A required field was absent or empty
    MissingField,
    /// A field was present but could not be parsed
    InvalidFormat,
    /// An upload exceeded its size limit
    TooLarge,
    /// An upload had a content type that isn't accepted
    UnsupportedType,
    Database,
    /// Something on our side broke, such as a page failing to render
    Internal,
}

impl ErrorCode {
    /// Whether the error was caused by the client's input
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::MissingField | Self::InvalidFormat | Self::TooLarge | Self::UnsupportedType
        )
    }

    /// The HTTP status a response carrying this error should have
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
