use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error as ThisError;
use tracing::error;

use super::dto::Message;

/// Error taxonomy for the whole API. Every variant maps onto exactly one
/// status code; handlers propagate with `?` and axum renders the JSON body.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("Account number already exists")]
    DuplicateAccount,

    #[error("Access denied. Token missing.")]
    TokenMissing,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not authenticated")]
    Unauthenticated,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::DuplicateAccount => StatusCode::BAD_REQUEST,
            Error::TokenMissing
            | Error::InvalidToken
            | Error::InvalidCredentials
            | Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Log the detail, return a generic body.
            error!("{self}");
            return (status, Json(Message::new("Internal server error"))).into_response();
        }
        (status, Json(Message::new(&self.to_string()))).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = error {
            if db_error.is_unique_violation() {
                return Error::DuplicateAccount;
            }
        }
        Error::Database(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(error: bcrypt::BcryptError) -> Self {
        Error::Internal(error.to_string())
    }
}
