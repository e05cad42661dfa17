//! Typed errors and HTTP mapping.

use crate::response::message;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Failure reported by a [`crate::store::BookStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("book not found")]
    NotFound,
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Handler failures. Each variant renders as `{"message": ...}` with the status
/// the public API has always used for it; the cause is logged, not returned.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("id cannot be empty")]
    EmptyId,
    #[error("request failed")]
    InvalidBody(#[source] JsonRejection),
    #[error("could not create book")]
    Create(#[source] StoreError),
    #[error("could not delete book")]
    Delete(#[source] StoreError),
    #[error("cannot get id")]
    Get(#[source] StoreError),
    #[error("could not find book")]
    List(#[source] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyId => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Create(_) | AppError::Delete(_) | AppError::Get(_) | AppError::List(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::EmptyId => tracing::debug!("rejected request with empty id"),
            AppError::InvalidBody(e) => tracing::warn!(error = %e, "{}", self),
            AppError::Create(StoreError::Db(e))
            | AppError::Delete(StoreError::Db(e))
            | AppError::Get(StoreError::Db(e))
            | AppError::List(StoreError::Db(e)) => tracing::error!(error = %e, "{}", self),
            AppError::Create(e) | AppError::Delete(e) | AppError::Get(e) | AppError::List(e) => {
                tracing::warn!(error = %e, "{}", self)
            }
        }
        message(status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_map_to_bad_request() {
        let errors = [
            AppError::Create(StoreError::Db(sqlx::Error::PoolTimedOut)),
            AppError::Delete(StoreError::InvalidId("abc".into())),
            AppError::Get(StoreError::NotFound),
            AppError::List(StoreError::Db(sqlx::Error::PoolClosed)),
        ];
        for e in errors {
            assert_eq!(e.status(), StatusCode::BAD_REQUEST, "{e}");
        }
    }

    #[test]
    fn empty_id_keeps_legacy_status() {
        assert_eq!(AppError::EmptyId.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::EmptyId.to_string(), "id cannot be empty");
    }

    #[test]
    fn messages_do_not_leak_causes() {
        let e = AppError::Get(StoreError::Db(sqlx::Error::PoolTimedOut));
        assert_eq!(e.to_string(), "cannot get id");
    }
}
