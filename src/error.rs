use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::common::ErrorBody;

// Postgres SQLSTATE codes we translate into client errors
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = error {
            return AppError::NotFound("Record not found".into());
        }

        let code = error
            .as_database_error()
            .and_then(|db_error| db_error.code())
            .map(|code| code.into_owned());

        match code.as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => {
                AppError::NotFound("Referenced record not found".into())
            }
            Some(UNIQUE_VIOLATION) => {
                AppError::Conflict("Record already exists".into())
            }
            Some(CHECK_VIOLATION) => AppError::Conflict(
                "Update would leave a negative value; run /api/stats/reconcile".into(),
            ),
            Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
                AppError::Conflict("Update would push a counter out of range".into())
            }
            _ => AppError::Database(error),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Database(e) => {
                tracing::error!("Unhandled database error: {}", e);
                ErrorBody::new("Internal server error")
            }
            other => ErrorBody::new(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
