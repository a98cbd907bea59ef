//! Error taxonomy shared by the store, the service and the HTTP layer.
//!
//! Every variant maps to a stable machine-readable `kind` and an HTTP status,
//! so handlers never need to inspect error internals.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("{field} must be strictly between {min} and {max}, got {value}")]
    Validation {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The request could not be extracted (malformed body, path or query).
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("Address with this latitude and longitude already exists")]
    Conflict { latitude: f64, longitude: f64 },

    #[error("Address not found")]
    NotFound { id: i64 },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, AddressError>;

impl AddressError {
    /// Stable identifier exposed to clients in the `kind` field.
    pub fn kind(&self) -> &'static str {
        match self {
            AddressError::Validation { .. } => "validation",
            // Well-formed JSON with missing or mistyped fields is a validation failure.
            AddressError::Rejected { status, .. } => {
                if *status == StatusCode::UNPROCESSABLE_ENTITY {
                    "validation"
                } else {
                    "bad_request"
                }
            }
            AddressError::Conflict { .. } => "conflict",
            AddressError::NotFound { .. } => "not_found",
            AddressError::Database(_) | AddressError::Storage(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AddressError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AddressError::Rejected { status, .. } => *status,
            AddressError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AddressError::NotFound { .. } => StatusCode::NOT_FOUND,
            AddressError::Database(_) | AddressError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AddressError {
    fn from(rejection: JsonRejection) -> Self {
        AddressError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AddressError {
    fn from(rejection: PathRejection) -> Self {
        AddressError::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AddressError {
    fn from(rejection: QueryRejection) -> Self {
        AddressError::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: rejection.body_text(),
        }
    }
}

impl From<tokio::task::JoinError> for AddressError {
    fn from(err: tokio::task::JoinError) -> Self {
        AddressError::Storage(err.to_string())
    }
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub detail: String,
}

impl From<&AddressError> for ErrorResponse {
    fn from(err: &AddressError) -> Self {
        let detail = match err {
            // Raw SQLite messages stay in the logs.
            AddressError::Database(_) | AddressError::Storage(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        Self {
            kind: err.kind().to_string(),
            detail,
        }
    }
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
