//! Mapping of failures to HTTP responses
//!
//! | Failure | Status |
//! |---|---|
//! | malformed body, unknown operation | 400 |
//! | validation | 400 |
//! | storage | 500 |

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dataflow_domain::sale::{SaleError, ValidationError};
use thiserror::Error;
use tracing::{error, warn};

use crate::dto::{calculate::UnknownOperation, common::ErrorResponse};

/// Errors returned by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be decoded or names an unknown operation
    #[error("{0}")]
    BadRequest(String),

    /// The sale record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage backend failed; `context` prefixes the message
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        source: SaleError,
    },
}

impl ApiError {
    /// Wrap a service error, keeping validation failures client-side
    pub fn from_sale_error(context: &'static str, err: SaleError) -> Self {
        match err {
            SaleError::Validation(validation) => Self::Validation(validation),
            source @ SaleError::StorageFailure(_) => Self::Storage { context, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<UnknownOperation> for ApiError {
    fn from(err: UnknownOperation) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Storage { .. } => error!(error = %self, "Request failed"),
            Self::Validation(validation) => {
                warn!(field = validation.field(), error = %self, "Sale rejected")
            }
            Self::BadRequest(_) => warn!(error = %self, "Request rejected"),
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
