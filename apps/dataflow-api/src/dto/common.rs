//! Status envelopes shared by every endpoint

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for a successful write
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "success")]
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `error`
    #[schema(example = "error")]
    pub status: String,
    /// Error description
    #[schema(example = "quantity_sold must be greater than 0")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: error.into(),
        }
    }
}
