//! Response bodies
//!
//! JSON shapes returned by the API and the error → status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::PostboxError;

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl PostboxError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostboxError::Validation { .. }
            | PostboxError::InvalidSortField(_)
            | PostboxError::InvalidDirection(_)
            | PostboxError::MalformedBody => StatusCode::BAD_REQUEST,
            PostboxError::NotFound(_) | PostboxError::InvalidId(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PostboxError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = if self.is_client_error() {
            self.to_string()
        } else {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
