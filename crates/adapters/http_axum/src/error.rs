//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use villa_domain::error::VillaError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`VillaError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(VillaError);

impl From<VillaError> for ApiError {
    fn from(err: VillaError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code for the wrapped error category.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            VillaError::BadRequest(_) | VillaError::Validation(_) => StatusCode::BAD_REQUEST,
            VillaError::NotFound(_) => StatusCode::NOT_FOUND,
            VillaError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self.0, "request rejected");
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
