use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorBody;

use crate::domain::DomainError;

/// Domain failure on its way out to the client.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        tracing::warn!("[API] {} {}", status.as_u16(), self.0);

        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}
