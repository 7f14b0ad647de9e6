use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::errors::LookupError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub players: usize,
}

/// Lookup failure mapped to an HTTP status
pub struct ApiError(pub LookupError);

impl From<LookupError> for ApiError {
    fn from(error: LookupError) -> Self {
        Self(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            LookupError::MalformedRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
