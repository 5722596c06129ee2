use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{dto::ErrorResponse, mailer::DispatchError};

/// Every failure a submit endpoint can answer with.
///
/// Rendered as `{"detail": "..."}`: rejected payloads keep the status axum
/// assigned to them (422 for missing or mistyped fields), dispatch failures
/// become 500.
#[derive(Debug)]
pub enum ApiError {
    InvalidPayload(JsonRejection),
    Dispatch(DispatchError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection)
    }
}

impl From<DispatchError> for ApiError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::InvalidPayload(rejection) => (rejection.status(), rejection.body_text()),
            Self::Dispatch(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
