use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{BookingRequest, ContactRequest, ErrorResponse, SendEmailResponse},
    handlers::error::ApiError,
    service::RelayService,
};

#[derive(OpenApi)]
#[openapi(
    paths(send_booking, send_contact),
    components(schemas(BookingRequest, ContactRequest, SendEmailResponse, ErrorResponse)),
    tags(
        (name = "relay", description = "Form submissions forwarded by email")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/send-booking",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking email sent", body = SendEmailResponse),
        (status = 422, description = "Missing or mistyped field", body = ErrorResponse),
        (status = 500, description = "Email could not be delivered", body = ErrorResponse)
    ),
    tag = "relay"
)]
#[debug_handler]
pub async fn send_booking(
    State(service): State<Arc<RelayService>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected booking request: {}", rejection.body_text());
            return ApiError::from(rejection).into_response();
        }
    };

    match service.send_booking(request).await {
        Ok(r) => (StatusCode::OK, Json(r)).into_response(),
        Err(e) => {
            tracing::error!("Failed to send booking email: {e}");
            ApiError::from(e).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/send",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact form email sent", body = SendEmailResponse),
        (status = 422, description = "Missing or mistyped field", body = ErrorResponse),
        (status = 500, description = "Email could not be delivered", body = ErrorResponse)
    ),
    tag = "relay"
)]
#[debug_handler]
pub async fn send_contact(
    State(service): State<Arc<RelayService>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected contact request: {}", rejection.body_text());
            return ApiError::from(rejection).into_response();
        }
    };

    match service.send_contact(request).await {
        Ok(r) => (StatusCode::OK, Json(r)).into_response(),
        Err(e) => {
            tracing::error!("Failed to send contact email: {e}");
            ApiError::from(e).into_response()
        }
    }
}
