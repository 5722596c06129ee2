pub mod error;
pub mod rest;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::service::RelayService;

pub fn router(service: Arc<RelayService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/send-booking", post(rest::send_booking))
        .route("/send", post(rest::send_contact))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        )
        .with_state(service)
        // Browsers submit the forms cross-origin, credentials included
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Hello from mail relay!").into_response()
}
