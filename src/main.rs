mod config;
mod dto;
mod handlers;
mod mailer;
mod service;

use std::sync::Arc;

use mailer::SmtpDispatcher;
use service::RelayService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt().init();

    // Optional .env next to the binary
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {e}");
    }

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load mail relay config: {e}");
        panic!("failed to load mail relay config: {e}");
    });
    tracing::info!("Successfully loaded mail relay config");
    tracing::info!("Configured mail account: {:?}", cfg.mail);

    // Setup service
    let dispatcher = SmtpDispatcher::new(cfg.mail).unwrap_or_else(|e| {
        tracing::error!("Invalid mail configuration: {e}");
        panic!("invalid mail configuration: {e}");
    });
    let service = Arc::new(RelayService::new(Arc::new(dispatcher)));

    // Setup router
    let router = handlers::router(service);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.listen_port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Failed to read bound address");

    tracing::info!("Mail relay starting, listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
