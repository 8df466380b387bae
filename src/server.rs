//! HTTP server initialization and runtime setup.
//!
//! Wires the email provider into the contact service and runs the Axum server
//! until a shutdown signal arrives.

use crate::application::services::ContactService;
use crate::config::Config;
use crate::infrastructure::email::{EmailProvider, ResendProvider};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
pub fn build_state(config: &Config) -> AppState {
    let provider: Arc<dyn EmailProvider> = Arc::new(ResendProvider::new(
        config.resend_api_url.clone(),
        config.resend_api_key.clone(),
    ));

    if provider.is_configured() {
        tracing::info!("Email provider ready");
    } else {
        tracing::warn!("RESEND_API_KEY is not set; contact submissions will fail");
    }

    let contact_service = Arc::new(ContactService::new(
        provider,
        config.contact_from.clone(),
        config.contact_to.clone(),
    ));

    AppState::new(contact_service)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
