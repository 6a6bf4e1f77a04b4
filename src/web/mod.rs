//! OdontoBuild Web Server
//!
//! Server-rendered pages built with Axum and Leptos.
//!
//! # Routes
//!
//! ## Staff
//! - `GET /` - Login form (`?expired=1` adds a session-expired notice)
//! - `POST /` - Login submit
//! - `POST /logout` - End the session
//! - `GET /dashboard` - Weekly agenda (`?week=YYYY-MM-DD`)
//!
//! ## Public
//! - `GET /site/:domain` - Tenant site with booking widget
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{WebError, WebResult};
pub use state::AppState;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route(
            "/",
            get(routes::login::login_page).post(routes::login::login_submit),
        )
        .route("/logout", post(routes::login::logout))
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/site/:domain", get(routes::site::public_site))
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound(uri.path().to_string())
}

/// Start the web server
pub async fn serve(state: AppState, addr: &str) -> Result<(), WebError> {
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("OdontoBuild web listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("OdontoBuild web shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
