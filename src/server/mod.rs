//! HTTP API server.
//!
//! Routes:
//! - `POST /analyze`: analyze one text
//! - `POST /batch`: analyze a list of texts
//! - `GET /health`: liveness check
//! - `GET /history`: every analysis recorded since startup

mod error;
mod handlers;
mod timing;

use std::net::SocketAddr;

use anyhow::Context;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

pub use error::{ApiError, ErrorBody};
pub use handlers::{AnalyzeRequest, BatchRequest, HealthResponse};

use crate::services::AnalysisService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: AnalysisService,
}

impl AppState {
    pub fn new(service: AnalysisService) -> Self {
        Self { service }
    }
}

/// Build the API router around an analysis service.
pub fn router(service: AnalysisService, cors: bool) -> Router {
    let app = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/batch", post(handlers::batch_analyze))
        .route("/health", get(handlers::health_check))
        .route("/history", get(handlers::get_history))
        .layer(middleware::from_fn(timing::log_request_time))
        .with_state(AppState::new(service));

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Bind `bind` and serve until Ctrl-C or SIGTERM.
pub async fn serve(service: AnalysisService, bind: &str, cors: bool) -> anyhow::Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address {}", bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("sentiment-api listening on http://{}", addr);
    axum::serve(listener, router(service, cors))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received");
}
