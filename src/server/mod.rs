//! HTTP server for the contacts API.
//!
//! ## Routes
//!
//! - `GET /contacts?page=&limit=`: list one page of contacts.
//! - `POST /contacts`: create a contact from `{name, email, phone}`.
//! - `DELETE /contacts/:id`: delete a contact.
//! - `GET /health`: liveness plus request counters.
//!
//! Every route allows cross-origin requests from any origin.

pub mod handlers;
pub mod middleware;

use crate::observability::MetricsTracker;
use crate::services::ContactService;
use anyhow::Result;
use axum::routing::{delete, get};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    pub metrics: MetricsTracker,
    pub max_page_limit: u32,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>, max_page_limit: u32) -> Self {
        Self {
            service,
            metrics: MetricsTracker::new(),
            max_page_limit,
        }
    }
}

/// Build the axum `Router` for the contacts API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route("/contacts/:id", delete(handlers::delete_contact))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(axum::middleware::from_fn_with_state(
            state.metrics.clone(),
            middleware::trace_requests,
        ))
        .with_state(state)
}

/// Serve the API on `listener` until Ctrl-C is received.
pub async fn run_server(listener: TcpListener, state: AppState) -> Result<()> {
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
