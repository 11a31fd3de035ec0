//! Roppou webhook - Chat bot transport for the statute article resolver.
//!
//! Receives chat webhook deliveries, resolves each text message with
//! [`roppou_resolver::Resolver`] and posts the reply back to the platform.

pub mod config;
pub mod error;
pub mod handlers;
pub mod line;
pub mod models;
pub mod signature;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/callback", post(handlers::callback))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
