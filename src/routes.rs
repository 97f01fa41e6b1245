//! HTTP surface: the route table and shared application state.

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::session::SessionFactory;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn SessionFactory>,
}

impl AppState {
    pub fn new(config: Arc<Config>, sessions: Arc<dyn SessionFactory>) -> Self {
        Self { config, sessions }
    }
}

// Lets handlers declare a `DbSession` argument.
impl FromRef<AppState> for Arc<dyn SessionFactory> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

/// Builds the application router.
///
/// Only `GET` is routed; other methods on `/` and `/health` get
/// `405 Method Not Allowed` and unknown paths `404 Not Found`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn read_root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World",
    })
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
