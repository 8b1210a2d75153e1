//! HTTP API.
//!
//! | Method | Path                                  | Response                  |
//! |--------|---------------------------------------|---------------------------|
//! | GET    | `/api/health`                         | `{"status": "ok"}`        |
//! | GET    | `/api/lessons`                        | `[LessonSummary]`         |
//! | GET    | `/api/lessons/{lesson_id}`            | `Lesson`                  |
//! | POST   | `/api/lessons/{lesson_id}/evaluate`   | `SpeechEvaluationResult`  |
//!
//! The evaluate endpoint takes `multipart/form-data` with an `audio` file and
//! a `dialogue_id` text field.

pub mod error;
mod routes;

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::ServerConfig;
use crate::lessons::LessonCatalog;
use crate::pipeline::SpeechEvaluator;

pub use error::ApiError;

/// State shared by every handler.  Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<LessonCatalog>,
    pub evaluator: SpeechEvaluator,
}

impl AppState {
    pub fn new(catalog: LessonCatalog, evaluator: SpeechEvaluator) -> Self {
        Self {
            catalog: Arc::new(catalog),
            evaluator,
        }
    }
}

/// Build the router with all routes and middleware attached.
///
/// A panic inside a handler becomes a plain 500 response instead of a
/// dropped connection.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/lessons", get(routes::list_lessons))
        .route("/api/lessons/{lesson_id}", get(routes::get_lesson))
        .route("/api/lessons/{lesson_id}/evaluate", post(routes::evaluate))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}

/// Bind `config.bind_addr()` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    log::info!("server: listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state, config.max_upload_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server: shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("server: cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
