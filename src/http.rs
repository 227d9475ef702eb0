//! HTTP transport — maps the productivity API surface onto a timer store.
//!
//! Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/productivity` — all timers.
//! - `GET /api/productivity/:id` — one timer by id.
//! - `POST /api/productivity` — create a timer; any id in the body is ignored.
//! - `PUT /api/productivity` — replace the timer named by the body's id.
//! - `DELETE /api/productivity/:id` — remove a timer.
//! - `GET /health` — health check returning `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use productivity_api::{http, InMemoryTimerStore};
//!
//! let store = Arc::new(InMemoryTimerStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly
//! http::serve(store, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::warn;
use serde_json::json;

use crate::store::{StoreError, TimerStore};
use crate::timer::TimerRecord;

/// Build an axum `Router` serving the productivity API from the given store.
pub fn router<S: TimerStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/productivity",
            get(list_timers::<S>)
                .post(create_timer::<S>)
                .put(update_timer::<S>),
        )
        .route(
            "/api/productivity/:id",
            get(get_timer::<S>).delete(delete_timer::<S>),
        )
        .with_state(store)
}

/// Serve the API over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: TimerStore + 'static>(
    store: Arc<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// `GET /health` — returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `GET /api/productivity` — all timers as a JSON array.
async fn list_timers<S: TimerStore>(State(store): State<Arc<S>>) -> Response {
    match store.list() {
        Ok(timers) => (StatusCode::OK, Json(timers)).into_response(),
        Err(e) => error_response("list", e),
    }
}

/// `GET /api/productivity/:id` — one timer.
async fn get_timer<S: TimerStore>(State(store): State<Arc<S>>, Path(id): Path<u64>) -> Response {
    match store.get(id) {
        Ok(timer) => (StatusCode::OK, Json(timer)).into_response(),
        Err(e) => error_response("get", e),
    }
}

/// `POST /api/productivity` — create a timer, returning it with its id.
async fn create_timer<S: TimerStore>(
    State(store): State<Arc<S>>,
    Json(record): Json<TimerRecord>,
) -> Response {
    match store.create(record) {
        Ok(timer) => (StatusCode::OK, Json(timer)).into_response(),
        Err(e) => error_response("create", e),
    }
}

/// `PUT /api/productivity` — replace an existing timer.
///
/// The body must carry the id of the timer to replace; a body without one is
/// rejected before the store is consulted.
async fn update_timer<S: TimerStore>(
    State(store): State<Arc<S>>,
    Json(record): Json<TimerRecord>,
) -> Response {
    if record.id.is_none() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "timer id is required" })),
        )
            .into_response();
    }
    match store.update(record) {
        Ok(timer) => (StatusCode::OK, Json(timer)).into_response(),
        Err(e) => error_response("update", e),
    }
}

/// `DELETE /api/productivity/:id` — remove a timer.
async fn delete_timer<S: TimerStore>(State(store): State<Arc<S>>, Path(id): Path<u64>) -> Response {
    match store.delete(id) {
        Ok(()) => (StatusCode::OK, Json(serde_json::Value::Null)).into_response(),
        Err(e) => error_response("delete", e),
    }
}

/// Map a store error to its status code and a `{ "error": ... }` body.
fn error_response(operation: &str, e: StoreError) -> Response {
    warn!("{} failed: {}", operation, e);
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
