use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ContentAnalyzer, FileLoader};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, upload_handler, upload_info_handler};
use crate::presentation::state::AppState;

const TIMEOUT_GRACE: Duration = Duration::from_secs(5);

pub fn create_router<F, A>(state: AppState<F, A>) -> Router
where
    F: FileLoader + ?Sized + 'static,
    A: ContentAnalyzer + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Backstop only: the upload handler enforces the configured timeout itself.
    let request_timeout = Duration::from_secs(state.settings.server.request_timeout_secs)
        + TIMEOUT_GRACE;
    let body_limit = state.settings.server.max_body_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/upload",
            get(upload_info_handler).post(upload_handler::<F, A>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
