use crate::handlers;
use axum::extract::DefaultBodyLimit;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

/// Build the HTTP server with all routes and middleware
pub fn build_router() -> Router {
    Router::new()
        .route(
            "/api/v1/parse-resume",
            post(handlers::parse_resume_handler)
                // Resumes arrive as scans of unpredictable size; no cap here
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/healthz", axum::routing::get(handlers::health_handler))
        .layer(TraceLayer::new_for_http())
}
