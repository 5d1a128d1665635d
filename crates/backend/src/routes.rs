use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;

/// Route table of the log-record service.
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/logs",
            get(handlers::logs::list_all).delete(handlers::logs::delete_all),
        )
        .route("/logs/extract", post(handlers::logs::extract))
        .route(
            "/log/:id",
            get(handlers::logs::get_by_id).delete(handlers::logs::delete_by_id),
        )
        .layer(cors)
}
