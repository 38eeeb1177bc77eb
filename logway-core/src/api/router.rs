use crate::api::handlers;
use crate::service::LogService;
use axum::Router;
use axum::routing::get;
use http::Method;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LogService>,
}

/// Every public route, with CORS and request tracing.
pub fn build_router(service: LogService) -> Router {
    let state = AppState {
        service: Arc::new(service),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/logs/:stack/:service", get(handlers::logs))
        .route("/errors/:stack/:service", get(handlers::errors))
        .route("/search", get(handlers::search))
        .route("/summary", get(handlers::summary))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
