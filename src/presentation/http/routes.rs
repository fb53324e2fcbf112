use super::{
    handlers::{docs, health, proxy_upload},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Classification proxy
        .route("/api/proxy/upload", post(proxy_upload::classify_upload))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
