use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    // The proxy holds no connections of its own; reachability of the remote
    // classifier is deliberately not part of liveness, since the service
    // degrades to mock results without it.
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
