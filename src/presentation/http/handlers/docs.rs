use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Flora Classifier API",
            "version": "1.0.0"
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/proxy/upload": { "post": { "summary": "Classify an uploaded flower image (multipart field `file`); degrades to a mock result with an explanatory note when the remote classifier is unavailable" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
