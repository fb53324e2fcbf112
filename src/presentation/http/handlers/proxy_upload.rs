use crate::{
    application::classify_upload::use_case::ClassifyUploadUseCase,
    infrastructure::classifier::traits::UploadPayload,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State},
};

/// Proxy endpoint for upload classification.
///
/// A missing `file` field is the only hard client failure; everything the
/// remote classifier can do wrong is absorbed into a mock fallback by the use
/// case. Any other processing failure (malformed multipart body) surfaces as
/// a 500 with no classification payload.
pub async fn classify_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    {
        match field.name().unwrap_or("") {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                upload = Some(UploadPayload {
                    bytes,
                    filename,
                    content_type,
                });
            }
            _ => {}
        }
    }

    let upload = upload.ok_or(AppError::BadRequest("No file provided".into()))?;

    tracing::info!("Attempting to connect to remote classifier");
    let use_case = ClassifyUploadUseCase::new(state.gateway.clone(), state.fallback.clone());
    let body = use_case.execute(upload).await?;
    Ok(Json(body))
}
