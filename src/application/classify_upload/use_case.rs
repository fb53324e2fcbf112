use super::dto::{NOTE_CONNECTION_FAILED, NOTE_NON_JSON, NOTE_REMOTE_ERROR};
use crate::{
    domain::classification::errors::DomainError,
    infrastructure::classifier::traits::{FallbackClassifier, RemoteGateway, UploadPayload},
};
use std::sync::Arc;

/// Orchestrates one upload classification: forward to the remote classifier,
/// and on any disqualifying outcome substitute a mock result annotated with
/// the reason.
///
/// Remote unavailability is never fatal here. The only error this use case
/// surfaces is a failure to produce the mock substitute itself.
pub struct ClassifyUploadUseCase {
    gateway: Arc<dyn RemoteGateway>,
    fallback: Arc<dyn FallbackClassifier>,
}

impl ClassifyUploadUseCase {
    pub fn new(gateway: Arc<dyn RemoteGateway>, fallback: Arc<dyn FallbackClassifier>) -> Self {
        Self { gateway, fallback }
    }

    /// The acceptance cascade, evaluated in this exact order:
    /// call raised, then non-2xx status, then non-JSON content-type, then
    /// passthrough. A 2xx JSON reply whose body fails to parse is treated the
    /// same as a raised call and carries the connection-failed note.
    pub async fn execute(&self, upload: UploadPayload) -> Result<serde_json::Value, DomainError> {
        let reply = match self.gateway.forward_upload(&upload).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("Error connecting to remote classifier: {}", err);
                return self.degrade(&upload, NOTE_CONNECTION_FAILED).await;
            }
        };

        if !reply.status.is_success() {
            tracing::warn!(status = %reply.status, "Remote classifier returned an error");
            return self.degrade(&upload, NOTE_REMOTE_ERROR).await;
        }

        if !reply.is_json() {
            tracing::warn!(
                content_type = reply.content_type.as_deref().unwrap_or("<missing>"),
                "Remote classifier returned a non-JSON response"
            );
            return self.degrade(&upload, NOTE_NON_JSON).await;
        }

        // Pass the remote body through unchanged: the wire field name `class`
        // and any extra fields the remote sends must survive.
        match serde_json::from_slice::<serde_json::Value>(&reply.body) {
            Ok(body) => Ok(body),
            Err(err) => {
                tracing::warn!("Remote classifier sent an unparseable JSON body: {}", err);
                self.degrade(&upload, NOTE_CONNECTION_FAILED).await
            }
        }
    }

    async fn degrade(
        &self,
        upload: &UploadPayload,
        note: &str,
    ) -> Result<serde_json::Value, DomainError> {
        tracing::info!("Falling back to mock classifier");
        let mock = self
            .fallback
            .classify_image(&upload.bytes)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .with_note(note);
        serde_json::to_value(&mock).map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
