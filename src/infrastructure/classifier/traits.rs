use crate::domain::classification::entity::Classification;
use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use thiserror::Error;

/// The uploaded image as received at the proxy boundary, re-sent verbatim to
/// the remote classifier under the multipart field name `file`.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub bytes: Bytes,
    pub filename: String,
    pub content_type: Option<String>,
}

/// Raw reply from the remote classifier. Status and content-type are kept
/// unjudged here; the decision cascade above the gateway owns acceptance.
#[derive(Debug, Clone)]
pub struct RemoteReply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RemoteReply {
    /// Whether the declared content-type is JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

/// Ways the forward call itself can fail before producing any HTTP reply.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("remote classifier did not respond within {0} seconds")]
    TimedOut(u64),
    #[error("connection to remote classifier failed: {0}")]
    Connection(String),
}

/// Outbound seam to the remote classifier's upload endpoint.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Forward an uploaded image, bounded by the configured deadline.
    ///
    /// Returns a reply for every HTTP outcome, success range or not; errors
    /// only when no reply was obtained at all (timeout, DNS, refused, abort).
    async fn forward_upload(&self, upload: &UploadPayload) -> Result<RemoteReply, ForwardError>;
}

/// Local stand-in classifier used when the remote classifier is unreachable
/// or misbehaves.
#[async_trait]
pub trait FallbackClassifier: Send + Sync {
    /// Classify uploaded image bytes. The bytes are ignored by mock
    /// implementations but are part of the call signature.
    async fn classify_image(&self, bytes: &[u8]) -> anyhow::Result<Classification>;

    /// Classify an image by URL.
    async fn classify_url(&self, url: &str) -> anyhow::Result<Classification>;
}
