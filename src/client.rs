//! Typed client for the remote flower-classification endpoints.
//!
//! This is the requesting-context half of the system: it turns one user action
//! into exactly one outbound call (no retries, no caching, no deduplication)
//! and normalizes the outcome into a [`Classification`] or a [`ClientError`].

use crate::config::RemoteEndpoints;
use crate::domain::classification::entity::{Classification, ClassificationRequest};
use reqwest::multipart::{Form, Part};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered outside the success range; carries the
    /// server-provided message when one was present.
    #[error("Error: {0}")]
    Api(String),

    /// The request never completed, or the response body was unreadable.
    #[error("Network error: {0}")]
    Network(String),

    /// Rejected before any network call: no image URL was provided.
    #[error("No image URL provided")]
    EmptyUrl,
}

pub struct ClassifierClient {
    http: reqwest::Client,
    remote: RemoteEndpoints,
}

impl ClassifierClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(remote: RemoteEndpoints) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, remote })
    }

    /// Dispatch one request to whichever endpoint its variant targets.
    pub async fn classify(
        &self,
        request: ClassificationRequest,
    ) -> Result<Classification, ClientError> {
        match request {
            ClassificationRequest::File { bytes, filename } => {
                self.classify_by_upload(bytes.to_vec(), &filename).await
            }
            ClassificationRequest::Url { url } => self.classify_by_url(&url).await,
        }
    }

    /// Classify an uploaded image. Sends the bytes as the multipart field
    /// `file` to the upload endpoint.
    pub async fn classify_by_upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<Classification, ClientError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(self.remote.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::handle_response(response).await
    }

    /// Classify an image by URL. Sends a JSON body `{"url": ...}` to the URL
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyUrl`] before any network call when `url`
    /// is empty.
    pub async fn classify_by_url(&self, url: &str) -> Result<Classification, ClientError> {
        if url.is_empty() {
            return Err(ClientError::EmptyUrl);
        }

        let response = self
            .http
            .post(self.remote.url_url())
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: reqwest::Response) -> Result<Classification, ClientError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // Both branches read the body as JSON first; a body that is not JSON
        // at all surfaces as a network-level failure.
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = body["error"].as_str().unwrap_or("Unknown error").to_string();
            return Err(ClientError::Api(message));
        }

        serde_json::from_value(body).map_err(|e| ClientError::Network(e.to_string()))
    }
}
