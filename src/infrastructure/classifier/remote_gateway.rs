use super::traits::{ForwardError, RemoteGateway, RemoteReply, UploadPayload};
use crate::config::RemoteEndpoints;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Forwards uploads to the remote classifier over reqwest.
///
/// The whole exchange (send plus body read) runs under a single
/// `tokio::time::timeout` deadline, so cancellation happens at one boundary
/// and a stalled body read cannot outlive the budget either.
pub struct ReqwestRemoteGateway {
    client: reqwest::Client,
    upload_url: String,
    timeout_seconds: u64,
}

impl ReqwestRemoteGateway {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(remote: &RemoteEndpoints, timeout_seconds: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            upload_url: remote.upload_url(),
            timeout_seconds,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> ForwardError {
        if err.is_timeout() {
            return ForwardError::TimedOut(self.timeout_seconds);
        }
        ForwardError::Connection(err.to_string())
    }

    fn rebuild_form(&self, upload: &UploadPayload) -> Result<Form, ForwardError> {
        let mut part = Part::bytes(upload.bytes.to_vec()).file_name(upload.filename.clone());
        if let Some(ct) = upload.content_type.as_deref() {
            part = part
                .mime_str(ct)
                .map_err(|e| ForwardError::Connection(format!("invalid content type: {}", e)))?;
        }
        Ok(Form::new().part("file", part))
    }
}

#[async_trait]
impl RemoteGateway for ReqwestRemoteGateway {
    async fn forward_upload(&self, upload: &UploadPayload) -> Result<RemoteReply, ForwardError> {
        let form = self.rebuild_form(upload)?;
        let deadline = Duration::from_secs(self.timeout_seconds);

        let exchange = async {
            let response = self.client.post(&self.upload_url).multipart(form).send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string());
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(RemoteReply {
                status,
                content_type,
                body,
            })
        };

        match tokio::time::timeout(deadline, exchange).await {
            Err(_) => Err(ForwardError::TimedOut(self.timeout_seconds)),
            Ok(Err(err)) => Err(self.map_send_error(err)),
            Ok(Ok(reply)) => Ok(reply),
        }
    }
}
