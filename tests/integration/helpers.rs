use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bytes::Bytes;
use flora_api::{
    config::{Config, RemoteEndpoints},
    infrastructure::classifier::{
        mock_classifier::SampleSetClassifier,
        traits::{ForwardError, RemoteGateway, RemoteReply, UploadPayload},
    },
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_LABELS: [&str; 3] = ["Sunflower", "Tulip", "Orchid"];

/// What the stubbed remote classifier does for every forwarded upload.
#[derive(Clone)]
pub enum RemoteBehavior {
    TimedOut,
    ConnectionRefused,
    Reply {
        status: u16,
        content_type: Option<String>,
        body: Vec<u8>,
    },
}

struct StubGateway {
    behavior: RemoteBehavior,
}

#[async_trait]
impl RemoteGateway for StubGateway {
    async fn forward_upload(&self, _upload: &UploadPayload) -> Result<RemoteReply, ForwardError> {
        match &self.behavior {
            RemoteBehavior::TimedOut => Err(ForwardError::TimedOut(30)),
            RemoteBehavior::ConnectionRefused => {
                Err(ForwardError::Connection("connection refused".into()))
            }
            RemoteBehavior::Reply {
                status,
                content_type,
                body,
            } => Ok(RemoteReply {
                status: StatusCode::from_u16(*status).expect("valid status"),
                content_type: content_type.clone(),
                body: Bytes::from(body.clone()),
            }),
        }
    }
}

fn build_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        remote: RemoteEndpoints {
            base_url: "http://127.0.0.1:9".to_string(),
            upload_path: "/predict/upload".to_string(),
            url_path: "/predict/url".to_string(),
        },
        forward_timeout_seconds: 30,
        mock_labels: TEST_LABELS.iter().map(|s| s.to_string()).collect(),
        mock_delay_ms: 0,
    }
}

/// Build the router with a stubbed remote classifier and the real mock
/// fallback (zero delay, the test label set).
pub fn spawn_app(behavior: RemoteBehavior) -> Router {
    let config = build_config();
    let state = AppState {
        gateway: Arc::new(StubGateway { behavior }),
        fallback: Arc::new(SampleSetClassifier::new(config.mock_labels.clone(), 0)),
        config,
    };
    create_router(state)
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    use tower::ServiceExt;
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

/// Hand-built multipart body carrying one `file` part.
pub fn multipart_file_body(image_bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = format!("----flora-boundary-{}", Uuid::now_v7());
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"flower.jpg\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(image_bytes);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    (boundary, body)
}

/// Multipart body with unrelated fields but no `file` part.
pub fn multipart_body_without_file() -> (String, Vec<u8>) {
    let boundary = format!("----flora-boundary-{}", Uuid::now_v7());
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nnot a file\r\n--{b}--\r\n",
        b = boundary
    );
    (boundary, body.into_bytes())
}

pub fn upload_request(boundary: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/proxy/upload")
        .header(
            axum::http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .expect("failed to build upload request")
}
