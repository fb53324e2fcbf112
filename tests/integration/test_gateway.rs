use bytes::Bytes;
use flora_api::config::RemoteEndpoints;
use flora_api::infrastructure::classifier::remote_gateway::ReqwestRemoteGateway;
use flora_api::infrastructure::classifier::traits::{ForwardError, RemoteGateway, UploadPayload};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoints(base_url: String) -> RemoteEndpoints {
    RemoteEndpoints {
        base_url,
        upload_path: "/predict/upload".into(),
        url_path: "/predict/url".into(),
    }
}

fn upload() -> UploadPayload {
    UploadPayload {
        bytes: Bytes::from_static(b"fake image bytes"),
        filename: "flower.jpg".into(),
        content_type: Some("image/jpeg".into()),
    }
}

#[tokio::test]
async fn forward_returns_the_raw_json_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"class":"Tulip","confidence":95.5}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let gateway = ReqwestRemoteGateway::new(&endpoints(server.uri()), 5).expect("gateway");
    let reply = gateway.forward_upload(&upload()).await.expect("reply");

    assert_eq!(reply.status.as_u16(), 200);
    assert!(reply.is_json());
    assert_eq!(reply.body, Bytes::from_static(br#"{"class":"Tulip","confidence":95.5}"#));
}

#[tokio::test]
async fn error_statuses_are_replies_not_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let gateway = ReqwestRemoteGateway::new(&endpoints(server.uri()), 5).expect("gateway");
    let reply = gateway.forward_upload(&upload()).await.expect("reply");

    // judging the status belongs to the cascade above the gateway
    assert_eq!(reply.status.as_u16(), 500);
}

#[tokio::test]
async fn non_json_content_type_is_reported_unjudged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("flower probably", "text/plain"))
        .mount(&server)
        .await;

    let gateway = ReqwestRemoteGateway::new(&endpoints(server.uri()), 5).expect("gateway");
    let reply = gateway.forward_upload(&upload()).await.expect("reply");

    assert!(!reply.is_json());
    assert_eq!(reply.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn slow_remote_is_cancelled_at_the_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_raw(r#"{"class":"Rose","confidence":90.0}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let gateway = ReqwestRemoteGateway::new(&endpoints(server.uri()), 1).expect("gateway");
    let err = gateway.forward_upload(&upload()).await.unwrap_err();
    assert!(matches!(err, ForwardError::TimedOut(1)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    // nothing listens on port 1
    let gateway =
        ReqwestRemoteGateway::new(&endpoints("http://127.0.0.1:1".into()), 2).expect("gateway");
    let err = gateway.forward_upload(&upload()).await.unwrap_err();
    assert!(matches!(err, ForwardError::Connection(_)), "got {err:?}");
}
