use std::net::IpAddr;

use checkmobi::{
    ApiSecret, CallOptions, CheckMobiClient, CheckMobiError, MessageId, SendMessage, ValidationId,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET: &str = "test-secret";

fn client_for(server: &MockServer) -> CheckMobiClient {
    CheckMobiClient::builder(ApiSecret::new(SECRET).unwrap())
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn send_message_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sms/send"))
        .and(header("Authorization", SECRET))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "to": "+40700000000",
            "text": "hello",
            "platform": "web"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"abc"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut message = SendMessage::new("+40700000000", "hello");
    message.platform = Some("web".to_owned());

    let response = client_for(&server)
        .send_message(&message, CallOptions::default())
        .await
        .unwrap();
    assert_eq!(response.id, "abc");

    server.verify().await;
}

#[tokio::test]
async fn invalid_message_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&SendMessage::new("+40700000000", " "), CallOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Required options are missing");

    server.verify().await;
}

#[tokio::test]
async fn validation_flow_uses_id_in_status_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/validation/request"))
        .and(body_json(json!({"number": "+40700000000", "type": "ivr"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"id":"V-42","type":"ivr"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/validation/status/V-42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"validated":true,"number":"+40700000000"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let started = client
        .validate_phone("+40700000000", "IVR", None, None, CallOptions::default())
        .await
        .unwrap();

    let id = ValidationId::new(started.id).unwrap();
    let status = client
        .get_validate_status(&id, CallOptions::default())
        .await
        .unwrap();
    assert!(status.validated);
    assert_eq!(status.number.as_deref(), Some("+40700000000"));

    server.verify().await;
}

#[tokio::test]
async fn client_ip_header_is_not_sticky() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/prefixes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ip = IpAddr::from([198, 51, 100, 4]);
    client
        .get_countries(CallOptions::with_client_ip(ip))
        .await
        .unwrap();
    client.get_prefixes(CallOptions::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let client_ip = |idx: usize| {
        requests[idx]
            .headers
            .get("x-client-ip")
            .map(|value| value.to_str().unwrap().to_owned())
    };
    assert_eq!(client_ip(0).as_deref(), Some("198.51.100.4"));
    assert_eq!(client_ip(1), None);

    server.verify().await;
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let server = MockServer::start().await;

    Mock::given(path("/v1/sms/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"nope"}"#))
        .mount(&server)
        .await;
    Mock::given(path("/v1/checknumber"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"bad token"}"#))
        .mount(&server)
        .await;
    Mock::given(path("/v1/prefixes"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .get_message_information(&MessageId::new("missing").unwrap(), CallOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CheckMobiError::Status { status: 404, .. }));
    assert!(!err.to_string().contains("nope"));

    let err = client
        .phone_information("+40700000000", CallOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CheckMobiError::Rejected {
            status: 401,
            message: Some(ref message),
            ..
        } if message == "bad token"
    ));

    let err = client
        .get_prefixes(CallOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CheckMobiError::HttpStatus {
            status: 418,
            body: Some(ref body)
        } if body == "teapot"
    ));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = CheckMobiClient::builder(ApiSecret::new(SECRET).unwrap())
        .base_url("http://127.0.0.1:1/v1/")
        .build()
        .unwrap();

    let err = client
        .get_prefixes(CallOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CheckMobiError::Transport(_)));
}
