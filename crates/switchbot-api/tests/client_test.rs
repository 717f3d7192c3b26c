#![allow(clippy::unwrap_used)]
// Integration tests for `SwitchBotClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use switchbot_api::{CommandRequest, Credentials, DeviceStatus, Error, SwitchBotClient};

// ── Helpers ─────────────────────────────────────────────────────────

fn credentials() -> Credentials {
    Credentials::new("test-token", "test-secret".to_owned())
}

async fn setup() -> (MockServer, SwitchBotClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = SwitchBotClient::with_client(reqwest::Client::new(), base_url, credentials());
    (server, client)
}

fn success(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 100,
        "body": body,
        "message": "success"
    }))
}

// ── Signed headers ──────────────────────────────────────────────────

#[tokio::test]
async fn test_requests_carry_signed_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .and(header("Authorization", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(header("charset", "utf8"))
        .and(header_exists("t"))
        .and(header_exists("sign"))
        .and(header_exists("nonce"))
        .respond_with(success(json!({ "deviceList": [], "infraredRemoteList": [] })))
        .mount(&server)
        .await;

    client.list_devices().await.unwrap();
}

#[tokio::test]
async fn test_nonce_is_fresh_per_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .respond_with(success(json!({ "deviceList": [], "infraredRemoteList": [] })))
        .mount(&server)
        .await;

    client.list_devices().await.unwrap();
    client.list_devices().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let nonce = |i: usize| {
        requests[i]
            .headers
            .get("nonce")
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned()
    };
    assert_ne!(nonce(0), nonce(1));

    // `t` stays a decimal millisecond string on the wire.
    let t = requests[0].headers.get("t").unwrap().to_str().unwrap();
    assert!(t.chars().all(|c| c.is_ascii_digit()));
}

// ── Device listing ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .respond_with(success(json!({
            "deviceList": [{
                "deviceId": "A1",
                "deviceName": "Lamp",
                "deviceType": "Color Bulb",
                "hubDeviceId": "H1"
            }],
            "infraredRemoteList": []
        })))
        .mount(&server)
        .await;

    let list = client.list_devices().await.unwrap();

    assert_eq!(list.devices.len(), 1);
    assert_eq!(list.devices[0].device_id, "A1");
    assert_eq!(list.devices[0].device_name, "Lamp");
    assert_eq!(list.devices[0].device_type, "Color Bulb");
    assert_eq!(list.devices[0].hub_device_id.as_deref(), Some("H1"));
    assert!(list.remotes.is_empty());
}

#[tokio::test]
async fn test_list_devices_filters_unobserved_remotes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .respond_with(success(json!({
            "deviceList": [],
            "infraredRemoteList": [
                {
                    "deviceId": "R1",
                    "deviceName": "Living Room TV",
                    "remoteType": "TV",
                    "hubDeviceId": "H1"
                },
                {
                    "deviceId": "R2",
                    "deviceName": "Misc Buttons",
                    "remoteType": "Others",
                    "hubDeviceId": "H1"
                }
            ]
        })))
        .mount(&server)
        .await;

    let list = client.list_devices().await.unwrap();

    assert_eq!(list.remotes.len(), 1);
    assert_eq!(list.remotes[0].device_id, "R1");
    assert_eq!(list.remotes[0].remote_type, "TV");
}

// ── Classification ──────────────────────────────────────────────────

#[tokio::test]
async fn test_http_403_is_authentication_failure() {
    let (server, client) = setup().await;

    // Envelope content must not matter on 403.
    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "statusCode": 100, "body": {} })),
        )
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Authentication)),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_http_500_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "statusCode": 100, "body": {} })),
        )
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Api { status: 500, .. })),
        "expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_envelope_161_is_device_offline() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices/D1/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 161, "body": {} })),
        )
        .mount(&server)
        .await;

    let result = client.get_status("D1").await;

    assert!(
        matches!(result, Err(Error::DeviceOffline { code: 161 })),
        "expected DeviceOffline, got: {result:?}"
    );
}

#[tokio::test]
async fn test_envelope_171_is_device_offline() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices/D1/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "statusCode": 171, "body": {} })),
        )
        .mount(&server)
        .await;

    let result = client.get_status("D1").await;

    assert!(result.unwrap_err().is_device_offline());
}

#[tokio::test]
async fn test_unrecognized_envelope_status_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 190,
            "body": {},
            "message": "device internal error"
        })))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    match result {
        Err(Error::Api { status: 200, body }) => {
            assert_eq!(body, "device internal error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connectivity_error_is_transport() {
    // Nothing listens on port 1; the call must fail before any
    // classification happens.
    let base_url = Url::parse("http://127.0.0.1:1").unwrap();
    let client = SwitchBotClient::with_client(reqwest::Client::new(), base_url, credentials());

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}

// ── Device status ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_status_hub2() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1.1/devices/HUB2/status"))
        .respond_with(success(json!({
            "deviceId": "HUB2",
            "deviceType": "Hub 2",
            "hubDeviceId": "000000000000",
            "version": "V1.1-1.2",
            "temperature": 22.4,
            "humidity": 38.0
        })))
        .mount(&server)
        .await;

    let status = client.get_status("HUB2").await.unwrap();

    let DeviceStatus::Hub2(hub) = status else {
        panic!("expected Hub2 status");
    };
    assert_eq!(hub.device_id, "HUB2");
    assert_eq!(hub.hub_device_id, None);
    assert!((hub.humidity - 38.0).abs() < f64::EPSILON);
}

// ── Commands ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_send_command_body_shape() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1.1/devices/D1/commands"))
        .and(body_json(json!({
            "commandType": "command",
            "command": "turnOn",
            "parameter": "default"
        })))
        .respond_with(success(json!({})))
        .mount(&server)
        .await;

    client
        .send_command("D1", &CommandRequest::new("turnOn"))
        .await
        .unwrap();
}

// ── Webhooks ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_webhook_configuration() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1.1/webhook/queryWebhook"))
        .and(body_json(json!({ "action": "queryUrl" })))
        .respond_with(success(json!({ "urls": ["https://example.com/hook"] })))
        .mount(&server)
        .await;

    let config = client.get_webhook_configuration().await.unwrap();

    assert_eq!(config.urls, ["https://example.com/hook"]);
}

#[tokio::test]
async fn test_setup_webhook() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1.1/webhook/setupWebhook"))
        .and(body_json(json!({
            "action": "setupWebhook",
            "url": "https://example.com/hook",
            "deviceList": "ALL"
        })))
        .respond_with(success(json!({})))
        .mount(&server)
        .await;

    client.setup_webhook("https://example.com/hook").await.unwrap();
}

#[tokio::test]
async fn test_delete_webhook() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1.1/webhook/deleteWebhook"))
        .and(body_json(json!({
            "action": "deleteWebhook",
            "url": "https://example.com/hook"
        })))
        .respond_with(success(json!({})))
        .mount(&server)
        .await;

    client.delete_webhook("https://example.com/hook").await.unwrap();
}
