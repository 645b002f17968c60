#![allow(clippy::unwrap_used)]
// Integration tests for `NetcfgClient` using wiremock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use netcfg_api::models::Ipv4Config;
use netcfg_api::{Error, LogKind, LogSink, NetcfgClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<(LogKind, String, String)>>,
}

impl LogSink for RecordingSink {
    fn record(&self, kind: LogKind, message: &str, content: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((kind, message.to_owned(), content.to_owned()));
    }
}

impl RecordingSink {
    fn kinds(&self) -> Vec<LogKind> {
        self.entries.lock().unwrap().iter().map(|e| e.0).collect()
    }

    fn entry(&self, idx: usize) -> (LogKind, String, String) {
        self.entries.lock().unwrap()[idx].clone()
    }
}

async fn setup_with(transport: TransportConfig) -> (MockServer, NetcfgClient, Arc<RecordingSink>) {
    let server = MockServer::start().await;
    let sink = Arc::new(RecordingSink::default());
    let client = NetcfgClient::with_client(
        reqwest::Client::new(),
        &Url::parse(&server.uri()).unwrap(),
        transport,
        sink.clone(),
    )
    .unwrap();
    (server, client, sink)
}

async fn setup() -> (MockServer, NetcfgClient, Arc<RecordingSink>) {
    setup_with(TransportConfig::default()).await
}

// ── Logging side effects ────────────────────────────────────────────

#[tokio::test]
async fn test_get_logs_request_and_success() {
    let (server, client, sink) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "name": "Ethernet", "status": "Up" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = client.list_interfaces().await.unwrap();
    assert_eq!(body[0]["name"], "Ethernet");

    assert_eq!(sink.kinds(), vec![LogKind::Info, LogKind::Success]);

    let (_, message, content) = sink.entry(0);
    assert_eq!(message, "Request: GET /api/v1/interfaces");
    assert!(content.is_empty());

    let (_, message, content) = sink.entry(1);
    assert_eq!(message, "Response: 200 OK");
    assert!(content.contains("\"Ethernet\""));
    assert!(content.contains('\n'), "body should be pretty-printed");
}

#[tokio::test]
async fn test_request_body_is_logged_without_password() {
    let (server, client, sink) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/hotspot"))
        .and(body_json(json!({ "ssid": "lab-ap", "password": "correct-horse" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let secret = SecretString::from("correct-horse".to_string());
    client.configure_hotspot("lab-ap", &secret).await.unwrap();

    let (kind, message, content) = sink.entry(0);
    assert_eq!(kind, LogKind::Info);
    assert_eq!(message, "Request: POST /api/v1/hotspot");
    assert!(content.contains("lab-ap"));
    assert!(!content.contains("correct-horse"));
}

#[tokio::test]
async fn test_error_payload_is_surfaced_and_logged() {
    let (server, client, sink) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces/eth9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "interface eth9 not found" })),
        )
        .mount(&server)
        .await;

    let err = client.get_interface("eth9").await.unwrap_err();
    match &err {
        Error::Status {
            status,
            message,
            body,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "interface eth9 not found");
            assert!(body.is_some());
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
    assert!(err.is_not_found());

    assert_eq!(sink.kinds(), vec![LogKind::Info, LogKind::Error]);
    let (_, message, content) = sink.entry(1);
    assert!(message.starts_with("Response Error:"));
    assert!(message.contains("interface eth9 not found"));
    assert!(content.contains("\"error\""));
}

#[tokio::test]
async fn test_error_without_payload_uses_status_line() {
    let (server, client, sink) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/hotspot/status"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.set_hotspot_enabled(true).await.unwrap_err();
    assert!(
        matches!(&err, Error::Status { status: 500, message, body: None } if message == "500 Internal Server Error"),
        "unexpected error: {err:?}"
    );
    let (_, _, content) = sink.entry(1);
    assert!(content.is_empty());
}

#[tokio::test]
async fn test_non_json_success_body_is_deserialization_error() {
    let (server, client, sink) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
        .mount(&server)
        .await;

    let err = client.list_interfaces().await.unwrap_err();
    match &err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>captive portal</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }

    assert_eq!(sink.kinds(), vec![LogKind::Info, LogKind::Error]);
    let (_, message, content) = sink.entry(1);
    assert!(message.starts_with("Response Error: Deserialization error"));
    assert_eq!(content, "<html>captive portal</html>");
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() {
    let (server, client, _sink) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/connectivity"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway\n"))
        .mount(&server)
        .await;

    let err = client.check_connectivity(None).await.unwrap_err();
    assert!(
        matches!(&err, Error::Status { status: 502, message, body: Some(_) } if message == "bad gateway"),
        "unexpected error: {err:?}"
    );
}

// ── Endpoints ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_hotspot_status_sends_cache_buster() {
    let (server, client, _sink) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/hotspot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client.hotspot_status().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let has_t = requests[0]
        .url
        .query_pairs()
        .any(|(k, v)| k == "_t" && v.parse::<i64>().is_ok());
    assert!(has_t, "missing _t query param: {}", requests[0].url);
}

#[tokio::test]
async fn test_update_ipv4_encodes_name_and_wraps_body() {
    let (server, client, _sink) = setup().await;

    let cfg = Ipv4Config {
        ip: "192.168.10.2".into(),
        mask: "255.255.255.0".into(),
        gateway: "192.168.10.1".into(),
        dns: vec!["1.1.1.1".into()],
        dhcp: false,
        dns_auto: false,
    };

    Mock::given(method("PUT"))
        .and(path("/api/v1/interfaces/Wi-Fi%202/ipv4"))
        .and(body_json(json!({
            "ipv4_config": {
                "ip": "192.168.10.2",
                "mask": "255.255.255.0",
                "gateway": "192.168.10.1",
                "dns": ["1.1.1.1"],
                "dhcp": false,
                "dnsAuto": false
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.update_ipv4("Wi-Fi 2", &cfg).await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_connect_open_network_sends_empty_password() {
    let (server, client, _sink) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/interfaces/wlan0/connect"))
        .and(body_json(json!({ "ssid": "Cafe Guest", "password": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "connected" })))
        .expect(1)
        .mount(&server)
        .await;

    client.connect_wifi("wlan0", "Cafe Guest", None).await.unwrap();
}

#[tokio::test]
async fn test_connectivity_target_query() {
    let (server, client, _sink) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/connectivity"))
        .and(query_param("target", "https://example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "target": "https://example.com",
            "success": true,
            "status_code": 200,
            "duration_ms": 42,
            "error": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client
        .check_connectivity(Some("https://example.com"))
        .await
        .unwrap();
    assert_eq!(body["duration_ms"], 42);
}

// ── Timeouts ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_scan_uses_scan_timeout() {
    let transport = TransportConfig {
        scan_timeout: Duration::from_millis(100),
        ..TransportConfig::default()
    };
    let (server, client, sink) = setup_with(transport).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces/wlan0/hotspots"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.scan_wifi("wlan0").await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { .. }),
        "expected Timeout, got: {err:?}"
    );
    assert!(err.is_transient());
    assert_eq!(sink.kinds(), vec![LogKind::Info, LogKind::Error]);
}

#[tokio::test]
async fn test_hotspot_status_uses_status_timeout() {
    let transport = TransportConfig {
        status_timeout: Duration::from_millis(150),
        ..TransportConfig::default()
    };
    let (server, client, sink) = setup_with(transport).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/hotspot"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Success": true }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.hotspot_status().await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { timeout } if timeout == Duration::from_millis(150)),
        "expected Timeout, got: {err:?}"
    );
    assert_eq!(err.to_string(), "Request timed out after 150ms");
    assert_eq!(sink.kinds(), vec![LogKind::Info, LogKind::Error]);
}

#[tokio::test]
async fn test_default_timeout_overrides_prebuilt_client() {
    let transport = TransportConfig {
        timeout: Duration::from_millis(200),
        ..TransportConfig::default()
    };
    let server = MockServer::start().await;
    let sink = Arc::new(RecordingSink::default());
    // The pre-built client would wait far longer on its own.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    let client = NetcfgClient::with_client(
        http,
        &Url::parse(&server.uri()).unwrap(),
        transport,
        sink.clone(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.list_interfaces().await.unwrap_err();
    assert_eq!(err.to_string(), "Request timed out after 200ms");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let sink = Arc::new(RecordingSink::default());
    // Port 9 (discard) is essentially never listening on loopback.
    let client = NetcfgClient::with_client(
        reqwest::Client::new(),
        &Url::parse("http://127.0.0.1:9").unwrap(),
        TransportConfig::default(),
        sink.clone(),
    )
    .unwrap();

    let err = client.list_interfaces().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert_eq!(sink.kinds(), vec![LogKind::Info, LogKind::Error]);
}
