// Backend HTTP client
//
// Wraps `reqwest::Client` with `/api/v1` URL construction, per-call timeout
// overrides, error-payload extraction, and debug-log side effects. Endpoint
// methods live in sibling modules (`interfaces`, `hotspot`, `connectivity`)
// as inherent impls so this file stays focused on transport mechanics.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::{Position, Url};

use crate::error::Error;
use crate::sink::{LogKind, LogSink};
use crate::transport::TransportConfig;

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Body keys whose values never reach the debug log.
const SECRET_KEYS: &[&str] = &["password"];
const REDACTED: &str = "********";

/// Raw HTTP client for the network configuration backend.
///
/// Every request is reported to the injected [`LogSink`]: one `info` entry
/// on the way out, then one `success` or `error` entry for the outcome.
/// Methods hand back the decoded JSON body untouched; validating its shape
/// is the caller's job. Nothing is retried.
pub struct NetcfgClient {
    http: reqwest::Client,
    base_url: Url,
    transport: TransportConfig,
    sink: Arc<dyn LogSink>,
}

impl NetcfgClient {
    /// Create a client for the backend at `server` (e.g. `http://127.0.0.1:8080`).
    pub fn new(
        server: &Url,
        transport: TransportConfig,
        sink: Arc<dyn LogSink>,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, server, transport, sink)
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        server: &Url,
        transport: TransportConfig,
        sink: Arc<dyn LogSink>,
    ) -> Result<Self, Error> {
        let mut root = server.clone();
        root.set_query(None);
        root.set_fragment(None);
        let base_url = join_segments(&root, &API_PREFIX)?;
        Ok(Self {
            http,
            base_url,
            transport,
            sink,
        })
    }

    /// The API base URL (`{server}/api/v1`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout policy in effect.
    pub fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    ///
    /// Interface names such as `Wi-Fi 2` or `vEthernet (WSL)` are passed
    /// as single segments and come out encoded.
    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url, Error> {
        join_segments(&self.base_url, segments)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get(&self, url: Url, timeout: Option<Duration>) -> Result<Value, Error> {
        self.send::<()>(Method::GET, url, None, timeout).await
    }

    pub(crate) async fn post(
        &self,
        url: Url,
        body: &impl Serialize,
        timeout: Option<Duration>,
    ) -> Result<Value, Error> {
        self.send(Method::POST, url, Some(body), timeout).await
    }

    pub(crate) async fn put(
        &self,
        url: Url,
        body: &impl Serialize,
        timeout: Option<Duration>,
    ) -> Result<Value, Error> {
        self.send(Method::PUT, url, Some(body), timeout).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        timeout: Option<Duration>,
    ) -> Result<Value, Error> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(Error::Encode)?;

        let target = url[Position::BeforePath..].to_owned();
        debug!("{} {}", method, target);

        let content = body.as_ref().map(|b| pretty(&redact(b))).unwrap_or_default();
        self.sink
            .record(LogKind::Info, &format!("Request: {method} {target}"), &content);

        // Always set per request, so the reported timeout is the one applied.
        let effective = timeout.unwrap_or(self.transport.timeout);
        let mut req = self.http.request(method, url).timeout(effective);
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(self.fail(classify(e, effective))),
        };

        let status = resp.status();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => return Err(self.fail(classify(e, effective))),
        };
        let parsed = parse_body(&text);

        if !status.is_success() {
            // Error pages are often plain text; keep them readable.
            let payload = parsed.unwrap_or_else(|_| Value::String(text.trim().to_owned()));
            let message = server_message(&payload).unwrap_or_else(|| status_line(status));
            let body = (!payload.is_null()).then_some(payload);
            return Err(self.fail(Error::Status {
                status: status.as_u16(),
                message,
                body,
            }));
        }

        let payload = match parsed {
            Ok(payload) => payload,
            Err(e) => {
                return Err(self.fail(Error::Deserialization {
                    message: format!("response body is not JSON: {e}"),
                    body: text,
                }));
            }
        };

        self.sink.record(
            LogKind::Success,
            &format!("Response: {}", status_line(status)),
            &pretty(&payload),
        );
        Ok(payload)
    }

    /// Record a failed exchange and hand the error back for propagation.
    fn fail(&self, err: Error) -> Error {
        debug!(error = %err, "request failed");
        let content = match &err {
            Error::Status { body: Some(b), .. } => pretty(b),
            Error::Deserialization { body, .. } => body.clone(),
            _ => String::new(),
        };
        self.sink
            .record(LogKind::Error, &format!("Response Error: {err}"), &content);
        err
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| Error::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn classify(err: reqwest::Error, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout { timeout }
    } else {
        Error::Transport(err)
    }
}

/// Decode a response body. Empty bodies become `null`.
fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
}

/// Pull a human-readable message out of an error payload.
fn server_message(payload: &Value) -> Option<String> {
    let msg = match payload {
        Value::Object(map) => map
            .get("error")
            .or_else(|| map.get("message"))
            .and_then(Value::as_str),
        Value::String(s) => Some(s.as_str()),
        _ => None,
    };
    msg.map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

fn pretty(value: &Value) -> String {
    if value.is_null() {
        return String::new();
    }
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn redact(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    if SECRET_KEYS.contains(&k.as_str()) {
                        (k.clone(), Value::String(REDACTED.into()))
                    } else {
                        (k.clone(), redact(v))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact).collect()),
        other => other.clone(),
    }
}
