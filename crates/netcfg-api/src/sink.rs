// Debug-log sink seam
//
// The client reports every request and response to a `LogSink` handed in
// at construction time. The sink owns whatever buffering it wants; the
// client keeps no log state of its own.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Classification of a debug-log entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogKind {
    Info,
    Success,
    Error,
}

/// Receiver for operational log entries emitted by the client.
///
/// `message` is a one-line summary (`"Request: GET /api/v1/hotspot"`),
/// `content` the free-form detail (usually pretty-printed JSON, may be empty).
pub trait LogSink: Send + Sync {
    fn record(&self, kind: LogKind, message: &str, content: &str);
}

/// Sink that drops everything. Handy for one-off scripts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn record(&self, _kind: LogKind, _message: &str, _content: &str) {}
}
