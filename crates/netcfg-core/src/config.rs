// ── Runtime client configuration ──
//
// Describes *where* the backend lives and how long to wait for it. Never
// touches disk: netcfg-config resolves profiles and hands one of these in.

use std::time::Duration;

use url::Url;

use netcfg_api::TransportConfig;

use crate::log::DEFAULT_LOG_CAPACITY;

/// Backend address used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root (e.g. `http://localhost:8080`). `/api/v1` is appended.
    pub server: Url,
    /// Default per-request timeout.
    pub timeout: Duration,
    /// Timeout for WiFi scans.
    pub scan_timeout: Duration,
    /// Timeout for the hotspot status poll.
    pub status_timeout: Duration,
    /// Debug-log entries to retain.
    pub log_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let transport = TransportConfig::default();
        Self {
            #[allow(clippy::expect_used)]
            server: Url::parse(DEFAULT_SERVER).expect("default server URL is valid"),
            timeout: transport.timeout,
            scan_timeout: transport.scan_timeout,
            status_timeout: transport.status_timeout,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub fn with_server(server: Url) -> Self {
        Self {
            server,
            ..Self::default()
        }
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            scan_timeout: self.scan_timeout,
            status_timeout: self.status_timeout,
            ..TransportConfig::default()
        }
    }
}
