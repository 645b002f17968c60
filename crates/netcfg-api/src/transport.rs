// Shared transport configuration for building reqwest::Client instances.
//
// Holds the timeout policy: one default for ordinary calls plus the two
// per-operation overrides the backend needs (slow WiFi scans, fast status
// polls).

use std::time::Duration;

/// Default timeout for ordinary requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// WiFi scanning is slow on the backend side.
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(60);

/// Hotspot status is polled; fail fast.
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub scan_timeout: Duration,
    pub status_timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            scan_timeout: DEFAULT_SCAN_TIMEOUT,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
            user_agent: concat!("netcfg/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// The client-wide timeout is the default one; scan and status calls
    /// override it per request.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
