// ── Hotspot domain types ──

use secrecy::SecretString;
use serde::Serialize;

/// WPA2-PSK lower bound on passphrase length.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Normalized hotspot state. Counts are never negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotStatus {
    pub enabled: bool,
    pub ssid: String,
    pub authentication: String,
    pub encryption: String,
    pub max_client_count: u32,
    pub clients_count: u32,
}

impl HotspotStatus {
    /// `"3/8"`, or just the connected count when the backend reports no limit.
    pub fn clients_label(&self) -> String {
        if self.max_client_count > 0 {
            format!("{}/{}", self.clients_count, self.max_client_count)
        } else {
            self.clients_count.to_string()
        }
    }
}

/// Requested hotspot settings. Checked by
/// [`validate_hotspot_config`](crate::normalize::validate_hotspot_config)
/// before anything is sent.
#[derive(Debug)]
pub struct HotspotConfig {
    pub ssid: String,
    pub password: SecretString,
}

impl HotspotConfig {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: SecretString::from(password.into()),
        }
    }
}
