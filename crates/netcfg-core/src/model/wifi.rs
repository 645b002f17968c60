// ── WiFi scan types ──

use serde::Serialize;

/// Placeholder for a missing SSID or security mode.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Placeholder for a missing or malformed BSSID.
pub const UNKNOWN_BSSID: &str = "00:00:00:00:00:00";

/// One access point seen during a scan.
///
/// Every field has a fallback, so a scan never fails because one access
/// point was reported badly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiScanResult {
    pub ssid: String,
    /// Signal quality as reported by the backend (percent on most hosts).
    pub signal_strength: i64,
    pub security: String,
    pub bssid: String,
    pub channel: u32,
    pub connected: bool,
    /// MHz.
    pub frequency: u32,
    /// e.g. `802.11ax`.
    pub radio_type: String,
}

impl Default for WifiScanResult {
    fn default() -> Self {
        Self {
            ssid: UNKNOWN_LABEL.into(),
            signal_strength: 0,
            security: UNKNOWN_LABEL.into(),
            bssid: UNKNOWN_BSSID.into(),
            channel: 0,
            connected: false,
            frequency: 0,
            radio_type: String::new(),
        }
    }
}

impl WifiScanResult {
    /// 2.4 GHz / 5 GHz / 6 GHz band label derived from frequency or channel.
    pub fn band(&self) -> Option<&'static str> {
        match (self.frequency, self.channel) {
            (2400..=2500, _) | (0, 1..=14) => Some("2.4 GHz"),
            (5150..=5925, _) | (0, 32..=177) => Some("5 GHz"),
            (5926..=7125, _) => Some("6 GHz"),
            _ => None,
        }
    }

    /// `true` for networks that need no passphrase.
    pub fn is_open(&self) -> bool {
        let sec = self.security.to_ascii_lowercase();
        sec == "open" || sec == "none"
    }
}
