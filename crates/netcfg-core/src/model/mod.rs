// ── Domain model ──
//
// Strict internal types the store caches and front ends render. Hotspot
// and WiFi types are only ever produced by `crate::normalize`; interface
// records are the backend's own shape, re-exported from netcfg-api.

pub mod hotspot;
pub mod wifi;

// ── Re-exports ──────────────────────────────────────────────────────

pub use hotspot::{HotspotConfig, HotspotStatus, MIN_PASSPHRASE_LEN};
pub use wifi::{WifiScanResult, UNKNOWN_BSSID, UNKNOWN_LABEL};

pub use netcfg_api::models::{
    ConnectivityResult, Driver, Hardware, Ipv4Config, Ipv6Config, NetworkInterface,
};
