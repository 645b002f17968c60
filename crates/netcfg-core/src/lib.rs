// netcfg-core: Domain store and trust boundary between netcfg-api and consumers (CLI).

pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod normalize;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ClientConfig;
pub use error::CoreError;
pub use log::{DebugLog, LogEntry, LogFilter, DEFAULT_LOG_CAPACITY};
pub use store::{NetworkStore, StoreSnapshot};

pub use netcfg_api::LogKind;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ConnectivityResult, Driver, Hardware, HotspotConfig, HotspotStatus, Ipv4Config, Ipv6Config,
    NetworkInterface, WifiScanResult,
};
