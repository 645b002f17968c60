// ── Network store ──
//
// Owns the HTTP client and the debug log, caches the last good response
// for every resource, and records the last failure. Each action clears the
// previous error, calls the backend, normalizes, and replaces the cached
// value wholesale.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use secrecy::SecretString;
use serde_json::json;
use tracing::{debug, warn};

use netcfg_api::{LogKind, NetcfgClient};

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::log::DebugLog;
use crate::model::{
    ConnectivityResult, HotspotConfig, HotspotStatus, Ipv4Config, Ipv6Config, NetworkInterface,
    WifiScanResult,
};
use crate::normalize;

/// Point-in-time copy of everything the store caches.
///
/// Collections sit behind `Arc` so taking a snapshot never deep-copies.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub interfaces: Arc<Vec<NetworkInterface>>,
    /// Detail record of the selected interface.
    pub current_interface: Option<Arc<NetworkInterface>>,
    pub hotspot_status: Option<HotspotStatus>,
    /// Settings last accepted by `configure_hotspot`.
    pub hotspot_config: Option<Arc<HotspotConfig>>,
    pub scan_results: Arc<Vec<WifiScanResult>>,
    pub connectivity: Option<ConnectivityResult>,
    /// `"{action} failed: {reason}"` for the most recent failed action.
    pub last_error: Option<String>,
}

/// Cheaply cloneable handle to the shared store.
#[derive(Clone)]
pub struct NetworkStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    client: NetcfgClient,
    log: Arc<DebugLog>,
    state: RwLock<StoreSnapshot>,
}

impl NetworkStore {
    /// Build a store talking to `config.server`, with a fresh debug log
    /// wired in as the client's log sink.
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let log = Arc::new(DebugLog::with_capacity(config.log_capacity));
        let client = NetcfgClient::new(&config.server, config.transport(), log.clone())?;
        Ok(Self::with_client(client, log))
    }

    /// Wrap an existing client. `log` should be the sink the client was
    /// built with so request and action entries share one timeline.
    pub fn with_client(client: NetcfgClient, log: Arc<DebugLog>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                client,
                log,
                state: RwLock::new(StoreSnapshot::default()),
            }),
        }
    }

    pub fn client(&self) -> &NetcfgClient {
        &self.inner.client
    }

    pub fn log(&self) -> &Arc<DebugLog> {
        &self.inner.log
    }

    // ── State access ─────────────────────────────────────────────────

    pub fn snapshot(&self) -> StoreSnapshot {
        self.read(Clone::clone)
    }

    pub fn interfaces(&self) -> Arc<Vec<NetworkInterface>> {
        self.read(|s| Arc::clone(&s.interfaces))
    }

    pub fn current_interface(&self) -> Option<Arc<NetworkInterface>> {
        self.read(|s| s.current_interface.clone())
    }

    pub fn hotspot_status(&self) -> Option<HotspotStatus> {
        self.read(|s| s.hotspot_status.clone())
    }

    pub fn hotspot_config(&self) -> Option<Arc<HotspotConfig>> {
        self.read(|s| s.hotspot_config.clone())
    }

    pub fn scan_results(&self) -> Arc<Vec<WifiScanResult>> {
        self.read(|s| Arc::clone(&s.scan_results))
    }

    pub fn connectivity(&self) -> Option<ConnectivityResult> {
        self.read(|s| s.connectivity.clone())
    }

    pub fn last_error(&self) -> Option<String> {
        self.read(|s| s.last_error.clone())
    }

    /// Drop every cached value and the last error. The debug log is kept.
    pub fn reset(&self) {
        self.write(|s| *s = StoreSnapshot::default());
        debug!("store reset");
    }

    // ── Interfaces ───────────────────────────────────────────────────

    pub async fn fetch_interfaces(&self) -> Result<Arc<Vec<NetworkInterface>>, CoreError> {
        self.track("Fetch interfaces", async {
            let raw = self.inner.client.list_interfaces().await?;
            let interfaces = Arc::new(normalize::normalize_interfaces(&raw)?);
            self.write(|s| s.interfaces = Arc::clone(&interfaces));
            self.succeeded(
                format!("Loaded {} interfaces", interfaces.len()),
                String::new(),
            );
            Ok(interfaces)
        })
        .await
    }

    /// Fetch one interface's detail and make it the current interface.
    pub async fn fetch_interface(&self, name: &str) -> Result<Arc<NetworkInterface>, CoreError> {
        self.track("Fetch interface", async {
            let raw = self.inner.client.get_interface(name).await?;
            let iface = Arc::new(normalize::normalize_interface(&raw)?);
            self.write(|s| s.current_interface = Some(Arc::clone(&iface)));
            self.succeeded(format!("Loaded interface {}", iface.name), String::new());
            Ok(iface)
        })
        .await
    }

    /// Make `name` the current interface, loading its detail record.
    ///
    /// Re-selecting the interface that is already current is a no-op.
    pub async fn select_interface(&self, name: &str) -> Result<Arc<NetworkInterface>, CoreError> {
        if let Some(current) = self.current_interface().filter(|i| i.name == name) {
            return Ok(current);
        }
        self.fetch_interface(name).await
    }

    pub async fn update_ipv4(
        &self,
        name: &str,
        config: &Ipv4Config,
    ) -> Result<Arc<NetworkInterface>, CoreError> {
        self.track("Update IPv4", async {
            normalize::validate_ipv4_config(config)?;
            self.inner.client.update_ipv4(name, config).await?;
            self.succeeded(format!("IPv4 settings applied to {name}"), String::new());
            Ok(())
        })
        .await?;
        self.fetch_interface(name).await
    }

    pub async fn update_ipv6(
        &self,
        name: &str,
        config: &Ipv6Config,
    ) -> Result<Arc<NetworkInterface>, CoreError> {
        self.track("Update IPv6", async {
            normalize::validate_ipv6_config(config)?;
            self.inner.client.update_ipv6(name, config).await?;
            self.succeeded(format!("IPv6 settings applied to {name}"), String::new());
            Ok(())
        })
        .await?;
        self.fetch_interface(name).await
    }

    // ── Hotspot ──────────────────────────────────────────────────────

    pub async fn fetch_hotspot_status(&self) -> Result<HotspotStatus, CoreError> {
        self.track("Fetch hotspot status", async {
            let raw = self.inner.client.hotspot_status().await?;
            let status = normalize::normalize_hotspot_status(&raw)?;
            self.write(|s| s.hotspot_status = Some(status.clone()));
            self.succeeded(
                "Hotspot status updated",
                serde_json::to_string_pretty(&status).unwrap_or_default(),
            );
            Ok(status)
        })
        .await
    }

    /// Validate and apply hotspot settings, then re-read the status.
    ///
    /// Invalid settings fail before anything is sent.
    pub async fn configure_hotspot(&self, config: HotspotConfig) -> Result<HotspotStatus, CoreError> {
        self.track("Configure hotspot", async {
            normalize::validate_hotspot_config(&config)?;
            self.inner
                .client
                .configure_hotspot(&config.ssid, &config.password)
                .await?;
            self.succeeded(format!("Hotspot configured as {}", config.ssid), String::new());
            self.write(|s| s.hotspot_config = Some(Arc::new(config)));
            Ok(())
        })
        .await?;
        self.fetch_hotspot_status().await
    }

    /// Turn the hotspot on or off, then re-read the status.
    pub async fn set_hotspot_status(&self, enabled: bool) -> Result<HotspotStatus, CoreError> {
        let verb = if enabled { "Enable" } else { "Disable" };
        self.track(&format!("{verb} hotspot"), async {
            self.inner.client.set_hotspot_enabled(enabled).await?;
            self.succeeded(format!("{verb} hotspot requested"), String::new());
            Ok(())
        })
        .await?;
        self.fetch_hotspot_status().await
    }

    // ── WiFi ─────────────────────────────────────────────────────────

    pub async fn fetch_scan_results(
        &self,
        name: &str,
    ) -> Result<Arc<Vec<WifiScanResult>>, CoreError> {
        self.track("WiFi scan", async {
            let raw = self.inner.client.scan_wifi(name).await?;
            let results = Arc::new(normalize::normalize_scan_results(&raw)?);
            self.write(|s| s.scan_results = Arc::clone(&results));
            self.succeeded(
                format!("Found {} access points on {name}", results.len()),
                String::new(),
            );
            Ok(results)
        })
        .await
    }

    /// Join `ssid` on interface `name`. `None` or an empty password joins
    /// an open network.
    pub async fn connect_wifi(
        &self,
        name: &str,
        ssid: &str,
        password: Option<SecretString>,
    ) -> Result<(), CoreError> {
        self.track("WiFi connect", async {
            normalize::validate_wifi_connect(ssid, password.as_ref())?;
            self.inner
                .client
                .connect_wifi(name, ssid, password.as_ref())
                .await?;
            self.succeeded(format!("Connected {name} to {ssid}"), String::new());
            Ok(())
        })
        .await
    }

    // ── Connectivity ─────────────────────────────────────────────────

    pub async fn check_connectivity(
        &self,
        target: Option<&str>,
    ) -> Result<ConnectivityResult, CoreError> {
        self.track("Connectivity check", async {
            let raw = self.inner.client.check_connectivity(target).await?;
            let result = normalize::normalize_connectivity(&raw)?;
            self.write(|s| s.connectivity = Some(result.clone()));
            let summary = if result.success {
                format!("{} reachable in {} ms", result.target, result.duration_ms)
            } else {
                format!("{} unreachable", result.target)
            };
            self.succeeded(summary, String::new());
            Ok(result)
        })
        .await
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Run one action: clear the last error, and on failure record it in
    /// both the store and the debug log before handing it back.
    async fn track<T, F>(&self, action: &str, fut: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        self.write(|s| s.last_error = None);
        match fut.await {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(action, error = %err, "store action failed");
                let content = json!({
                    "action": action,
                    "error": err.to_string(),
                    "status": err.status(),
                });
                self.inner.log.append(
                    format!("{action} failed"),
                    serde_json::to_string_pretty(&content).unwrap_or_default(),
                    LogKind::Error,
                );
                let message = format!("{action} failed: {err}");
                self.write(|s| s.last_error = Some(message));
                Err(err)
            }
        }
    }

    fn succeeded(&self, message: impl Into<String>, content: String) {
        self.inner.log.append(message, content, LogKind::Success);
    }

    fn read<T>(&self, f: impl FnOnce(&StoreSnapshot) -> T) -> T {
        let guard = self
            .inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut StoreSnapshot)) {
        let mut guard = self
            .inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

impl std::fmt::Debug for NetworkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkStore")
            .field("base_url", &self.inner.client.base_url().as_str())
            .field("log", &self.inner.log)
            .finish_non_exhaustive()
    }
}
