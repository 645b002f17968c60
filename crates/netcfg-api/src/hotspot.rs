// Hotspot endpoints
//
// The host's own access point: status, SSID/password, on/off.

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use crate::client::NetcfgClient;
use crate::error::Error;
use crate::models::{Credentials, HotspotToggle};

impl NetcfgClient {
    /// Raw hotspot status (PascalCase `{Success, Error, Enabled, SSID, ...}`).
    ///
    /// `GET /hotspot?_t={millis}`. The timestamp defeats intermediary
    /// caches; the status timeout applies.
    pub async fn hotspot_status(&self) -> Result<Value, Error> {
        let mut url = self.api_url(&["hotspot"])?;
        url.query_pairs_mut()
            .append_pair("_t", &Utc::now().timestamp_millis().to_string());
        self.get(url, Some(self.transport().status_timeout)).await
    }

    /// Set the hotspot SSID and passphrase.
    ///
    /// `POST /hotspot` with `{"ssid", "password"}`
    pub async fn configure_hotspot(
        &self,
        ssid: &str,
        password: &SecretString,
    ) -> Result<Value, Error> {
        let url = self.api_url(&["hotspot"])?;
        debug!(ssid, "configuring hotspot");
        let body = Credentials {
            ssid,
            password: password.expose_secret(),
        };
        self.post(url, &body, None).await
    }

    /// Turn the hotspot on or off.
    ///
    /// `PUT /hotspot/status` with `{"enabled": bool}`
    pub async fn set_hotspot_enabled(&self, enabled: bool) -> Result<Value, Error> {
        let url = self.api_url(&["hotspot", "status"])?;
        debug!(enabled, "toggling hotspot");
        self.put(url, &HotspotToggle { enabled }, None).await
    }
}
