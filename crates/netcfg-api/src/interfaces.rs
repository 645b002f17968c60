// Interface and WiFi-client endpoints
//
// Everything under `/interfaces`: listing, detail, address configuration,
// scanning for access points and joining one.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use crate::client::NetcfgClient;
use crate::error::Error;
use crate::models::{Credentials, Ipv4Config, Ipv4Update, Ipv6Config, Ipv6Update};

impl NetcfgClient {
    /// List all network interfaces.
    ///
    /// `GET /interfaces`
    pub async fn list_interfaces(&self) -> Result<Value, Error> {
        let url = self.api_url(&["interfaces"])?;
        self.get(url, None).await
    }

    /// Fetch the full record for one interface.
    ///
    /// `GET /interfaces/{name}`
    pub async fn get_interface(&self, name: &str) -> Result<Value, Error> {
        let url = self.api_url(&["interfaces", name])?;
        self.get(url, None).await
    }

    /// Replace an interface's IPv4 configuration.
    ///
    /// `PUT /interfaces/{name}/ipv4` with `{"ipv4_config": {...}}`
    pub async fn update_ipv4(&self, name: &str, config: &Ipv4Config) -> Result<Value, Error> {
        let url = self.api_url(&["interfaces", name, "ipv4"])?;
        debug!(interface = name, dhcp = config.dhcp, "updating ipv4 config");
        self.put(url, &Ipv4Update { ipv4_config: config }, None)
            .await
    }

    /// Replace an interface's IPv6 configuration.
    ///
    /// `PUT /interfaces/{name}/ipv6` with `{"ipv6_config": {...}}`
    pub async fn update_ipv6(&self, name: &str, config: &Ipv6Config) -> Result<Value, Error> {
        let url = self.api_url(&["interfaces", name, "ipv6"])?;
        debug!(interface = name, "updating ipv6 config");
        self.put(url, &Ipv6Update { ipv6_config: config }, None)
            .await
    }

    /// Scan for nearby access points on a wireless interface.
    ///
    /// `GET /interfaces/{name}/hotspots`, with the (longer) scan timeout.
    pub async fn scan_wifi(&self, name: &str) -> Result<Value, Error> {
        let url = self.api_url(&["interfaces", name, "hotspots"])?;
        debug!(interface = name, "scanning for access points");
        self.get(url, Some(self.transport().scan_timeout)).await
    }

    /// Join an access point. `password` is `None` for open networks.
    ///
    /// `POST /interfaces/{name}/connect` with `{"ssid", "password"}`
    pub async fn connect_wifi(
        &self,
        name: &str,
        ssid: &str,
        password: Option<&SecretString>,
    ) -> Result<Value, Error> {
        let url = self.api_url(&["interfaces", name, "connect"])?;
        debug!(interface = name, ssid, "connecting to access point");
        let body = Credentials {
            ssid,
            password: password.map_or("", |p| p.expose_secret()),
        };
        self.post(url, &body, None).await
    }
}
