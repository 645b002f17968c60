// Backend wire types
//
// Records the backend sends back (interfaces, connectivity probes) and the
// request bodies it accepts. Every response field defaults when it is
// absent or `null`, because the backend omits or nulls empty fields
// depending on the host and adapter type. Hotspot status and scan results
// are not modeled here: they are validated field by field in `netcfg-core`.

use serde::{Deserialize, Serialize};

// ── Interfaces ───────────────────────────────────────────────────────

/// A host network adapter as reported by `GET /interfaces[/{name}]`.
///
/// The list endpoint only fills `name`, `description` and `status`; the
/// detail endpoint fills everything. Unknown keys land in `extra` so the
/// record round-trips without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// SSID the adapter is associated with (wireless adapters only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_ssid: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dhcp_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipv4_config: Ipv4Config,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ipv6_config: Ipv6Config,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hardware: Hardware,
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver: Driver,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NetworkInterface {
    /// `true` for WiFi adapters (the only ones that can scan or connect).
    pub fn is_wireless(&self) -> bool {
        self.hardware.adapter_type.eq_ignore_ascii_case("wireless")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mask: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gateway: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dhcp: bool,
    #[serde(default, rename = "dnsAuto", deserialize_with = "null_as_default")]
    pub dns_auto: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv6Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefix_len: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gateway: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: Vec<String>,
}

/// Adapter hardware description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardware {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    /// `ethernet` or `wireless`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adapter_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub physical_media: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speed: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bus_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pnp_device_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_installed: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
}

// ── Connectivity ─────────────────────────────────────────────────────

/// Result of `GET /connectivity`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_code: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
    /// Empty on success.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

// ── Request bodies ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct Ipv4Update<'a> {
    pub ipv4_config: &'a Ipv4Config,
}

#[derive(Debug, Serialize)]
pub(crate) struct Ipv6Update<'a> {
    pub ipv6_config: &'a Ipv6Config,
}

/// Body for both `POST /interfaces/{name}/connect` and `POST /hotspot`.
#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct HotspotToggle {
    pub enabled: bool,
}

/// Go encodes nil slices and zero-valued pointers as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn interface_detail_deserializes() {
        let raw = json!({
            "name": "Wi-Fi",
            "description": "Intel(R) Wi-Fi 6 AX201 160MHz",
            "status": "Up",
            "connected_ssid": "lab",
            "dhcp_enabled": true,
            "ipv4_config": {
                "ip": "192.168.1.23",
                "mask": "255.255.255.0",
                "gateway": "192.168.1.1",
                "dns": ["192.168.1.1"],
                "dhcp": true,
                "dnsAuto": true
            },
            "ipv6_config": { "ip": "", "prefix_len": 0, "gateway": "", "dns": null },
            "hardware": { "mac_address": "AA-BB-CC-DD-EE-FF", "adapter_type": "wireless" },
            "driver": { "name": "Netwtw10", "version": "22.200.0.6" },
            "interface_index": 12
        });

        let iface: NetworkInterface =
            serde_json::from_value(raw).unwrap_or_else(|e| panic!("decode: {e}"));
        assert_eq!(iface.name, "Wi-Fi");
        assert_eq!(iface.connected_ssid.as_deref(), Some("lab"));
        assert!(iface.ipv4_config.dns_auto);
        assert!(iface.ipv6_config.dns.is_empty());
        assert!(iface.is_wireless());
        assert_eq!(iface.extra.get("interface_index"), Some(&json!(12)));
    }

    #[test]
    fn list_entry_only_needs_a_name() {
        let iface: NetworkInterface = serde_json::from_value(json!({ "name": "Ethernet" }))
            .unwrap_or_else(|e| panic!("decode: {e}"));
        assert_eq!(iface.name, "Ethernet");
        assert!(!iface.is_wireless());
        assert_eq!(iface.ipv4_config, Ipv4Config::default());
    }

    #[test]
    fn null_and_missing_fields_default() {
        let iface: NetworkInterface = serde_json::from_value(json!({
            "description": null,
            "status": "Up",
            "dhcp_enabled": null,
            "ipv4_config": { "ip": null, "dns": null, "dnsAuto": null },
            "hardware": null
        }))
        .unwrap_or_else(|e| panic!("decode: {e}"));
        assert_eq!(iface.name, "");
        assert_eq!(iface.description, "");
        assert_eq!(iface.status, "Up");
        assert!(!iface.dhcp_enabled);
        assert_eq!(iface.ipv4_config, Ipv4Config::default());
        assert_eq!(iface.hardware, Hardware::default());
        assert!(iface.extra.is_empty());
    }

    #[test]
    fn ipv4_update_wraps_config() {
        let cfg = Ipv4Config {
            ip: "10.0.0.5".into(),
            mask: "255.0.0.0".into(),
            dns_auto: true,
            ..Ipv4Config::default()
        };
        let body = serde_json::to_value(Ipv4Update { ipv4_config: &cfg })
            .unwrap_or_else(|e| panic!("encode: {e}"));
        assert_eq!(body["ipv4_config"]["ip"], "10.0.0.5");
        assert_eq!(body["ipv4_config"]["dnsAuto"], true);
    }
}
