// ── Response normalization and input validation ──
//
// The only place untrusted backend JSON becomes typed domain values, and
// the only place user input is checked before it goes out. Field-level
// problems fall back to defaults; structural problems reject the whole
// payload.

use std::net::{Ipv4Addr, Ipv6Addr};

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::model::{
    ConnectivityResult, HotspotConfig, HotspotStatus, Ipv4Config, Ipv6Config, NetworkInterface,
    WifiScanResult, MIN_PASSPHRASE_LEN, UNKNOWN_BSSID, UNKNOWN_LABEL,
};

// ── Hotspot status ───────────────────────────────────────────────────

/// Normalize the PascalCase `GET /hotspot` payload.
///
/// `Success` must be a boolean. `Success: false` with a non-empty `Error`
/// is a server-reported failure; without a message the remaining fields
/// are read as usual. Mistyped fields default (`false`, `""`, `0`), and
/// counts are floored and clamped at zero.
pub fn normalize_hotspot_status(raw: &Value) -> Result<HotspotStatus, CoreError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| CoreError::malformed("hotspot status response is empty or not an object"))?;

    let Some(success) = obj.get("Success").and_then(Value::as_bool) else {
        return Err(CoreError::malformed(
            "hotspot status is missing a boolean `Success` field",
        ));
    };

    if !success {
        if let Some(message) = non_empty_str(obj, "Error") {
            return Err(CoreError::ServerReported {
                message: message.to_owned(),
                status: None,
            });
        }
    }

    Ok(HotspotStatus {
        enabled: obj.get("Enabled").and_then(Value::as_bool).unwrap_or(false),
        ssid: str_or(obj, "SSID", ""),
        authentication: str_or(obj, "Authentication", ""),
        encryption: str_or(obj, "Encryption", ""),
        max_client_count: count(obj.get("MaxClientCount")),
        clients_count: count(obj.get("ClientsCount")),
    })
}

// ── WiFi scan ────────────────────────────────────────────────────────

/// Normalize `GET /interfaces/{name}/hotspots`.
///
/// The payload must be an array. Each element is defaulted field by field;
/// an element that isn't an object becomes a fully defaulted entry.
pub fn normalize_scan_results(raw: &Value) -> Result<Vec<WifiScanResult>, CoreError> {
    let items = raw
        .as_array()
        .ok_or_else(|| CoreError::malformed("expected an array of access points"))?;

    Ok(items
        .iter()
        .map(|item| item.as_object().map(scan_entry).unwrap_or_default())
        .collect())
}

fn scan_entry(obj: &Map<String, Value>) -> WifiScanResult {
    let bssid = non_empty_str(obj, "bssid")
        .filter(|b| is_mac(b))
        .unwrap_or(UNKNOWN_BSSID);

    WifiScanResult {
        ssid: str_or(obj, "ssid", UNKNOWN_LABEL),
        signal_strength: first_int(obj, &["signal_strength", "signal_level"]).unwrap_or(0),
        security: first_str(obj, &["security", "security_type"])
            .unwrap_or(UNKNOWN_LABEL)
            .to_owned(),
        bssid: bssid.to_owned(),
        channel: count(obj.get("channel")),
        connected: obj
            .get("is_connected")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        frequency: count(obj.get("frequency")),
        radio_type: str_or(obj, "radio_type", ""),
    }
}

// ── Interfaces & connectivity ────────────────────────────────────────

/// Normalize `GET /interfaces`. A `null` body is an empty list.
///
/// Fields inside each entry default when missing or `null`; only an entry
/// that isn't an object rejects the list.
pub fn normalize_interfaces(raw: &Value) -> Result<Vec<NetworkInterface>, CoreError> {
    match raw {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                decode(item).map_err(|e| CoreError::malformed(format!("interface #{idx}: {e}")))
            })
            .collect(),
        _ => Err(CoreError::malformed("expected an array of interfaces")),
    }
}

/// Normalize `GET /interfaces/{name}`.
pub fn normalize_interface(raw: &Value) -> Result<NetworkInterface, CoreError> {
    decode(raw).map_err(|e| CoreError::malformed(format!("interface detail: {e}")))
}

/// Normalize `GET /connectivity`.
pub fn normalize_connectivity(raw: &Value) -> Result<ConnectivityResult, CoreError> {
    decode(raw).map_err(|e| CoreError::malformed(format!("connectivity result: {e}")))
}

fn decode<T: DeserializeOwned>(raw: &Value) -> Result<T, String> {
    if !raw.is_object() {
        return Err("expected an object".into());
    }
    T::deserialize(raw).map_err(|e| e.to_string())
}

// ── Input validation ─────────────────────────────────────────────────

/// Reject hotspot settings the backend would refuse.
pub fn validate_hotspot_config(config: &HotspotConfig) -> Result<(), CoreError> {
    let password = config.password.expose_secret();
    if config.ssid.trim().is_empty() || password.is_empty() {
        return Err(CoreError::validation("SSID and password must not be empty"));
    }
    if password.chars().count() < MIN_PASSPHRASE_LEN {
        return Err(CoreError::validation(format!(
            "password must be at least {MIN_PASSPHRASE_LEN} characters"
        )));
    }
    Ok(())
}

/// Check a WiFi join request. Open networks pass `None` or an empty password.
pub fn validate_wifi_connect(
    ssid: &str,
    password: Option<&SecretString>,
) -> Result<(), CoreError> {
    if ssid.trim().is_empty() {
        return Err(CoreError::validation("SSID must not be empty"));
    }
    if let Some(pw) = password.map(ExposeSecret::expose_secret) {
        if !pw.is_empty() && pw.chars().count() < MIN_PASSPHRASE_LEN {
            return Err(CoreError::validation(format!(
                "password must be empty (open network) or at least {MIN_PASSPHRASE_LEN} characters"
            )));
        }
    }
    Ok(())
}

/// Static addressing needs a parseable address and a contiguous netmask.
/// With DHCP on, address fields are ignored.
pub fn validate_ipv4_config(config: &Ipv4Config) -> Result<(), CoreError> {
    if !config.dhcp {
        parse_v4("ip", &config.ip)?;
        let mask = parse_v4("mask", &config.mask)?;
        let bits = u32::from(mask);
        if bits.leading_ones() + bits.trailing_zeros() != 32 {
            return Err(CoreError::validation(format!(
                "mask {mask} is not a contiguous netmask"
            )));
        }
        if !config.gateway.trim().is_empty() {
            parse_v4("gateway", &config.gateway)?;
        }
    }
    if !config.dns_auto {
        for server in &config.dns {
            parse_v4("dns", server)?;
        }
    }
    Ok(())
}

/// An empty address means "leave IPv6 on autoconfiguration".
pub fn validate_ipv6_config(config: &Ipv6Config) -> Result<(), CoreError> {
    if !config.ip.trim().is_empty() {
        parse_v6("ip", &config.ip)?;
    }
    if config.prefix_len > 128 {
        return Err(CoreError::validation(format!(
            "prefix length {} exceeds 128",
            config.prefix_len
        )));
    }
    if !config.gateway.trim().is_empty() {
        parse_v6("gateway", &config.gateway)?;
    }
    for server in &config.dns {
        parse_v6("dns", server)?;
    }
    Ok(())
}

fn parse_v4(field: &str, value: &str) -> Result<Ipv4Addr, CoreError> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::validation(format!("{field} '{value}' is not a valid IPv4 address")))
}

fn parse_v6(field: &str, value: &str) -> Result<Ipv6Addr, CoreError> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::validation(format!("{field} '{value}' is not a valid IPv6 address")))
}

// ── Field helpers ────────────────────────────────────────────────────

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// String field, falling back when absent, mistyped, or empty.
fn str_or(obj: &Map<String, Value>, key: &str, fallback: &str) -> String {
    non_empty_str(obj, key).unwrap_or(fallback).to_owned()
}

fn first_str<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| non_empty_str(obj, k))
}

fn first_int(obj: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|k| obj.get(*k).and_then(int))
}

/// Any JSON number, floored to an integer. Strings and booleans don't count.
#[allow(clippy::cast_possible_truncation)]
fn int(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite())
            .map(|f| f.floor() as i64)
    })
}

/// Non-negative integer field: missing or mistyped → 0, negative → 0.
fn count(value: Option<&Value>) -> u32 {
    value
        .and_then(int)
        .map_or(0, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

fn is_mac(s: &str) -> bool {
    let parts: Vec<&str> = s.split([':', '-']).collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_hexdigit()))
}
