//! Integration tests for the `netcfg` CLI binary.
//!
//! Argument parsing, help output, completions and local validation run
//! without a backend; backend-bound commands run against wiremock.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `netcfg` binary with env isolation.
///
/// Clears all `NETCFG_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn netcfg_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("netcfg");
    cmd.env("HOME", "/tmp/netcfg-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/netcfg-cli-test-nonexistent")
        .env_remove("NETCFG_PROFILE")
        .env_remove("NETCFG_SERVER")
        .env_remove("NETCFG_OUTPUT")
        .env_remove("NETCFG_TIMEOUT")
        .env_remove("NETCFG_HOTSPOT_PASSWORD")
        .env_remove("NETCFG_WIFI_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = netcfg_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_flag() {
    netcfg_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("interfaces")
            .and(predicate::str::contains("hotspot"))
            .and(predicate::str::contains("wifi"))
            .and(predicate::str::contains("connectivity")),
    );
}

#[test]
fn test_version_flag() {
    netcfg_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netcfg"));
}

#[test]
fn test_completions_bash() {
    netcfg_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_invalid_output_format() {
    netcfg_cmd()
        .args(["--output", "xml", "interfaces", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_set_ipv4_requires_address_without_dhcp() {
    netcfg_cmd()
        .args(["interfaces", "set-ipv4", "Ethernet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--ip"));
}

#[test]
fn test_config_path_prints_location() {
    netcfg_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_unknown_profile_is_reported() {
    let output = netcfg_cmd()
        .args(["--profile", "nope", "interfaces", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("nope"));
}

// ── Local validation (nothing is sent) ──────────────────────────────

#[test]
fn test_short_hotspot_password_is_usage_error() {
    // Port 9 is never contacted: validation fails first.
    let output = netcfg_cmd()
        .args([
            "--server",
            "http://127.0.0.1:9",
            "hotspot",
            "configure",
            "--ssid",
            "lab",
            "--password",
            "short",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("at least 8 characters"));
}

#[test]
fn test_scan_without_interface_is_usage_error() {
    netcfg_cmd()
        .args(["--server", "http://127.0.0.1:9", "wifi", "scan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No interface given"));
}

#[test]
fn test_disable_needs_yes_when_non_interactive() {
    netcfg_cmd()
        .args(["--server", "http://127.0.0.1:9", "hotspot", "disable"])
        .write_stdin("")
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_backend_is_connection_error() {
    netcfg_cmd()
        .args(["--server", "http://127.0.0.1:9", "interfaces", "list"])
        .assert()
        .code(7);
}

// ── Against a mock backend ──────────────────────────────────────────

#[tokio::test]
async fn test_interfaces_list_plain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Ethernet", "status": "Up" },
            { "name": "Wi-Fi", "status": "Down" }
        ])))
        .mount(&server)
        .await;

    netcfg_cmd()
        .args(["--server", &server.uri(), "-o", "plain", "interfaces", "list"])
        .assert()
        .success()
        .stdout("Ethernet\nWi-Fi\n");
}

#[tokio::test]
async fn test_hotspot_status_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/hotspot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Success": true,
            "Enabled": true,
            "SSID": "lab-ap",
            "ClientsCount": -1,
            "MaxClientCount": 8
        })))
        .mount(&server)
        .await;

    let output = netcfg_cmd()
        .args(["--server", &server.uri(), "-o", "json-compact", "hotspot", "status"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["ssid"], "lab-ap");
    assert_eq!(body["clientsCount"], 0);
}

#[tokio::test]
async fn test_config_defaults_pick_output_format() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/hotspot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Success": true,
            "Enabled": false,
            "SSID": "lab-ap"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cfg_dir = dir.path().join("netcfg");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(
        cfg_dir.join("config.toml"),
        "[defaults]\noutput = \"json-compact\"\ncolor = \"never\"\n",
    )
    .unwrap();

    let output = netcfg_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["--server", &server.uri(), "hotspot", "status"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["ssid"], "lab-ap");
    assert_eq!(body["enabled"], false);
}

#[tokio::test]
async fn test_select_persists_default_interface() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces/Wi-Fi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Wi-Fi",
            "status": "Up",
            "hardware": { "adapter_type": "wireless" }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();

    netcfg_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["--server", &server.uri(), "interfaces", "select", "Wi-Fi"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(dir.path().join("netcfg").join("config.toml")).unwrap();
    assert!(saved.contains("[profiles.default]"), "{saved}");
    assert!(saved.contains("default_interface = \"Wi-Fi\""), "{saved}");

    // No name given: the remembered interface is used.
    netcfg_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["-o", "plain", "interfaces", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wi-Fi"));
}

#[tokio::test]
async fn test_server_reported_error_exit_code_and_log() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/hotspot"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "Success": false, "Error": "busy" })),
        )
        .mount(&server)
        .await;

    netcfg_cmd()
        .args([
            "--server",
            &server.uri(),
            "--color",
            "never",
            "--log",
            "error",
            "hotspot",
            "status",
        ])
        .assert()
        .code(6)
        .stderr(
            predicate::str::contains("busy")
                .and(predicate::str::contains("ERROR   Fetch hotspot status failed")),
        );
}

#[tokio::test]
async fn test_malformed_scan_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/interfaces/Wi-Fi/hotspots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "nope": true })))
        .mount(&server)
        .await;

    netcfg_cmd()
        .args(["--server", &server.uri(), "wifi", "scan", "Wi-Fi"])
        .assert()
        .code(9);
}
