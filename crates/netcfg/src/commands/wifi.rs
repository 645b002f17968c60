//! WiFi scan and connect handlers.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use netcfg_core::WifiScanResult;
use secrecy::SecretString;
use tabled::Tabled;

use crate::cli::{GlobalOpts, OutputFormat, WifiArgs, WifiCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ScanRow {
    #[tabled(rename = "")]
    connected: String,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Security")]
    security: String,
    #[tabled(rename = "Channel")]
    channel: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "BSSID")]
    bssid: String,
}

impl From<&WifiScanResult> for ScanRow {
    fn from(ap: &WifiScanResult) -> Self {
        Self {
            connected: if ap.connected { "*" } else { "" }.into(),
            ssid: ap.ssid.clone(),
            signal: format!("{}%", ap.signal_strength),
            security: ap.security.clone(),
            channel: if ap.channel == 0 {
                "-".into()
            } else {
                ap.channel.to_string()
            },
            band: ap.band().unwrap_or("-").into(),
            bssid: ap.bssid.clone(),
        }
    }
}

/// Spinner on stderr while the (slow) scan runs; only for interactive tables.
fn scan_spinner(iface: &str, global: &GlobalOpts) -> Option<ProgressBar> {
    let interactive = matches!(global.output, OutputFormat::Table)
        && !global.quiet
        && std::io::stderr().is_terminal();
    if !interactive {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Scanning for networks on {iface}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: WifiArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        WifiCommand::Scan { iface } => {
            let iface = ctx.interface(iface)?;
            let spinner = scan_spinner(&iface, global);
            let result = ctx.store.fetch_scan_results(&iface).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let mut results = Vec::clone(&*result?);
            results.sort_by(|a, b| b.signal_strength.cmp(&a.signal_strength));

            let out = output::render_list(
                &global.output,
                &results,
                |ap| ScanRow::from(ap),
                |ap| ap.ssid.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WifiCommand::Connect {
            iface,
            ssid,
            password,
            ask_password,
        } => {
            let iface = ctx.interface(iface)?;
            let password: Option<SecretString> = if ask_password {
                Some(util::secret_or_prompt(None, "password", "WiFi passphrase: ")?)
            } else {
                password.map(SecretString::from)
            };

            ctx.store.connect_wifi(&iface, &ssid, password).await?;
            output::print_status(&format!("✓ Connected {iface} to '{ssid}'"), global.quiet);
            Ok(())
        }
    }
}
