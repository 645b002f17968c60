//! Hotspot command handlers.

use netcfg_core::{HotspotConfig, HotspotStatus};

use crate::cli::{GlobalOpts, HotspotArgs, HotspotCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

fn detail(s: &HotspotStatus, color: bool) -> String {
    let or_dash = |v: &str| if v.is_empty() { "-".to_owned() } else { v.to_owned() };
    [
        format!("Enabled:        {}", output::yes_no(s.enabled, color)),
        format!("SSID:           {}", or_dash(&s.ssid)),
        format!("Clients:        {}", s.clients_label()),
        format!("Authentication: {}", or_dash(&s.authentication)),
        format!("Encryption:     {}", or_dash(&s.encryption)),
    ]
    .join("\n")
}

fn print_status(status: &HotspotStatus, global: &GlobalOpts) {
    let color = output::stdout_color(&global.color);
    let out = output::render_single(
        &global.output,
        status,
        |s| detail(s, color),
        |s| if s.enabled { "enabled" } else { "disabled" }.into(),
    );
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: HotspotArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        HotspotCommand::Status => {
            let status = ctx.store.fetch_hotspot_status().await?;
            print_status(&status, global);
            Ok(())
        }

        HotspotCommand::Configure { ssid, password } => {
            let password = util::secret_or_prompt(password, "password", "Hotspot passphrase: ")?;
            let config = HotspotConfig { ssid, password };
            let status = ctx.store.configure_hotspot(config).await?;
            output::print_status(
                &format!("✓ Hotspot configured as '{}'", status.ssid),
                global.quiet,
            );
            print_status(&status, global);
            Ok(())
        }

        HotspotCommand::Enable => {
            let status = ctx.store.set_hotspot_status(true).await?;
            output::print_status("✓ Hotspot enabled", global.quiet);
            print_status(&status, global);
            Ok(())
        }

        HotspotCommand::Disable => {
            if !util::confirm(
                "hotspot disable",
                "Disable the hotspot? Connected clients will be dropped.",
                global.yes,
            )? {
                return Ok(());
            }
            let status = ctx.store.set_hotspot_status(false).await?;
            output::print_status("✓ Hotspot disabled", global.quiet);
            print_status(&status, global);
            Ok(())
        }
    }
}
