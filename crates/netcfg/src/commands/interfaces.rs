//! Interface command handlers.

use std::path::PathBuf;

use netcfg_config::{Profile, load_config, save_config};
use netcfg_core::{Ipv4Config, Ipv6Config, NetworkInterface};
use tabled::Tabled;

use crate::cli::{GlobalOpts, InterfacesArgs, InterfacesCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&NetworkInterface> for InterfaceRow {
    fn from(i: &NetworkInterface) -> Self {
        Self {
            name: i.name.clone(),
            status: i.status.clone(),
            description: i.description.clone(),
        }
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn detail(i: &NetworkInterface) -> String {
    let v4 = &i.ipv4_config;
    let v6 = &i.ipv6_config;
    let mut lines = vec![
        format!("Name:        {}", i.name),
        format!("Description: {}", or_dash(&i.description)),
        format!("Status:      {}", or_dash(&i.status)),
    ];
    if let Some(ref ssid) = i.connected_ssid {
        lines.push(format!("SSID:        {ssid}"));
    }
    lines.extend([
        format!("DHCP:        {}", v4.dhcp),
        format!("IPv4:        {}", or_dash(&v4.ip)),
        format!("Mask:        {}", or_dash(&v4.mask)),
        format!("Gateway:     {}", or_dash(&v4.gateway)),
        format!(
            "DNS:         {}{}",
            or_dash(&v4.dns.join(", ")),
            if v4.dns_auto { " (auto)" } else { "" }
        ),
    ]);
    if !v6.ip.is_empty() {
        lines.push(format!("IPv6:        {}/{}", v6.ip, v6.prefix_len));
        lines.push(format!("Gateway6:    {}", or_dash(&v6.gateway)));
    }
    lines.extend([
        format!("MAC:         {}", or_dash(&i.hardware.mac_address)),
        format!("Adapter:     {}", or_dash(&i.hardware.adapter_type)),
        format!(
            "Driver:      {} {}",
            or_dash(&i.driver.name),
            i.driver.version
        ),
    ]);
    lines.join("\n")
}

fn print_detail(iface: &NetworkInterface, global: &GlobalOpts) {
    let out = output::render_single(&global.output, iface, detail, |i| i.name.clone());
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    ctx: &Context,
    args: InterfacesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InterfacesCommand::List => {
            let list = ctx.store.fetch_interfaces().await?;
            let out = output::render_list(
                &global.output,
                &list,
                |i| InterfaceRow::from(i),
                |i| i.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InterfacesCommand::Get { name } => {
            let name = ctx.interface(name)?;
            let iface = ctx.store.fetch_interface(&name).await?;
            print_detail(&iface, global);
            Ok(())
        }

        InterfacesCommand::SetIpv4 {
            name,
            dhcp,
            ip,
            mask,
            gateway,
            dns,
            dns_auto,
        } => {
            let cfg = Ipv4Config {
                ip: ip.unwrap_or_default(),
                mask: mask.unwrap_or_default(),
                gateway: gateway.unwrap_or_default(),
                dns,
                dhcp,
                dns_auto,
            };
            let iface = ctx.store.update_ipv4(&name, &cfg).await?;
            output::print_status(&format!("✓ IPv4 settings applied to {name}"), global.quiet);
            print_detail(&iface, global);
            Ok(())
        }

        InterfacesCommand::SetIpv6 {
            name,
            ip,
            prefix_len,
            gateway,
            dns,
        } => {
            let cfg = Ipv6Config {
                ip: ip.unwrap_or_default(),
                prefix_len,
                gateway: gateway.unwrap_or_default(),
                dns,
            };
            let iface = ctx.store.update_ipv6(&name, &cfg).await?;
            output::print_status(&format!("✓ IPv6 settings applied to {name}"), global.quiet);
            print_detail(&iface, global);
            Ok(())
        }

        InterfacesCommand::Select { name } => {
            let iface = ctx.store.select_interface(&name).await?;
            let path = remember_interface(ctx, &iface.name)?;
            output::print_status(
                &format!(
                    "✓ Selected {} as default for profile '{}' ({})",
                    iface.name,
                    ctx.profile_name,
                    path.display()
                ),
                global.quiet,
            );
            print_detail(&iface, global);
            Ok(())
        }
    }
}

/// Store `name` as the active profile's `default_interface`, creating the
/// profile for the current server if it doesn't exist yet.
fn remember_interface(ctx: &Context, name: &str) -> Result<PathBuf, CliError> {
    let mut cfg = load_config()?;
    let profile = cfg
        .profiles
        .entry(ctx.profile_name.clone())
        .or_insert_with(|| Profile {
            server: ctx.server.to_string(),
            ..Profile::default()
        });
    profile.default_interface = Some(name.to_owned());
    Ok(save_config(&cfg)?)
}
