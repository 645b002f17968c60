//! Config subcommand handlers.

use dialoguer::Input;

use netcfg_config::{self as config, Config, Profile};
use netcfg_core::config::DEFAULT_SERVER;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{active_profile_name, available_profiles};
use crate::error::CliError;
use crate::output;

use super::util::{self, prompt_err};

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("netcfg configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let mut cfg = config::load_config_or_default();

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default(active_profile_name(global, &cfg))
                .interact_text()
                .map_err(prompt_err)?;

            if cfg.profiles.contains_key(&profile_name)
                && !util::confirm(
                    "config init",
                    &format!("Profile '{profile_name}' exists. Overwrite?"),
                    global.yes,
                )?
            {
                return Ok(());
            }

            let server: String = Input::new()
                .with_prompt("Backend URL")
                .default(DEFAULT_SERVER.into())
                .validate_with(|s: &String| config::parse_server(s).map(|_| ()).map_err(|e| e.to_string()))
                .interact_text()
                .map_err(prompt_err)?;

            let default_interface: String = Input::new()
                .with_prompt("Default interface (blank for none)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            let profile = Profile {
                server,
                default_interface: Some(default_interface.trim().to_owned())
                    .filter(|s| !s.is_empty()),
                ..Profile::default()
            };

            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());

            let path = config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: netcfg connectivity");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(&global.output, &cfg, summary, |c| {
                c.default_profile.clone().unwrap_or_default()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: netcfg config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ──────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}

fn summary(cfg: &Config) -> String {
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    let d = &cfg.defaults;
    let mut lines = vec![
        format!("Default profile: {default}"),
        format!(
            "Timeouts:        {}s (scan {}s, status {}s)",
            d.timeout, d.scan_timeout, d.status_timeout
        ),
    ];
    if cfg.profiles.is_empty() {
        lines.push(format!("Profiles:        (none, using {DEFAULT_SERVER})"));
    }
    for (name, p) in &cfg.profiles {
        lines.push(String::new());
        lines.push(format!("[{name}]"));
        lines.push(format!("  server:            {}", p.server));
        if let Some(ref iface) = p.default_interface {
            lines.push(format!("  default_interface: {iface}"));
        }
        for (key, value) in [
            ("timeout", p.timeout),
            ("scan_timeout", p.scan_timeout),
            ("status_timeout", p.status_timeout),
        ] {
            if let Some(secs) = value {
                lines.push(format!("  {key:<18} {secs}s"));
            }
        }
    }
    lines.join("\n")
}
