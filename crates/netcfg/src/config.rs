//! Translation from config profiles + global flags to a `ClientConfig`.
//!
//! The single boundary where CLI config types cross into core types.

use std::time::Duration;

use clap::ArgMatches;
use clap::ValueEnum;
use clap::parser::ValueSource;
use netcfg_config::{
    Config, Defaults, Profile, load_config_or_default, parse_server, profile_to_client_config,
};
use netcfg_core::ClientConfig;
use tracing::warn;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Everything a backend-bound command needs from configuration.
#[derive(Debug)]
pub struct Resolved {
    pub profile_name: String,
    pub client: ClientConfig,
    pub default_interface: Option<String>,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Build the runtime config: profile (if any), then `--server` and
/// `--timeout` overrides.
///
/// A missing profile is only an error when it was asked for explicitly;
/// otherwise the built-in defaults apply.
pub fn resolve(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let profile = match cfg.profiles.get(&profile_name) {
        Some(p) => p.clone(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(&cfg),
            });
        }
        None => Profile::default(),
    };

    let mut client = profile_to_client_config(&profile, &cfg.defaults)?;
    if let Some(ref server) = global.server {
        client.server = parse_server(server)?;
    }
    if let Some(secs) = global.timeout {
        client.timeout = Duration::from_secs(secs);
    }

    Ok(Resolved {
        profile_name,
        client,
        default_interface: profile.default_interface,
    })
}

/// Comma-separated profile names, or `(none)`.
pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Fill `--output` and `--color` from the config file's `[defaults]` when
/// neither the flag nor its env var was given.
///
/// Unparseable values are skipped with a warning rather than failing
/// commands that never render anything.
pub fn apply_output_defaults(global: &mut GlobalOpts, matches: &ArgMatches, defaults: &Defaults) {
    if is_default(matches, "output") {
        match OutputFormat::from_str(&defaults.output, true) {
            Ok(format) => global.output = format,
            Err(_) => warn!(value = %defaults.output, "ignoring unknown defaults.output"),
        }
    }
    if is_default(matches, "color") {
        match ColorMode::from_str(&defaults.color, true) {
            Ok(mode) => global.color = mode,
            Err(_) => warn!(value = %defaults.color, "ignoring unknown defaults.color"),
        }
    }
}

fn is_default(matches: &ArgMatches, id: &str) -> bool {
    matches!(
        matches.value_source(id),
        None | Some(ValueSource::DefaultValue)
    )
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, FromArgMatches};

    use super::*;
    use crate::cli::Cli;

    fn parse(args: &[&str]) -> (Cli, ArgMatches) {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .unwrap_or_else(|e| panic!("parse: {e}"));
        let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| panic!("decode: {e}"));
        (cli, matches)
    }

    fn defaults(output: &str, color: &str) -> Defaults {
        Defaults {
            output: output.into(),
            color: color.into(),
            ..Defaults::default()
        }
    }

    #[test]
    fn config_defaults_fill_unset_flags() {
        let (mut cli, matches) = parse(&["netcfg", "connectivity"]);
        apply_output_defaults(&mut cli.global, &matches, &defaults("json", "never"));
        assert!(matches!(cli.global.output, OutputFormat::Json));
        assert!(matches!(cli.global.color, ColorMode::Never));
    }

    #[test]
    fn explicit_flags_beat_config_defaults() {
        let (mut cli, matches) = parse(&["netcfg", "connectivity", "-o", "yaml", "--color", "always"]);
        apply_output_defaults(&mut cli.global, &matches, &defaults("json", "never"));
        assert!(matches!(cli.global.output, OutputFormat::Yaml));
        assert!(matches!(cli.global.color, ColorMode::Always));
    }

    #[test]
    fn unknown_config_values_are_ignored() {
        let (mut cli, matches) = parse(&["netcfg", "connectivity"]);
        apply_output_defaults(&mut cli.global, &matches, &defaults("xml", "sometimes"));
        assert!(matches!(cli.global.output, OutputFormat::Table));
        assert!(matches!(cli.global.color, ColorMode::Auto));
    }
}
