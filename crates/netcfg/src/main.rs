mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, FromArgMatches};
use netcfg_config::load_config_or_default;
use tracing_subscriber::EnvFilter;

use netcfg_core::NetworkStore;

use crate::cli::{Cli, Command};
use crate::commands::Context;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let mut cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.global.verbose);
    config::apply_output_defaults(&mut cli.global, &matches, &load_config_or_default().defaults);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a backend
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "netcfg", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let resolved = config::resolve(&cli.global)?;
            let store = NetworkStore::new(&resolved.client)?;
            tracing::debug!(
                command = ?cmd,
                server = %resolved.client.server,
                profile = %resolved.profile_name,
                "dispatching command"
            );

            let ctx = Context {
                store,
                profile_name: resolved.profile_name,
                server: resolved.client.server.clone(),
                default_interface: resolved.default_interface,
            };
            let result = commands::dispatch(cmd, &ctx, &cli.global).await;

            // Printed on failure too: that's when the log is most useful.
            if let Some(level) = cli.global.log {
                commands::log::print(ctx.store.log(), level, &cli.global.color);
            }
            result
        }
    }
}
