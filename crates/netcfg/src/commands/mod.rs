//! Command dispatch: bridges CLI args -> store actions -> output formatting.

pub mod config_cmd;
pub mod connectivity;
pub mod hotspot;
pub mod interfaces;
pub mod log;
pub mod util;
pub mod wifi;

use netcfg_core::NetworkStore;
use url::Url;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Per-invocation state shared by backend-bound handlers.
pub struct Context {
    pub store: NetworkStore,
    pub profile_name: String,
    /// Backend the store talks to, after `--server` overrides.
    pub server: Url,
    pub default_interface: Option<String>,
}

impl Context {
    /// The interface named on the command line, else the profile default.
    pub fn interface(&self, arg: Option<String>) -> Result<String, CliError> {
        arg.or_else(|| self.default_interface.clone())
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| CliError::NoInterface {
                profile: self.profile_name.clone(),
            })
    }
}

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Interfaces(args) => interfaces::handle(ctx, args, global).await,
        Command::Hotspot(args) => hotspot::handle(ctx, args, global).await,
        Command::Wifi(args) => wifi::handle(ctx, args, global).await,
        Command::Connectivity(args) => connectivity::handle(ctx, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
