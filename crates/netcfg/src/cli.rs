//! Clap derive structures for the `netcfg` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Only
//! depends on clap so `build.rs` can include it for man page generation.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// netcfg -- manage host network interfaces, WiFi and the mobile hotspot
#[derive(Debug, Parser)]
#[command(
    name = "netcfg",
    version,
    about = "Manage host network interfaces, WiFi and hotspot through the netcfg backend",
    long_about = "Command-line client for the netcfg REST backend.\n\n\
        Lists and reconfigures network adapters, scans and joins WiFi\n\
        networks, and controls the host's mobile hotspot.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "NETCFG_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile), e.g. http://localhost:8080
    #[arg(long, short = 'u', env = "NETCFG_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "NETCFG_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "NETCFG_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Print the request log to stderr after the command
    #[arg(long, value_name = "TYPE", global = true)]
    pub log: Option<LogLevel>,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Which request-log entries `--log` prints.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    All,
    Info,
    Success,
    Error,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List and configure network interfaces
    #[command(alias = "iface", alias = "i")]
    Interfaces(InterfacesArgs),

    /// Control the mobile hotspot
    #[command(alias = "hs")]
    Hotspot(HotspotArgs),

    /// Scan for and join WiFi networks
    #[command(alias = "w")]
    Wifi(WifiArgs),

    /// Check internet reachability from the host
    #[command(alias = "ping")]
    Connectivity(ConnectivityArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INTERFACES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InterfacesArgs {
    #[command(subcommand)]
    pub command: InterfacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InterfacesCommand {
    /// List network interfaces
    #[command(alias = "ls")]
    List,

    /// Show interface details
    Get {
        /// Interface name (defaults to the profile's default_interface)
        name: Option<String>,
    },

    /// Set IPv4 addressing
    #[command(name = "set-ipv4")]
    SetIpv4 {
        /// Interface name
        name: String,

        /// Use DHCP instead of static addressing
        #[arg(long, conflicts_with_all = ["ip", "mask", "gateway"])]
        dhcp: bool,

        /// Static address
        #[arg(long, required_unless_present = "dhcp")]
        ip: Option<String>,

        /// Subnet mask
        #[arg(long, required_unless_present = "dhcp")]
        mask: Option<String>,

        /// Default gateway
        #[arg(long)]
        gateway: Option<String>,

        /// DNS server (repeatable)
        #[arg(long = "dns", value_name = "ADDR")]
        dns: Vec<String>,

        /// Obtain DNS servers automatically
        #[arg(long, conflicts_with = "dns")]
        dns_auto: bool,
    },

    /// Set IPv6 addressing
    #[command(name = "set-ipv6")]
    SetIpv6 {
        /// Interface name
        name: String,

        /// Static address (omit for autoconfiguration)
        #[arg(long)]
        ip: Option<String>,

        /// Prefix length
        #[arg(long, default_value = "64")]
        prefix_len: u8,

        /// Default gateway
        #[arg(long)]
        gateway: Option<String>,

        /// DNS server (repeatable)
        #[arg(long = "dns", value_name = "ADDR")]
        dns: Vec<String>,
    },

    /// Load an interface and make it the profile's default interface
    Select {
        /// Interface name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HOTSPOT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HotspotArgs {
    #[command(subcommand)]
    pub command: HotspotCommand,
}

#[derive(Debug, Subcommand)]
pub enum HotspotCommand {
    /// Show hotspot state and connected clients
    Status,

    /// Set the hotspot SSID and passphrase
    Configure {
        /// Network name to broadcast
        #[arg(long, required = true)]
        ssid: String,

        /// Passphrase, at least 8 characters (prompted if omitted)
        #[arg(long, env = "NETCFG_HOTSPOT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Turn the hotspot on
    Enable,

    /// Turn the hotspot off
    Disable,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  WIFI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct WifiArgs {
    #[command(subcommand)]
    pub command: WifiCommand,
}

#[derive(Debug, Subcommand)]
pub enum WifiCommand {
    /// Scan for access points
    Scan {
        /// Wireless interface (defaults to the profile's default_interface)
        iface: Option<String>,
    },

    /// Join an access point
    Connect {
        /// Wireless interface (defaults to the profile's default_interface)
        iface: Option<String>,

        /// Network to join
        #[arg(long, required = true)]
        ssid: String,

        /// Passphrase (omit for open networks)
        #[arg(long, env = "NETCFG_WIFI_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Prompt for the passphrase
        #[arg(long, short = 'P', conflicts_with = "password")]
        ask_password: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONNECTIVITY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConnectivityArgs {
    /// URL to probe (backend default when omitted)
    #[arg(long, short = 't')]
    pub target: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
