//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use netcfg_config::ConfigError;
use netcfg_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const SERVER: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const MALFORMED: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the netcfg backend: {message}")]
    #[diagnostic(
        code(netcfg::connection_failed),
        help(
            "Check that the backend service is running and reachable.\n\
             Override the address with --server, e.g. --server http://localhost:8080"
        )
    )]
    ConnectionFailed { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(netcfg::timeout),
        help("Increase the timeout with --timeout or check backend responsiveness.")
    )]
    Timeout { message: String },

    #[error("Request failed with HTTP {status}: {message}")]
    #[diagnostic(code(netcfg::http_status))]
    RequestFailed { status: u16, message: String },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("Not found: {message}")]
    #[diagnostic(
        code(netcfg::not_found),
        help("Run: netcfg interfaces list to see available interfaces")
    )]
    NotFound { message: String },

    #[error("Backend reported an error: {message}")]
    #[diagnostic(code(netcfg::server_reported))]
    ServerReported { message: String },

    #[error("Unexpected response from backend: {message}")]
    #[diagnostic(
        code(netcfg::malformed_response),
        help("The backend may be a different version. Re-run with --log error for the raw payload.")
    )]
    MalformedResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(netcfg::validation))]
    Validation { field: String, reason: String },

    #[error("No interface given")]
    #[diagnostic(
        code(netcfg::no_interface),
        help(
            "Pass an interface name, or set default_interface on profile '{profile}'.\n\
             Run: netcfg interfaces list"
        )
    )]
    NoInterface { profile: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(netcfg::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: netcfg config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(netcfg::config))]
    Config(Box<ConfigError>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("'{action}' requires confirmation")]
    #[diagnostic(
        code(netcfg::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::ServerReported { .. } => exit_code::SERVER,
            Self::MalformedResponse { .. } => exit_code::MALFORMED,
            Self::Validation { .. }
            | Self::NoInterface { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::RequestFailed { .. }
            | Self::ProfileNotFound { .. }
            | Self::Config(_)
            | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        if err.is_not_found() {
            return CliError::NotFound {
                message: match err {
                    CoreError::NetworkFailure { message, .. }
                    | CoreError::ServerReported { message, .. } => message,
                    other => other.to_string(),
                },
            };
        }

        match err {
            CoreError::NetworkFailure {
                message,
                timed_out: true,
                ..
            } => CliError::Timeout { message },

            CoreError::NetworkFailure {
                message,
                status: Some(status),
                ..
            } => CliError::RequestFailed { status, message },

            CoreError::NetworkFailure { message, .. } => CliError::ConnectionFailed { message },

            CoreError::ServerReported { message, .. } => CliError::ServerReported { message },

            CoreError::MalformedResponse { message } => CliError::MalformedResponse { message },

            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "server".into(),
                reason: message,
            },
        }
    }
}
