// ── Core error types ──
//
// User-facing errors from netcfg-core. Consumers never see reqwest errors
// or raw serde failures: the `From<netcfg_api::Error>` impl folds
// transport-layer errors into the four failure classes below.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Transport failure, timeout, or an HTTP error without a usable
    /// message from the backend.
    #[error("Network request failed: {message}")]
    NetworkFailure {
        message: String,
        status: Option<u16>,
        timed_out: bool,
    },

    /// The backend explicitly reported a failure.
    #[error("Server reported an error: {message}")]
    ServerReported { message: String, status: Option<u16> },

    /// The backend answered with a payload we can't make sense of.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// A client-side precondition failed; nothing was sent.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Bad client configuration (e.g. an unusable server URL).
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status attached to the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NetworkFailure { status, .. } | Self::ServerReported { status, .. } => *status,
            _ => None,
        }
    }

    /// `true` for timeouts specifically.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::NetworkFailure { timed_out: true, .. })
    }

    /// `true` if the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<netcfg_api::Error> for CoreError {
    fn from(err: netcfg_api::Error) -> Self {
        match err {
            netcfg_api::Error::Transport(ref e) => CoreError::NetworkFailure {
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()),
                timed_out: e.is_timeout(),
            },
            netcfg_api::Error::Timeout { .. } => CoreError::NetworkFailure {
                message: err.to_string(),
                status: None,
                timed_out: true,
            },
            netcfg_api::Error::InvalidBaseUrl(url) => CoreError::Config {
                message: format!("URL cannot be used as an API base: {url}"),
            },
            // A payload means the backend explained itself.
            netcfg_api::Error::Status {
                status,
                message,
                body: Some(_),
            } => CoreError::ServerReported {
                message,
                status: Some(status),
            },
            netcfg_api::Error::Status {
                status,
                message,
                body: None,
            } => CoreError::NetworkFailure {
                message,
                status: Some(status),
                timed_out: false,
            },
            netcfg_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
            netcfg_api::Error::Encode(e) => CoreError::Validation {
                message: format!("request body could not be encoded: {e}"),
            },
        }
    }
}
