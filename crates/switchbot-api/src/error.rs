use thiserror::Error;

/// Top-level error type for the `switchbot-api` crate.
///
/// Covers every failure mode of a call: authentication, device reachability,
/// transport, and response decoding. Callers branch on the variant (or the
/// `is_*` helpers) to decide between re-authenticating, treating a device as
/// temporarily unavailable, or surfacing a connectivity problem.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credentials rejected by the cloud (HTTP 403).
    #[error("Authentication failed: token or secret rejected")]
    Authentication,

    // ── Device reachability ─────────────────────────────────────────
    /// The target device or its hub is offline at the cloud layer.
    ///
    /// The vendor reports `161` for a device and `171` for a hub, but some
    /// product lines return `171` for a plain device too; both codes map
    /// here. `code` carries the raw value for diagnostics.
    #[error("Device offline (vendor code {code})")]
    DeviceOffline { code: i64 },

    // ── Server ──────────────────────────────────────────────────────
    /// Unexpected HTTP status or unrecognized envelope status code.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the credentials were rejected
    /// and re-authentication (a new token/secret pair) is required.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Returns `true` if the target device or its hub is offline.
    ///
    /// A transient, device-specific condition -- not a systemic
    /// connectivity problem.
    pub fn is_device_offline(&self) -> bool {
        matches!(self, Self::DeviceOffline { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::DeviceOffline { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
