/// Configuration failures. Always detected before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset, empty or whitespace-only.
    #[error("Missing required env var: {name}")]
    Missing { name: String },
}

/// Failures while pinging the REST endpoint.
///
/// Every variant is terminal for the run and reported the same way
/// (`Ping failed: {error}`), so the display text is the underlying
/// client error without an extra prefix.
#[derive(Debug, thiserror::Error)]
pub enum PingError {
    /// The HTTP client could not be constructed (TLS backend, resolver).
    #[error("{0}")]
    Client(reqwest::Error),
    /// Connection failure, timeout, malformed response or other I/O error.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Anything else a custom pinger wants to surface.
    #[error("{0}")]
    Other(String),
}

/// Exit codes used by the `supabase-keepalive` binary
pub mod codes {
    pub const EXIT_OK: i32 = 0;
    pub const EXIT_CONFIG_ERROR: i32 = 1;
    pub const EXIT_NETWORK_ERROR: i32 = 2;
}
