use std::io::{self, Write};

use crate::config::KeepaliveConfig;
use crate::error::{ConfigError, PingError, codes};
use crate::ping::Pinger;

/// Terminal state of one keepalive run.
#[derive(Debug)]
pub enum Outcome {
    /// Both pings got a response, whatever its status.
    Ok { first: u16, second: u16 },
    /// Configuration was incomplete; nothing was sent.
    ConfigError(ConfigError),
    /// A ping failed; the run stopped there.
    NetworkError(PingError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Ok { .. } => codes::EXIT_OK,
            Outcome::ConfigError(_) => codes::EXIT_CONFIG_ERROR,
            Outcome::NetworkError(_) => codes::EXIT_NETWORK_ERROR,
        }
    }

    /// Write the single report line: success to `stdout`, failures to `stderr`.
    pub fn report<O, E>(&self, stdout: &mut O, stderr: &mut E) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        match self {
            Outcome::Ok { first, second } => writeln!(stdout, "Ping OK: {first}, {second}"),
            Outcome::ConfigError(err) => writeln!(stderr, "{err}"),
            Outcome::NetworkError(err) => writeln!(stderr, "Ping failed: {err}"),
        }
    }
}

/// Ping the configured table twice in a row. The second request is only
/// sent if the first one got a response.
pub async fn ping_twice<P: Pinger>(
    pinger: &P,
    config: &KeepaliveConfig,
) -> Result<(u16, u16), PingError> {
    let url = config.ping_url();
    let first = pinger.ping(&url, &config.api_key).await?;
    let second = pinger.ping(&url, &config.api_key).await?;
    Ok((first, second))
}

/// Run the whole keepalive flow.
///
/// `connect` builds the pinger and is only called once `config` is known to
/// be valid, so a configuration error never touches the network. A pinger
/// that cannot be built is reported like any other network failure.
pub async fn keepalive<P, F>(
    config: Result<KeepaliveConfig, ConfigError>,
    connect: F,
) -> Outcome
where
    P: Pinger,
    F: FnOnce() -> Result<P, PingError>,
{
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "Keepalive configuration incomplete");
            return Outcome::ConfigError(err);
        }
    };

    tracing::info!(
        base_url = %config.base_url,
        table = %config.table,
        "Keepalive configured"
    );

    let result = match connect() {
        Ok(pinger) => ping_twice(&pinger, &config).await,
        Err(err) => Err(err),
    };

    match result {
        Ok((first, second)) => {
            tracing::info!(first, second, "Keepalive pings answered");
            Outcome::Ok { first, second }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Keepalive ping failed");
            Outcome::NetworkError(err)
        }
    }
}
