use std::future::Future;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use crate::error::PingError;

/// Upper bound for a single ping, connect through response headers.
pub const PING_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = concat!("supabase-keepalive/", env!("CARGO_PKG_VERSION"));

/// Something that can touch the REST endpoint once.
///
/// Any response counts as a successful ping; implementations return the
/// status code without interpreting it and never retry.
pub trait Pinger {
    fn ping(&self, url: &str, api_key: &str) -> impl Future<Output = Result<u16, PingError>>;
}

/// `Pinger` backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpPinger {
    client: reqwest::Client,
}

impl HttpPinger {
    pub fn new() -> Result<Self, PingError> {
        Self::with_timeout(PING_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, PingError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(PingError::Client)?;
        Ok(Self { client })
    }
}

impl Pinger for HttpPinger {
    async fn ping(&self, url: &str, api_key: &str) -> Result<u16, PingError> {
        let response = self
            .client
            .get(url)
            .header("apikey", api_key)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::debug!(status, "Ping answered");
        Ok(status)
    }
}
