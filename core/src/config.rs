use std::fmt;

use crate::error::ConfigError;
use crate::rest::{build_url, ping_query};

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const SUPABASE_PING_TABLE_VAR: &str = "SUPABASE_PING_TABLE";

/// Resolve a required variable through `lookup`, trimming surrounding
/// whitespace. Unset and blank values are both reported as missing.
pub fn require_var<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::Missing {
            name: name.to_string(),
        })
}

/// Connection parameters for one keepalive run. Read once, never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct KeepaliveConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl KeepaliveConfig {
    /// Load from an arbitrary variable source. Variables are checked in the
    /// order URL, key, table and the first missing one is reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = require_var(&lookup, SUPABASE_URL_VAR)?;
        let api_key = require_var(&lookup, SUPABASE_ANON_KEY_VAR)?;
        let table = require_var(&lookup, SUPABASE_PING_TABLE_VAR)?;

        Ok(Self {
            base_url,
            api_key,
            table,
        })
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// The URL both pings are sent to.
    pub fn ping_url(&self) -> String {
        build_url(&self.base_url, &self.table, &ping_query())
    }
}

// Hand-written so the key never ends up in logs or panic messages.
impl fmt::Debug for KeepaliveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeepaliveConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}
