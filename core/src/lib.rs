//! Keepalive pings for a hosted Supabase project.
//!
//! Touches one table through the PostgREST API so an idle project is not
//! paused. Invocation is left to an external scheduler; one run sends two
//! sequential GET requests and maps the result to an [`runner::Outcome`].

pub mod config;
pub mod error;
pub mod ping;
pub mod rest;
pub mod runner;

pub use config::KeepaliveConfig;
pub use error::{ConfigError, PingError};
pub use ping::{HttpPinger, PING_TIMEOUT, Pinger};
pub use runner::{Outcome, keepalive};
