use std::io;

use clap::Parser;
use keepalive_core::config::{SUPABASE_PING_TABLE_VAR, SUPABASE_URL_VAR};
use keepalive_core::error::codes;
use keepalive_core::{ConfigError, HttpPinger, KeepaliveConfig, keepalive};

mod util;

use util::{LogFormat, init_tracing};

#[derive(Parser, Debug)]
#[command(
    name = "supabase-keepalive",
    version,
    about = "Ping one Supabase table twice so an idle project is not paused"
)]
struct Cli {
    /// Supabase project URL (e.g. https://xyz.supabase.co)
    #[arg(long, env = "SUPABASE_URL")]
    url: Option<String>,

    /// Table to read a single row from
    #[arg(long, env = "SUPABASE_PING_TABLE")]
    table: Option<String>,

    /// Format of diagnostic logs written to stderr
    #[arg(long, env = "KEEPALIVE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// Flags win over `env`; the anon key is only ever read from `env` so it
/// stays out of process listings.
fn config_from_cli<F>(cli: &Cli, env: F) -> Result<KeepaliveConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    KeepaliveConfig::from_lookup(|name| match name {
        SUPABASE_URL_VAR => cli.url.clone(),
        SUPABASE_PING_TABLE_VAR => cli.table.clone(),
        _ => env(name),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env if present; real environment variables take precedence
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems are configuration errors; exit 2 means "network"
            let code = if err.use_stderr() {
                codes::EXIT_CONFIG_ERROR
            } else {
                codes::EXIT_OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.log_format);

    let config = config_from_cli(&cli, |name| std::env::var(name).ok());
    let outcome = keepalive(config, HttpPinger::new).await;

    if let Err(e) = outcome.report(&mut io::stdout().lock(), &mut io::stderr().lock()) {
        tracing::error!(error = %e, "Failed to write keepalive report");
    }

    std::process::exit(outcome.exit_code());
}
