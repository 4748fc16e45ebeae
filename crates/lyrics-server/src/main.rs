use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use lyrics_server::config::{Config, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "lyrics-api")]
#[command(about = "HTTP API that looks up song lyrics on genius.com")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Root URL of the lyrics site
    #[arg(long, env = "GENIUS_BASE_URL", default_value = lyrics_acquire::genius::DEFAULT_BASE_URL)]
    genius_base_url: String,

    /// Timeout for each outbound request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            host: self.host.clone(),
            port: self.port,
            genius_base_url: self.genius_base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn init_logging(level: &LogLevel, utc: bool) {
    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    // RUST_LOG, when set, overrides --log-level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z".to_string();

    if utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.utc);

    let config = cli.config();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        build = env!("BUILD_HASH"),
        "Starting lyrics-api"
    );

    lyrics_server::serve(config).await
}
