use std::time::Duration;

pub const DEFAULT_PORT: u16 = 1200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Server settings, read once at startup and handed to [`crate::serve`].
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Root of the genius site; overridden in tests to point at a local fake.
    pub genius_base_url: String,
    /// Applied to every outbound request.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            genius_base_url: lyrics_acquire::genius::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
