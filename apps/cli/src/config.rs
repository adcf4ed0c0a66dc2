use std::time::Duration;

use team_tracker_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};

pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    /// Reads `TT_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Missing or
    /// unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("TT_API_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_ms: u64 = lookup("TT_REQUEST_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        let log_format = match lookup("TT_LOG_FORMAT") {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        }
    }
}
