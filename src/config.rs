//! Runtime settings read from the environment (and `.env`, via `dotenvy`).

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "https://planetterp.com/api/v1";
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://planetterp.com/professor";
pub const DEFAULT_RECENT_SEARCHES_PATH: &str = "data/recent_searches.json";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/find_my_professor.log";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `PLANETTERP_BASE_URL`
    pub api_base_url: String,
    /// `PLANETTERP_PROFILE_URL`
    pub profile_base_url: String,
    /// `RECENT_SEARCHES_PATH`
    pub recent_searches_path: PathBuf,
    /// `LOG_FILE_PATH`
    pub log_file_path: PathBuf,
    /// `HTTP_TIMEOUT_SECS`
    pub http_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            recent_searches_path: PathBuf::from(DEFAULT_RECENT_SEARCHES_PATH),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE_PATH),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source; unset variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(value = %raw, "Invalid HTTP_TIMEOUT_SECS, using default");
                    defaults.http_timeout
                }
            },
            None => defaults.http_timeout,
        };

        Self {
            api_base_url: lookup("PLANETTERP_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            profile_base_url: lookup("PLANETTERP_PROFILE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.profile_base_url),
            recent_searches_path: lookup("RECENT_SEARCHES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.recent_searches_path),
            log_file_path: lookup("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file_path),
            http_timeout,
        }
    }
}
