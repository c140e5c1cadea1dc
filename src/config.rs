//! Explorer Configuration
//!
//! Backend location, request timeout and log verbosity. Values are baked in at
//! compile time through environment variables, falling back to local defaults.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3008";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Backend origin, without trailing slash
    pub base_url: String,
    /// Per-request timeout (native builds only; the browser owns it on wasm)
    pub timeout: Duration,
    pub log_level: LevelFilter,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            log_level: LevelFilter::Info,
        }
    }
}

impl ExplorerConfig {
    /// Build from `FOLDER_API_URL`, `FOLDER_API_TIMEOUT_SECS` and `FOLDER_LOG_LEVEL`
    /// captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FOLDER_API_URL"),
            option_env!("FOLDER_API_TIMEOUT_SECS"),
            option_env!("FOLDER_LOG_LEVEL"),
        )
    }

    /// Unparseable values are ignored in favor of the defaults
    pub fn from_values(
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = timeout_secs.and_then(|s| s.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
