use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Gateway address used when none is given (the gateway's default port).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    /// Gateway origin, without a trailing slash.
    pub base_url: String,
    /// Upper bound for a whole request, connect included.
    pub timeout: Duration,
    /// What happens when a loader is triggered while an earlier call is still pending.
    pub policy: RefreshPolicy,
    /// 0 prints everything, higher values drop headers and summaries.
    pub quiet: u8,
}

impl Config {
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        policy: RefreshPolicy,
        quiet: u8,
    ) -> Result<Self, ConfigError> {
        if timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: Duration::from_secs(timeout_secs),
            policy,
            quiet,
        })
    }

    /// Absolute URL of a gateway path such as `/proxy/users_service/users/`.
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            policy: RefreshPolicy::default(),
            quiet: 0,
        }
    }
}

/// Joins a base URL and an absolute path with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed: &str = raw.trim().trim_end_matches('/');
    let rest: Option<&str> = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(trimmed.to_string()),
        _ => Err(ConfigError::BaseUrl(raw.to_string())),
    }
}

/// Policy for a loader invoked again before its previous request resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Nothing is cancelled; whichever response resolves last owns the list.
    #[default]
    LastResponseWins,
    /// Responses belonging to an outdated invocation are dropped unrendered.
    LatestRequestWins,
}

impl FromStr for RefreshPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last-response" | "last" => Ok(RefreshPolicy::LastResponseWins),
            "latest-request" | "latest" => Ok(RefreshPolicy::LatestRequestWins),
            _ => Err(ConfigError::Policy(s.to_string())),
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshPolicy::LastResponseWins => f.write_str("last-response"),
            RefreshPolicy::LatestRequestWins => f.write_str("latest-request"),
        }
    }
}
