use crate::prelude::f;
use std::time::Duration;

/// Settings fixed at startup and shared by every request of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    /// Default joke API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://api.chucknorris.io";

    /// Per-request timeout, covering connect and body read
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Number of jokes `search` keeps when no limit is given
    pub const DEFAULT_SEARCH_LIMIT: i64 = 5;

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Full URL for an API path such as `/jokes/random`
    pub fn endpoint(&self, path: &str) -> String {
        f!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: f!("chuck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
