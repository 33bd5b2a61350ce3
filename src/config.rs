use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub smoke_test_default: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            smoke_test_default: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DEEPVISION_BACKEND_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(interval) = std::env::var("DEEPVISION_POLL_INTERVAL_MS") {
            config.poll_interval_ms = interval
                .parse()
                .context("DEEPVISION_POLL_INTERVAL_MS must be a number of milliseconds")?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_poll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }
}
