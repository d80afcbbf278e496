// Copyright © 2025 Nipun Kumar

use anyhow::bail;

/// Base URL used when `ANALYZER_API_URL` was not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Build-time configuration for the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the backend base URL baked in by the build (`ANALYZER_API_URL`).
    pub fn from_build_env() -> anyhow::Result<Self> {
        Self::from_url(option_env!("ANALYZER_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn from_url(url: &str) -> anyhow::Result<Self> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            bail!("analysis API url is empty");
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!("analysis API url must be http(s), got {url:?}");
        }
        Ok(Self {
            api_url: url.to_string(),
        })
    }

    pub fn analyze_endpoint(&self) -> String {
        format!("{}/analyze", self.api_url)
    }
}
