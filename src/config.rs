use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL for the repository API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default organisation whose repositories are showcased.
pub const DEFAULT_ORG: &str = "ds-horizon";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page size for the all-projects view.
pub const DEFAULT_ALL_PER_PAGE: u32 = 100;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the repository API
    pub api_url: String,
    /// Organisation login
    pub org: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Page size requested by the all-projects view (default: 100)
    pub all_per_page: u32,
    /// Optional site data file (meetups, social links, featured names)
    pub site_data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            org: DEFAULT_ORG.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            all_per_page: DEFAULT_ALL_PER_PAGE,
            site_data: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("SHOWCASE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let org = lookup("SHOWCASE_ORG").unwrap_or_else(|| DEFAULT_ORG.to_string());

        let timeout_secs = lookup("SHOWCASE_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOWCASE_TIMEOUT_SECS"))?;

        let all_per_page: u32 = lookup("SHOWCASE_ALL_PER_PAGE")
            .unwrap_or_else(|| DEFAULT_ALL_PER_PAGE.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHOWCASE_ALL_PER_PAGE"))?;
        if all_per_page == 0 {
            return Err(ConfigError::InvalidValue("SHOWCASE_ALL_PER_PAGE"));
        }

        let site_data = lookup("SHOWCASE_SITE_DATA")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let config = Self {
            api_url,
            org,
            timeout_secs,
            all_per_page,
            site_data,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the values that can also be set after loading (e.g. from CLI
    /// flags).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("SHOWCASE_API_URL"));
        }
        if self.org.trim().is_empty() {
            return Err(ConfigError::InvalidValue("SHOWCASE_ORG"));
        }
        Ok(())
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),
}
