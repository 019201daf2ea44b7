//! Startup configuration, resolved from build-time environment variables.

use log::LevelFilter;
use shared::{AdminCredentials, DEFAULT_PAGE_SIZE};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the donation API, without a trailing slash
    pub api_base_url: String,
    pub credentials: AdminCredentials,
    pub default_page_size: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials: AdminCredentials::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Values baked in by `DONATION_API_URL`, `DASHBOARD_ADMIN_EMAIL`,
    /// `DASHBOARD_ADMIN_PASSWORD` and `DASHBOARD_LOG_LEVEL` at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DONATION_API_URL"),
            option_env!("DASHBOARD_ADMIN_EMAIL"),
            option_env!("DASHBOARD_ADMIN_PASSWORD"),
            option_env!("DASHBOARD_LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        admin_email: Option<&str>,
        admin_password: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(email) = admin_email.filter(|email| !email.is_empty()) {
            config.credentials.email = email.to_string();
        }
        if let Some(password) = admin_password.filter(|password| !password.is_empty()) {
            config.credentials.password = password.to_string();
        }
        if let Some(level) = log_level.and_then(|level| level.parse().ok()) {
            config.log_level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.credentials, AdminCredentials::default());
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("https://donations.example.org/api/"),
            Some("ops@example.org"),
            Some("hunter2"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://donations.example.org/api");
        assert_eq!(config.credentials.email, "ops@example.org");
        assert_eq!(config.credentials.password, "hunter2");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some(""), None, Some("chatty"));
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.credentials.email, "admin@example.com");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
