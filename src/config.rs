use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:8000";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "http://localhost:8000";

/// Days a donor has to wait between whole-blood donations (8 weeks)
pub const DEFAULT_DONATION_INTERVAL_DAYS: i64 = 56;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub donation_interval_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            donation_interval_days: DEFAULT_DONATION_INTERVAL_DAYS,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL_DEVELOPMENT"),
            option_env!("BACKEND_URL_PRODUCTION"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("DONATION_INTERVAL_DAYS"),
        )
    }

    fn from_values(
        backend_url_development: Option<&str>,
        backend_url_production: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        donation_interval_days: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: backend_url_development
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: backend_url_production
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url_production),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            donation_interval_days: donation_interval_days
                .and_then(|s| s.parse().ok())
                .filter(|days: &i64| *days > 0)
                .unwrap_or(defaults.donation_interval_days),
        }
    }

    /// Backend base URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
