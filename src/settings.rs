use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

use crate::constants::{DASHBOARD_TOP_SKILLS, DEFAULT_API_URL};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default = "default_dashboard_top_skills")]
    pub dashboard_top_skills: usize,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_api_base_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_user_agent() -> String {
    format!("skillboard/{}", env!("CARGO_PKG_VERSION"))
}
fn default_dashboard_top_skills() -> usize {
    DASHBOARD_TOP_SKILLS
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;
        config.validate()?;
        Ok(config)
    }

    /// Points the client at another service, e.g. from `--api-url`.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api_base_url = api_base_url.into();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        match url::Url::parse(self.api_base_url.trim()) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(_) => errors.push("API_BASE_URL must start with http:// or https://"),
            Err(_) => errors.push("API_BASE_URL is not a valid URL"),
        }
        if self.dashboard_top_skills == 0 {
            errors.push("DASHBOARD_TOP_SKILLS must be at least 1");
        }
        if self.is_production() && !self.api_base_url.trim().starts_with("https://") {
            errors.push("Plain HTTP API_BASE_URL is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Base URL without a trailing slash, ready for `{base}/profiles`.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            env: default_env(),
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            log_format: LogFormat::default(),
            dashboard_top_skills: default_dashboard_top_skills(),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}
