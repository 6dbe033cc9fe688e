use anyhow::Result;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub environment: Environment,
}

/// Addresses copied on prisoner-movement notifications. Threaded into the
/// notification router at construction rather than read per call, so routing
/// decisions stay deterministic under test.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationConfig {
    pub administration_emails: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let environment_str =
            env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let environment = match environment_str.to_lowercase().as_str() {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let app_name =
            env::var("APP_NAME").unwrap_or_else(|_| "Video Link Booking Core".to_string());

        // Comma-separated list; empty when unset.
        let administration_emails = match env::var("ADMINISTRATION_EMAILS") {
            Ok(val) => val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => Vec::new(),
        };

        Ok(Config {
            app: AppConfig {
                name: app_name,
                environment,
            },
            notifications: NotificationConfig {
                administration_emails,
            },
        })
    }

    #[allow(unused)]
    pub fn is_production(&self) -> bool {
        self.app.environment == Environment::Production
    }

    #[allow(unused)]
    pub fn is_development(&self) -> bool {
        self.app.environment == Environment::Development
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

// Process-wide config, read from the environment exactly once. Components
// that need a section (the notification router) take it by value instead of
// reaching for this global.
static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn init() -> Result<&'static Config> {
    CONFIG.get_or_try_init(Config::from_env)
}

pub fn get() -> &'static Config {
    CONFIG.get().expect("Config is not initialized")
}
