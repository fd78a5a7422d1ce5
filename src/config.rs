use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Plain log level variable, honored on top of the prefixed settings
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub pretty: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_log_level(env::var(LOG_LEVEL_ENV).ok())
    }

    /// Load settings, letting `log_level` (when present) override every
    /// other source for `logging.level`.
    pub fn with_log_level(log_level: Option<String>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("output.pretty", true)?
            // Add configuration files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("VMFW_FIXTURES").separator("__"))
            .set_override_option("logging.level", log_level)?
            .build()?;

        config.try_deserialize()
    }
}
