use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealmix_suggestion::GeneratorConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Dataset JSON file holding ingredients, rules and meal logs
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> String {
    "data/mealmix.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocaleConfig {
    /// IANA timezone used to decide what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALMIX__DATA__PATH, MEALMIX__GENERATOR__CANDIDATE_COUNT, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("data.path", default_data_path())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("locale.timezone", default_timezone())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALMIX")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.data.path.trim().is_empty() {
            return Err("Data path must not be empty".to_string());
        }
        self.generator.validate().map_err(|e| e.to_string())?;
        if time_tz::timezones::get_by_name(&self.locale.timezone).is_none() {
            return Err(format!("Unknown timezone {}", self.locale.timezone));
        }
        Ok(())
    }
}
