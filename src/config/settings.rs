//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the optional configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/registry.yaml";

/// Prefix for environment overrides, e.g. `COURSE_REGISTRY__SERVER__PORT`
pub const ENV_PREFIX: &str = "COURSE_REGISTRY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "json" or "pretty"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

/// HTTP surface toggles
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Serve Swagger UI and the OpenAPI document
    #[serde(default = "default_true")]
    pub docs_enabled: bool,
    #[serde(default)]
    pub cors_enabled: bool,
    /// Expose `POST /admin/reset`
    #[serde(default)]
    pub reset_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load settings from a specific configuration file path.
    ///
    /// A missing file is not an error; defaults and environment overrides still apply.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            .set_default("api.docs_enabled", true)?
            .set_default("api.cors_enabled", false)?
            .set_default("api.reset_enabled", false)?;

        if path.exists() {
            builder = builder.add_source(File::from(path).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Logging level cannot be empty".to_string(),
            )));
        }

        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(AppError::Config(config::ConfigError::Message(format!(
                "Unknown logging format '{}', expected 'json' or 'pretty'",
                other
            )))),
        }
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            api: ApiConfig {
                docs_enabled: true,
                cors_enabled: false,
                reset_enabled: false,
            },
        }
    }
}
