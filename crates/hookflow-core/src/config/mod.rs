//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a serde default so an empty or missing file
//! yields a usable configuration.

pub mod logging;
pub mod plugin;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::plugin::PluginConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay) and
/// `HOOKFLOW__*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Plugin selection settings.
    #[serde(default)]
    pub plugins: PluginConfig,
    /// Documentation output settings.
    #[serde(default)]
    pub docs: DocsConfig,
}

/// Documentation generator defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// File the generated documentation is written to. `None` prints to stdout.
    #[serde(default)]
    pub output: Option<String>,
    /// Grouping mode: `"none"` or `"plugin"`.
    #[serde(default = "default_group_by")]
    pub group_by: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            output: None,
            group_by: default_group_by(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the file at `path` with an optional environment overlay that
    /// lives next to it (`<dir>/<env>.toml`) and environment variables
    /// prefixed with `HOOKFLOW__`. Missing files are not an error.
    pub fn load(path: &str, env: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from(Path::new(path)).required(false));

        if let Some(env) = env {
            let overlay = Path::new(path)
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(format!("{env}.toml"));
            builder = builder.add_source(config::File::from(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("HOOKFLOW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_group_by() -> String {
    "none".to_string()
}
