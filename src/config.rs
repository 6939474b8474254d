use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Environment name used when none is configured.
pub const LOCAL_ENVIRONMENT: &str = "Local";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Named deployment environment, e.g. `Local` or `Azure`.
    pub environment: String,
    /// Root that relative CSV paths are joined onto in the local environment.
    pub content_root: Option<PathBuf>,
    /// CSV file path per environment name.
    pub csv_file_path: HashMap<String, String>,
    pub server: ServerConfig,
    pub logging: LoggingSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: LOCAL_ENVIRONMENT.to_string(),
            content_root: None,
            csv_file_path: HashMap::new(),
            server: ServerConfig::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("IBAS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from `path` (skipped if absent) with `IBAS_*` overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("IBAS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.environment.trim().is_empty() {
            config.environment = LOCAL_ENVIRONMENT.to_string();
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Configured CSV path for the active environment, if any.
    pub fn configured_csv_path(&self) -> Option<&str> {
        self.csv_file_path
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&self.environment))
            .map(|(_, path)| path.as_str())
    }

    /// Content root, falling back to the working directory.
    pub fn content_root(&self) -> PathBuf {
        self.content_root
            .clone()
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the CSV path for the active environment.
    pub fn csv_path(&self) -> PathBuf {
        resolve_csv_path(
            &self.environment,
            self.configured_csv_path(),
            &self.content_root(),
        )
    }
}

/// Resolve the CSV file path for `environment`.
///
/// Relative paths are joined onto `content_root` only in the local environment.
/// A missing path resolves to an empty one, which the loader reports as not found.
pub fn resolve_csv_path(
    environment: &str,
    configured: Option<&str>,
    content_root: &Path,
) -> PathBuf {
    let Some(configured) = configured.map(str::trim).filter(|p| !p.is_empty()) else {
        return PathBuf::new();
    };

    let path = PathBuf::from(configured);
    if is_local(environment) && path.is_relative() {
        content_root.join(path)
    } else {
        path
    }
}

fn is_local(environment: &str) -> bool {
    let environment = environment.trim();
    environment.is_empty() || environment.eq_ignore_ascii_case(LOCAL_ENVIRONMENT)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
