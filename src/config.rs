use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::CategoryId;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Path to the SQLite database holding saved locations and settings
    pub database_path: ConfigValue<PathBuf>,
    /// Category shown when `locations list` is run without `--category`
    pub default_category: ConfigValue<CategoryId>,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: ConfigValue<String>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    database_path: Option<PathBuf>,
    default_category: Option<CategoryId>,
    log_filter: Option<String>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, |name| std::env::var(name).ok())
    }

    fn load_with_env(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut database_path = ConfigValue::new(
            Self::default_data_dir().join("parks.db"),
            ConfigSource::Default,
        );
        let mut default_category = ConfigValue::new(CategoryId::Iconic, ConfigSource::Default);
        let mut log_filter = ConfigValue::new("warn".to_string(), ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(db_path) = file_config.database_path {
                // Resolve relative paths against config file's directory
                let resolved_path = if db_path.is_relative() {
                    path.parent().map(|p| p.join(&db_path)).unwrap_or(db_path)
                } else {
                    db_path
                };
                database_path = ConfigValue::new(resolved_path, ConfigSource::File);
            }
            if let Some(category) = file_config.default_category {
                default_category = ConfigValue::new(category, ConfigSource::File);
            }
            if let Some(filter) = file_config.log_filter {
                log_filter = ConfigValue::new(filter, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Some(db_path) = env("PARKS_DATABASE_PATH") {
            database_path = ConfigValue::new(PathBuf::from(db_path), ConfigSource::Environment);
        }
        if let Some(category) = env("PARKS_DEFAULT_CATEGORY") {
            let category = category
                .parse()
                .map_err(|e| ConfigError::InvalidEnv("PARKS_DEFAULT_CATEGORY", e))?;
            default_category = ConfigValue::new(category, ConfigSource::Environment);
        }
        if let Some(filter) = env("PARKS_LOG") {
            log_filter = ConfigValue::new(filter, ConfigSource::Environment);
        }

        Ok(Self {
            database_path,
            default_category,
            log_filter,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/fauna-parks/
    /// - macOS: ~/Library/Application Support/fauna-parks/
    /// - Windows: %APPDATA%/fauna-parks/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fauna-parks")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/fauna-parks/
    /// - macOS: ~/Library/Application Support/fauna-parks/
    /// - Windows: %APPDATA%/fauna-parks/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fauna-parks")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidEnv(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidEnv(name, e) => {
                write!(f, "Invalid value in {}: {}", name, e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config
            .database_path
            .value
            .to_string_lossy()
            .contains("parks.db"));
        assert_eq!(config.database_path.source, ConfigSource::Default);
        assert_eq!(config.default_category.value, CategoryId::Iconic);
        assert_eq!(config.default_category.source, ConfigSource::Default);
        assert_eq!(config.config_file, None);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_path: /custom/path/parks.sqlite").unwrap();
        writeln!(file, "default_category: 3").unwrap();
        writeln!(file, "log_filter: debug").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(
            config.database_path.value,
            PathBuf::from("/custom/path/parks.sqlite")
        );
        assert_eq!(config.database_path.source, ConfigSource::File);
        assert_eq!(config.default_category.value, CategoryId::Family);
        assert_eq!(config.default_category.source, ConfigSource::File);
        assert_eq!(config.log_filter.value, "debug");
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_database_path_resolves_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "database_path: data/parks.db").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(
            config.database_path.value,
            temp_dir.path().join("data/parks.db")
        );
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "default_category: 1").unwrap();
        writeln!(file, "log_filter: debug").unwrap();

        let env = |name: &str| match name {
            "PARKS_DEFAULT_CATEGORY" => Some("remote".to_string()),
            "PARKS_DATABASE_PATH" => Some("/env/parks.db".to_string()),
            _ => None,
        };

        let config = Config::load_with_env(Some(config_path), env).unwrap();
        assert_eq!(config.default_category.value, CategoryId::Remote);
        assert_eq!(config.default_category.source, ConfigSource::Environment);
        assert_eq!(config.database_path.value, PathBuf::from("/env/parks.db"));
        assert_eq!(config.database_path.source, ConfigSource::Environment);
        assert_eq!(config.log_filter.value, "debug");
        assert_eq!(config.log_filter.source, ConfigSource::File);
    }

    #[test]
    fn test_invalid_env_category_is_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let env = |name: &str| (name == "PARKS_DEFAULT_CATEGORY").then(|| "7".to_string());
        let err = Config::load_with_env(Some(config_path), env).unwrap_err();
        assert!(err.to_string().contains("PARKS_DEFAULT_CATEGORY"));
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_category_name_in_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "default_category: remote").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.default_category.value, CategoryId::Remote);
        assert_eq!(config.default_category.source, ConfigSource::File);
    }

    #[test]
    fn test_unknown_category_in_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "default_category: 9").unwrap();
        assert!(Config::load(Some(config_path.clone())).is_err());

        std::fs::write(&config_path, "default_category: swamp\n").unwrap();
        assert!(Config::load(Some(config_path)).is_err());
    }

    #[test]
    fn test_partial_file_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "log_filter: info").unwrap();
        // database_path not specified

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.database_path.source, ConfigSource::Default);
        assert_eq!(config.log_filter.value, "info");
        assert_eq!(config.log_filter.source, ConfigSource::File);
    }
}
