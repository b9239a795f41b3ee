//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::DataSources;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,

    /// Per-file overrides, relative to `dir` unless absolute
    pub order_items: Option<String>,
    pub customer_locations: Option<String>,
    pub city_orders: Option<String>,
    pub state_categories: Option<String>,
}

fn default_data_dir() -> String {
    "./main_data".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            order_items: None,
            customer_locations: None,
            city_orders: None,
            state_categories: None,
        }
    }
}

impl DataConfig {
    /// Resolve the four input paths
    pub fn sources(&self) -> DataSources {
        let dir = Path::new(&self.dir);
        let mut sources = DataSources::from_dir(dir);

        let resolve = |file: &Option<String>, slot: &mut PathBuf| {
            if let Some(file) = file {
                *slot = dir.join(file);
            }
        };
        resolve(&self.order_items, &mut sources.order_items);
        resolve(&self.customer_locations, &mut sources.customer_locations);
        resolve(&self.city_orders, &mut sources.city_orders);
        resolve(&self.state_categories, &mut sources.state_categories);

        sources
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
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
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Customer map configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    /// GeoJSON file with country outlines; markers only when unset
    pub boundaries: Option<String>,

    #[serde(default = "default_country")]
    pub country: String,

    /// Feature property compared against `country`
    #[serde(default = "default_country_property")]
    pub country_property: String,
}

fn default_country() -> String {
    "Brazil".to_string()
}

fn default_country_property() -> String {
    "SOVEREIGNT".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            boundaries: None,
            country: default_country(),
            country_property: default_country_property(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    /// Parse TOML content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Explicit path if given (errors are fatal), else the default search
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("ecommerce-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("DASHBOARD_DATA_DIR") {
            self.data.dir = dir;
        }

        if let Some(host) = lookup("DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Some(path) = lookup("DASHBOARD_BOUNDARIES") {
            self.map.boundaries = Some(path);
        }

        if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# E-Commerce Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_DATA_DIR
# - DASHBOARD_HOST
# - DASHBOARD_PORT
# - DASHBOARD_BOUNDARIES
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[data]
# Directory holding the CSV extracts
dir = "./main_data"

# Optional per-file overrides (relative to dir)
# order_items = "items_orders_products_data.csv"
# customer_locations = "state_mark_customer_count_data.csv"
# city_orders = "order_city_count_data.csv"
# state_categories = "product_in_state_data.csv"

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

[map]
# GeoJSON country outlines (e.g. Natural Earth admin-0 countries).
# Shapefiles are not read directly; convert one first:
#   ogr2ogr -f GeoJSON main_data/country_map/countries.geojson \
#       main_data/country_map/ne_10m_admin_0_countries.shp
# boundaries = "./main_data/country_map/countries.geojson"

# Country drawn under the customer markers
country = "Brazil"

# Feature property matched against country
country_property = "SOVEREIGNT"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config(), Path::new("generated.toml")).unwrap();

        assert_eq!(config.data.dir, "./main_data");
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.map.country, "Brazil");
        assert_eq!(config.map.country_property, "SOVEREIGNT");
        assert!(config.map.boundaries.is_none());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_explains_shapefile_conversion() {
        let content = generate_default_config();
        assert!(content.contains("ogr2ogr -f GeoJSON"));
        assert!(content.contains("ne_10m_admin_0_countries.shp"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n", Path::new("partial.toml")).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[server\nport = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DASHBOARD_DATA_DIR", "/srv/data"),
            ("DASHBOARD_PORT", "8080"),
            ("DASHBOARD_BOUNDARIES", "/srv/countries.geojson"),
            ("DASHBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.dir, "/srv/data");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.map.boundaries.as_deref(), Some("/srv/countries.geojson"));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "DASHBOARD_PORT").then(|| "eighty".to_string()));
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_data_sources_resolution() {
        let config = Config::parse(
            "[data]\ndir = \"/data\"\ncity_orders = \"cities.csv\"\n",
            Path::new("inline.toml"),
        )
        .unwrap();
        let sources = config.data.sources();

        assert_eq!(sources.city_orders, PathBuf::from("/data/cities.csv"));
        assert_eq!(
            sources.order_items,
            PathBuf::from("/data/items_orders_products_data.csv")
        );
    }
}
