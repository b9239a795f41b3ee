//! Application State
//!
//! Handlers share one read-only [`Dashboard`]; nothing here is mutated after
//! startup, so the state is cloned freely behind an `Arc`.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::page::Dashboard;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub config: Arc<ApiConfig>,
    /// Monotonic clock for uptime
    pub start_time: Instant,
    /// Wall clock start, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(dashboard: Arc<Dashboard>, config: ApiConfig) -> Self {
        Self {
            dashboard,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Ready once any table holds rows; an empty data directory still serves "no data" panels
    pub fn is_ready(&self) -> bool {
        self.dashboard.dataset().total_rows() > 0
    }
}

/// Listener address for the dashboard server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl ApiConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port` for `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(config: &ServerConfig) -> Self {
        Self::new(config.host.clone(), config.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_server_config() {
        let config = ApiConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8501");
    }

    #[test]
    fn test_from_server_config() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(ApiConfig::from(&server).addr(), "127.0.0.1:9000");
    }
}
