use crate::error::ConfigError;
use core_types::Instrument;
use serde::Deserialize;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub account: AccountConfig,
    pub server: ServerConfig,
    pub portfolio: PortfolioConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Checks the invariants `serde` cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError("api.base_url must not be empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError("api.timeout_secs must be positive".to_string()));
        }
        if self.account.client_id.trim().is_empty() || self.account.portfolio_id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "account.client_id and account.portfolio_id are required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for holding in &self.portfolio.holdings {
            if !seen.insert(holding.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate portfolio holding id '{}'",
                    holding.id
                )));
            }
        }

        Ok(())
    }
}

/// Where the trade desk API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// e.g. "http://127.0.0.1:3000"
    pub base_url: String,
    /// Per-request timeout for the HTTP client.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// The identity trades are booked against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub client_id: String,
    pub portfolio_id: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            client_id: "mock-client-id".to_string(),
            portfolio_id: "mock-portfolio-id".to_string(),
        }
    }
}

/// Settings for the mock backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// JSON file holding the ETF dataset served by `/api/etfs`.
    pub dataset_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            dataset_path: PathBuf::from("data/etfs.json"),
        }
    }
}

/// The holdings the mock backend starts with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub holdings: Vec<Instrument>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        let holding = |id: &str, name: &str, quantity| Instrument {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
        };
        Self {
            holdings: vec![
                holding("1", "AAPL", 100),
                holding("2", "GOOGL", 50),
                holding("3", "MSFT", 75),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, overridden by `RUST_LOG` when set.
    pub filter: String,
    /// When set, logs go to a daily rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
        }
    }
}
