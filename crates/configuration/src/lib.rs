use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{AccountConfig, ApiConfig, Config, LoggingConfig, PortfolioConfig, ServerConfig};

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at `path`
/// (optional), and `ETF_DESK_`-prefixed environment variables where nested keys are
/// separated by `__` (e.g. `ETF_DESK_API__BASE_URL`).
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("ETF_DESK")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path, base_url = %config.api.base_url, "Configuration loaded");
    Ok(config)
}

/// Parses configuration from an in-memory TOML document, without consulting the environment.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = load_config_from_str("").unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.account.client_id, "mock-client-id");
        assert_eq!(config.account.portfolio_id, "mock-portfolio-id");
        assert_eq!(config.portfolio.holdings.len(), 3);
        assert_eq!(config.portfolio.holdings[0].name, "AAPL");
        assert_eq!(config.portfolio.holdings[0].quantity, 100);
        assert_eq!(config.server.addr.port(), 3000);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let config = load_config_from_str(
            r#"
            [api]
            base_url = "http://localhost:8080"
            timeout_secs = 3

            [account]
            client_id = "c-42"
            portfolio_id = "p-7"

            [[portfolio.holdings]]
            id = "9"
            name = "TSLA"
            quantity = 5

            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.account.client_id, "c-42");
        assert_eq!(config.portfolio.holdings.len(), 1);
        assert_eq!(config.portfolio.holdings[0].name, "TSLA");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_validation_rejects_duplicate_holdings() {
        let result = load_config_from_str(
            r#"
            [[portfolio.holdings]]
            id = "1"
            name = "AAPL"
            quantity = 1

            [[portfolio.holdings]]
            id = "1"
            name = "MSFT"
            quantity = 2
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let result = load_config_from_str(
            r#"
            [api]
            base_url = "ftp://example.com"
            "#,
        );

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
