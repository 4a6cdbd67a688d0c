use crate::error::ApiError;
use async_trait::async_trait;
use configuration::ApiConfig;
use core_types::{Etf, Instrument, SellTrade, TradeResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod error;
pub mod responses;
// --- Public API ---
pub use responses::{ApiErrorResponse, HealthResponse};

pub const ETFS_PATH: &str = "/api/etfs";
pub const EXPENSE_RATIO_ETFS_PATH: &str = "/api/etfs/expense-ratio";
pub const PORTFOLIO_INSTRUMENTS_PATH: &str = "/api/portfolio/instruments";
pub const TRADES_PATH: &str = "/api/trades";
pub const HEALTH_PATH: &str = "/api/health";

/// The abstract interface to the trade desk API.
/// Views and executors are written against this trait so the HTTP implementation can be
/// swapped for an in-process stub.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetches every ETF, in the order the source publishes them.
    async fn fetch_all_etfs(&self) -> Result<Vec<Etf>, ApiError>;

    /// Fetches the server-side expense-ratio view (pre-sorted, cheapest first).
    async fn fetch_expense_ratio_etfs(&self) -> Result<Vec<Etf>, ApiError>;

    /// Fetches the holdings of the configured portfolio.
    async fn get_portfolio_instruments(&self) -> Result<Vec<Instrument>, ApiError>;

    /// Submits a trade for execution.
    async fn execute_sell_trade(&self, trade: &SellTrade) -> Result<TradeResult, ApiError>;
}

/// `ApiClient` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(api_config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = api_config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidConfig("base_url is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api_config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Checks that the API answers at all.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get(HEALTH_PATH).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;
        decode_response(status, &text)
    }
}

/// Turns a raw HTTP response into either the expected payload or an `ApiError`.
///
/// Error bodies are expected to be `{"message": "..."}`; anything else is a bare status failure.
fn decode_response<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, ApiError> {
    if status.is_success() {
        return serde_json::from_str::<T>(text).map_err(|e| ApiError::Deserialization(e.to_string()));
    }

    match serde_json::from_str::<ApiErrorResponse>(text) {
        Ok(body) => {
            tracing::warn!(status = status.as_u16(), message = %body.message, "API request rejected");
            Err(ApiError::Rejected {
                status: status.as_u16(),
                message: body.message,
            })
        }
        Err(_) => {
            tracing::warn!(status = status.as_u16(), "API request failed without an error body");
            Err(ApiError::Status {
                status: status.as_u16(),
                body: text.trim().to_string(),
            })
        }
    }
}

#[async_trait]
impl ApiClient for RestClient {
    async fn fetch_all_etfs(&self) -> Result<Vec<Etf>, ApiError> {
        self.get(ETFS_PATH).await
    }

    async fn fetch_expense_ratio_etfs(&self) -> Result<Vec<Etf>, ApiError> {
        self.get(EXPENSE_RATIO_ETFS_PATH).await
    }

    async fn get_portfolio_instruments(&self) -> Result<Vec<Instrument>, ApiError> {
        self.get(PORTFOLIO_INSTRUMENTS_PATH).await
    }

    async fn execute_sell_trade(&self, trade: &SellTrade) -> Result<TradeResult, ApiError> {
        let url = self.url(TRADES_PATH);
        tracing::debug!(%url, instrument_id = %trade.instrument_id, quantity = trade.quantity, "POST trade");

        let response = self.client.post(&url).json(trade).send().await?;
        let status = response.status();
        let text = response.text().await?;
        decode_response(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = RestClient::new(&ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url(ETFS_PATH), "http://localhost:3000/api/etfs");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let result = RestClient::new(&ApiConfig {
            base_url: "  ".to_string(),
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }

    #[test]
    fn test_decode_success_payload() {
        let instruments: Vec<Instrument> =
            decode_response(StatusCode::OK, r#"[{"id":"1","name":"AAPL","quantity":100}]"#).unwrap();
        assert_eq!(instruments.len(), 1);
        assert_eq!(instruments[0].name, "AAPL");
    }

    #[test]
    fn test_decode_rejection_keeps_service_message() {
        let err = decode_response::<TradeResult>(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"Insufficient quantity to sell"}"#,
        )
        .unwrap_err();

        assert_eq!(err.service_message(), Some("Insufficient quantity to sell"));
        assert_eq!(err.to_string(), "Insufficient quantity to sell");
    }

    #[test]
    fn test_decode_failure_without_json_body() {
        let err = decode_response::<TradeResult>(StatusCode::BAD_GATEWAY, "").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
        assert_eq!(err.service_message(), None);

        let err = decode_response::<TradeResult>(StatusCode::INTERNAL_SERVER_ERROR, "boom\n").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, ref body } if body == "boom"));
    }

    #[test]
    fn test_decode_malformed_success_payload() {
        let err = decode_response::<Vec<Etf>>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
        assert_eq!(err.service_message(), None);
    }
}
