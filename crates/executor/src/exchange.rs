use crate::error::ExecutorError;
use crate::portfolio::Portfolio;
use api_client::ApiClient;
use async_trait::async_trait;
use chrono::Utc;
use core_types::{Instrument, SellTrade, TradeDirection, TradeResult};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A generic trait for a trade execution service.
///
/// The sell form and the mock backend are written against this trait, so they do not
/// care whether trades land in the in-memory simulation or on a remote API.
#[async_trait]
pub trait Executor: Send + Sync {
    /// The holdings that can currently be sold.
    async fn instruments(&self) -> Result<Vec<Instrument>, ExecutorError>;

    /// Executes `trade` and returns the receipt.
    async fn execute(&self, trade: &SellTrade) -> Result<TradeResult, ExecutorError>;
}

/// The in-memory trade service.
///
/// Every sell fills in full at the requested price and is booked against the portfolio.
#[derive(Debug)]
pub struct SimulatedExecutor {
    portfolio: Mutex<Portfolio>,
}

impl SimulatedExecutor {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio: Mutex::new(portfolio),
        }
    }

    /// Rejects trades this service cannot book before the portfolio is touched.
    fn check(trade: &SellTrade) -> Result<(), ExecutorError> {
        if trade.direction != TradeDirection::Sell {
            return Err(ExecutorError::InvalidTrade(format!(
                "direction '{}' is not supported, only sells are",
                trade.direction.code()
            )));
        }
        if trade.quantity == 0 {
            return Err(ExecutorError::InvalidTrade("quantity must be greater than zero".to_string()));
        }
        if trade.target_price.is_sign_negative() {
            return Err(ExecutorError::InvalidTrade("target price must not be negative".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Executor for SimulatedExecutor {
    async fn instruments(&self) -> Result<Vec<Instrument>, ExecutorError> {
        Ok(self.portfolio.lock().await.instruments().to_vec())
    }

    async fn execute(&self, trade: &SellTrade) -> Result<TradeResult, ExecutorError> {
        tracing::debug!("SimulatedExecutor: Executing trade {:?}", trade);
        Self::check(trade)?;

        let cash_value = Decimal::from(trade.quantity)
            .checked_mul(trade.target_price)
            .ok_or_else(|| ExecutorError::InvalidTrade("trade value is out of range".to_string()))?;

        let mut portfolio = self.portfolio.lock().await;
        let remaining = portfolio.apply_sell(&trade.instrument_id, trade.quantity)?.quantity;

        let result = TradeResult {
            trade_id: format!("mock-trade-{}", Utc::now().timestamp_millis()),
            execution_price: trade.target_price,
            cash_value,
        };

        tracing::info!(
            trade_id = %result.trade_id,
            instrument_id = %trade.instrument_id,
            quantity = trade.quantity,
            remaining,
            "Simulated sell executed"
        );
        Ok(result)
    }
}

/// The executor that sends trades to the trade desk API via the `ApiClient`.
pub struct LiveExecutor {
    api_client: Arc<dyn ApiClient>,
}

impl LiveExecutor {
    pub fn new(api_client: Arc<dyn ApiClient>) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl Executor for LiveExecutor {
    async fn instruments(&self) -> Result<Vec<Instrument>, ExecutorError> {
        Ok(self.api_client.get_portfolio_instruments().await?)
    }

    async fn execute(&self, trade: &SellTrade) -> Result<TradeResult, ExecutorError> {
        tracing::debug!("LiveExecutor: Executing trade {:?}", trade);

        let result = self.api_client.execute_sell_trade(trade).await?;

        tracing::debug!("LiveExecutor: Received trade result: {:?}", result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::error::ApiError;
    use core_types::Etf;
    use rust_decimal_macros::dec;

    fn executor() -> SimulatedExecutor {
        SimulatedExecutor::new(Portfolio::new(vec![
            Instrument { id: "1".to_string(), name: "AAPL".to_string(), quantity: 100 },
            Instrument { id: "2".to_string(), name: "GOOGL".to_string(), quantity: 50 },
            Instrument { id: "3".to_string(), name: "MSFT".to_string(), quantity: 75 },
        ]))
    }

    fn sell(instrument_id: &str, quantity: u64, price: Decimal) -> SellTrade {
        SellTrade::new(instrument_id, quantity, price, "mock-client-id", "mock-portfolio-id").unwrap()
    }

    #[tokio::test]
    async fn test_simulated_sell_fills_at_target_price() {
        let executor = executor();

        let result = executor.execute(&sell("1", 50, dec!(150))).await.unwrap();

        assert!(result.trade_id.starts_with("mock-trade-"));
        assert_eq!(result.execution_price, dec!(150));
        assert_eq!(result.cash_value, dec!(7500));

        let instruments = executor.instruments().await.unwrap();
        assert_eq!(instruments[0].quantity, 50);
    }

    #[tokio::test]
    async fn test_simulated_oversell_is_rejected() {
        let executor = executor();

        let err = executor.execute(&sell("1", 150, dec!(150))).await.unwrap_err();

        assert_eq!(err.reason().as_deref(), Some("Insufficient quantity to sell"));
        assert_eq!(executor.instruments().await.unwrap()[0].quantity, 100);
    }

    #[tokio::test]
    async fn test_simulated_unknown_instrument() {
        let err = executor().execute(&sell("42", 1, dec!(1))).await.unwrap_err();
        assert_eq!(err.reason().as_deref(), Some("Instrument not found in portfolio"));
    }

    #[tokio::test]
    async fn test_simulated_rejects_buy_and_zero_quantity() {
        let executor = executor();

        let mut buy = sell("1", 1, dec!(10));
        buy.direction = TradeDirection::Buy;
        assert!(matches!(executor.execute(&buy).await, Err(ExecutorError::InvalidTrade(_))));

        let mut empty = sell("1", 1, dec!(10));
        empty.quantity = 0;
        assert!(matches!(executor.execute(&empty).await, Err(ExecutorError::InvalidTrade(_))));

        assert_eq!(executor.instruments().await.unwrap()[0].quantity, 100);
    }

    #[tokio::test]
    async fn test_simulated_overflowing_value_leaves_portfolio_untouched() {
        let executor = executor();

        let err = executor.execute(&sell("1", 10, Decimal::MAX)).await.unwrap_err();

        assert!(matches!(err, ExecutorError::InvalidTrade(_)));
        assert_eq!(executor.instruments().await.unwrap()[0].quantity, 100);
    }

    /// Answers every call with a canned outcome.
    struct CannedApi {
        rejection: Option<String>,
    }

    #[async_trait]
    impl ApiClient for CannedApi {
        async fn fetch_all_etfs(&self) -> Result<Vec<Etf>, ApiError> {
            Ok(Vec::new())
        }

        async fn fetch_expense_ratio_etfs(&self) -> Result<Vec<Etf>, ApiError> {
            Ok(Vec::new())
        }

        async fn get_portfolio_instruments(&self) -> Result<Vec<Instrument>, ApiError> {
            Ok(vec![Instrument { id: "1".to_string(), name: "AAPL".to_string(), quantity: 7 }])
        }

        async fn execute_sell_trade(&self, trade: &SellTrade) -> Result<TradeResult, ApiError> {
            match &self.rejection {
                Some(message) if message.is_empty() => Err(ApiError::Status { status: 503, body: String::new() }),
                Some(message) => Err(ApiError::Rejected { status: 422, message: message.clone() }),
                None => Ok(TradeResult {
                    trade_id: "remote-1".to_string(),
                    execution_price: trade.target_price,
                    cash_value: Decimal::from(trade.quantity) * trade.target_price,
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_live_executor_forwards_results() {
        let executor = LiveExecutor::new(Arc::new(CannedApi { rejection: None }));

        let result = executor.execute(&sell("1", 2, dec!(10.5))).await.unwrap();
        assert_eq!(result.trade_id, "remote-1");
        assert_eq!(result.cash_value, dec!(21));

        assert_eq!(executor.instruments().await.unwrap()[0].quantity, 7);
    }

    #[tokio::test]
    async fn test_live_executor_keeps_service_reason() {
        let executor = LiveExecutor::new(Arc::new(CannedApi {
            rejection: Some("Insufficient quantity to sell".to_string()),
        }));

        let err = executor.execute(&sell("1", 2, dec!(10))).await.unwrap_err();
        assert_eq!(err.reason().as_deref(), Some("Insufficient quantity to sell"));
    }

    #[tokio::test]
    async fn test_live_executor_transport_failure_has_no_reason() {
        let executor = LiveExecutor::new(Arc::new(CannedApi {
            rejection: Some(String::new()),
        }));

        let err = executor.execute(&sell("1", 2, dec!(10))).await.unwrap_err();
        assert_eq!(err.reason(), None);
    }
}
