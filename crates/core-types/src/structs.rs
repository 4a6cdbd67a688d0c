use crate::enums::TradeDirection;
use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the ETF listing.
///
/// Field names on the wire follow the published dataset (`Fund_Name`, `AUM_bil`, ...),
/// and all numeric attributes travel as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etf {
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Fund_Name")]
    pub fund_name: String,
    #[serde(rename = "Issuer")]
    pub issuer: String,
    /// Assets under management, in billions.
    #[serde(rename = "AUM_bil", with = "rust_decimal::serde::float")]
    pub aum_billions: Decimal,
    #[serde(rename = "Expense_Ratio", with = "rust_decimal::serde::float")]
    pub expense_ratio: Decimal,
    /// Trailing three-month total return, as a fraction.
    #[serde(rename = "ThreeMoTR", with = "rust_decimal::serde::float")]
    pub three_month_return: Decimal,
    #[serde(rename = "Segment")]
    pub segment: String,
}

/// A holding of the trading portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub quantity: u64,
}

/// An order sent to the trade execution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellTrade {
    pub instrument_id: String,
    pub quantity: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_price: Decimal,
    pub direction: TradeDirection,
    pub client_id: String,
    pub portfolio_id: String,
}

impl SellTrade {
    /// Builds a sell order, rejecting a zero quantity or a negative price.
    pub fn new(
        instrument_id: impl Into<String>,
        quantity: u64,
        target_price: Decimal,
        client_id: impl Into<String>,
        portfolio_id: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidInput(
                "quantity".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        if target_price.is_sign_negative() {
            return Err(CoreError::InvalidInput(
                "targetPrice".to_string(),
                format!("must not be negative, got {}", target_price),
            ));
        }
        Ok(Self {
            instrument_id: instrument_id.into(),
            quantity,
            target_price,
            direction: TradeDirection::Sell,
            client_id: client_id.into(),
            portfolio_id: portfolio_id.into(),
        })
    }
}

/// The receipt returned for an executed trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeResult {
    pub trade_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub execution_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_value: Decimal,
}
