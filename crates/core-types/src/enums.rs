use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    #[serde(rename = "B")]
    Buy,
    #[serde(rename = "S")]
    Sell,
}

impl TradeDirection {
    /// The single-letter code used on the wire.
    pub fn code(&self) -> char {
        match self {
            TradeDirection::Buy => 'B',
            TradeDirection::Sell => 'S',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The columns of an `Etf` row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EtfField {
    Ticker,
    FundName,
    Issuer,
    AumBillions,
    ExpenseRatio,
    ThreeMonthReturn,
    Segment,
}

impl EtfField {
    /// Column header used by the rendered table.
    pub fn header(&self) -> &'static str {
        match self {
            EtfField::Ticker => "Ticker",
            EtfField::FundName => "Fund Name",
            EtfField::Issuer => "Issuer",
            EtfField::AumBillions => "AUM (billions)",
            EtfField::ExpenseRatio => "Expense Ratio",
            EtfField::ThreeMonthReturn => "Three-Month Total Return",
            EtfField::Segment => "Segment",
        }
    }

    pub fn all() -> &'static [EtfField] {
        &[
            EtfField::Ticker,
            EtfField::FundName,
            EtfField::Issuer,
            EtfField::AumBillions,
            EtfField::ExpenseRatio,
            EtfField::ThreeMonthReturn,
            EtfField::Segment,
        ]
    }
}
