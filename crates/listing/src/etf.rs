use crate::engine::{SortValue, Sortable};
use core_types::{Etf, EtfField};

impl Sortable for Etf {
    type Field = EtfField;

    fn sort_value(&self, field: EtfField) -> SortValue<'_> {
        match field {
            EtfField::Ticker => SortValue::Text(&self.ticker),
            EtfField::FundName => SortValue::Text(&self.fund_name),
            EtfField::Issuer => SortValue::Text(&self.issuer),
            EtfField::AumBillions => SortValue::Number(self.aum_billions),
            EtfField::ExpenseRatio => SortValue::Number(self.expense_ratio),
            EtfField::ThreeMonthReturn => SortValue::Number(self.three_month_return),
            EtfField::Segment => SortValue::Text(&self.segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{SortMode, apply};
    use core_types::{Etf, EtfField, SortDirection};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn etf(ticker: &str, aum: Decimal, er: Decimal, tr: Decimal) -> Etf {
        Etf {
            ticker: ticker.to_string(),
            fund_name: format!("{} Fund", ticker),
            issuer: "Issuer".to_string(),
            aum_billions: aum,
            expense_ratio: er,
            three_month_return: tr,
            segment: "Equity".to_string(),
        }
    }

    #[test]
    fn test_every_column_orders_etfs() {
        let etfs = vec![
            etf("SPY", dec!(500.1), dec!(0.0945), dec!(0.051)),
            etf("GLD", dec!(58.76), dec!(0.004), dec!(0.0784)),
            etf("VOO", dec!(410.3), dec!(0.0003), dec!(0.049)),
        ];

        let tickers = |field| {
            apply(&etfs, SortMode::ByField(field, SortDirection::Ascending))
                .iter()
                .map(|e| e.ticker.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(tickers(EtfField::Ticker), vec!["GLD", "SPY", "VOO"]);
        assert_eq!(tickers(EtfField::AumBillions), vec!["GLD", "VOO", "SPY"]);
        assert_eq!(tickers(EtfField::ExpenseRatio), vec!["VOO", "GLD", "SPY"]);
        assert_eq!(tickers(EtfField::ThreeMonthReturn), vec!["VOO", "SPY", "GLD"]);
        // Ties on every row fall back to load order.
        assert_eq!(tickers(EtfField::Segment), vec!["SPY", "GLD", "VOO"]);
    }
}
