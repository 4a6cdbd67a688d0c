use comfy_table::{Cell, CellAlignment, Table};
use core_types::{Etf, EtfField, Instrument};
use rust_decimal::Decimal;

fn number(value: Decimal) -> Cell {
    Cell::new(value.normalize()).set_alignment(CellAlignment::Right)
}

/// Renders ETF rows in the order given, with the fixed column layout.
pub fn etf_table(rows: &[&Etf]) -> Table {
    let mut table = Table::new();
    table.set_header(EtfField::all().iter().map(|field| field.header()));

    for etf in rows {
        table.add_row(vec![
            Cell::new(&etf.ticker),
            Cell::new(&etf.fund_name),
            Cell::new(&etf.issuer),
            number(etf.aum_billions),
            number(etf.expense_ratio),
            number(etf.three_month_return),
            Cell::new(&etf.segment),
        ]);
    }

    table
}

pub fn instrument_table(instruments: &[Instrument]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Instrument", "Quantity"]);

    for instrument in instruments {
        table.add_row(vec![
            Cell::new(&instrument.id),
            Cell::new(&instrument.name),
            Cell::new(instrument.quantity).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn gld() -> Etf {
        Etf {
            ticker: "GLD".to_string(),
            fund_name: "SPDR Gold Trust".to_string(),
            issuer: "State Street".to_string(),
            aum_billions: dec!(58.76),
            expense_ratio: dec!(0.004),
            three_month_return: dec!(0.0784),
            segment: "Commodities: Precious Metals Gold".to_string(),
        }
    }

    #[test]
    fn test_etf_table_headers_in_fixed_order() {
        let rendered = etf_table(&[]).to_string();

        let positions: Vec<usize> = EtfField::all()
            .iter()
            .map(|field| rendered.find(field.header()).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_etf_row_shows_every_attribute() {
        let etf = gld();
        let rendered = etf_table(&[&etf]).to_string();

        for text in [
            "GLD",
            "SPDR Gold Trust",
            "State Street",
            "58.76",
            "0.004",
            "0.0784",
            "Commodities: Precious Metals Gold",
        ] {
            assert!(rendered.contains(text), "missing {}", text);
        }
    }

    #[test]
    fn test_instrument_table() {
        let rendered = instrument_table(&[Instrument {
            id: "1".to_string(),
            name: "AAPL".to_string(),
            quantity: 100,
        }])
        .to_string();

        assert!(rendered.contains("AAPL"));
        assert!(rendered.contains("100"));
    }
}
