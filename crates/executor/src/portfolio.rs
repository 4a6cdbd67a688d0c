use crate::error::ExecutorError;
use core_types::Instrument;

/// Manages the holdings of a trading account.
/// Its sole responsibility is to accurately reflect the holdings after each executed sell.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    holdings: Vec<Instrument>,
}

impl Portfolio {
    /// Creates a `Portfolio` holding `holdings`, listed in the given order.
    pub fn new(holdings: Vec<Instrument>) -> Self {
        Self { holdings }
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.holdings
    }

    /// A simple utility to get a snapshot of a single holding.
    pub fn get(&self, instrument_id: &str) -> Option<&Instrument> {
        self.holdings.iter().find(|i| i.id == instrument_id)
    }

    /// Removes `quantity` units of `instrument_id` from the holdings.
    ///
    /// Holdings sold down to zero stay listed. Nothing changes when the sell is refused.
    pub fn apply_sell(&mut self, instrument_id: &str, quantity: u64) -> Result<&Instrument, ExecutorError> {
        let instrument = self
            .holdings
            .iter_mut()
            .find(|i| i.id == instrument_id)
            .ok_or_else(|| ExecutorError::InstrumentNotFound(instrument_id.to_string()))?;

        if instrument.quantity < quantity {
            return Err(ExecutorError::InsufficientQuantity {
                requested: quantity,
                available: instrument.quantity,
            });
        }

        instrument.quantity -= quantity;
        Ok(instrument)
    }
}
