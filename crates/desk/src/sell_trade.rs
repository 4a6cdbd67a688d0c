use crate::validation::{MinValue, Numeric, Required, ValidationRule, validate_all};
use configuration::AccountConfig;
use core_types::{Instrument, SellTrade, TradeResult};
use executor::Executor;
use rust_decimal::Decimal;
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "Trade executed successfully";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to execute sell trade";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load portfolio instruments";

/// The raw contents of the sell form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellTradeInput {
    pub instrument_id: String,
    pub quantity: String,
    pub target_price: String,
}

impl SellTradeInput {
    pub fn new(
        instrument_id: impl Into<String>,
        quantity: impl Into<String>,
        target_price: impl Into<String>,
    ) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            quantity: quantity.into(),
            target_price: target_price.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instrument_id.is_empty() && self.quantity.is_empty() && self.target_price.is_empty()
    }
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub instrument_id: Option<String>,
    pub quantity: Option<String>,
    pub target_price: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.instrument_id.is_none() && self.quantity.is_none() && self.target_price.is_none()
    }
}

/// A form that passed validation, with its values parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSell {
    pub instrument_id: String,
    pub quantity: u64,
    pub target_price: Decimal,
}

/// Validates the raw form: every field is required, the quantity is a whole number of at
/// least one unit and the target price is a non-negative number.
pub fn validate(input: &SellTradeInput) -> Result<ValidSell, FieldErrors> {
    let mut errors = FieldErrors::default();

    let instrument_required = Required::with_message("Instrument is required");
    errors.instrument_id = instrument_required
        .validate(input.instrument_id.as_str())
        .error_message()
        .map(str::to_string);

    let quantity_required = Required::with_message("Quantity is required");
    let quantity_numeric = Numeric::<u64>::with_message("Quantity must be a whole number");
    let quantity_rules: [&dyn ValidationRule<str>; 2] = [&quantity_required, &quantity_numeric];
    let mut quantity = None;
    match validate_all(input.quantity.as_str(), &quantity_rules).error_message() {
        Some(message) => errors.quantity = Some(message.to_string()),
        None => {
            let parsed = input.quantity.trim().parse::<u64>().unwrap_or_default();
            let min = MinValue::with_message(1u64, "Quantity must be at least 1");
            match min.validate(&parsed).error_message() {
                Some(message) => errors.quantity = Some(message.to_string()),
                None => quantity = Some(parsed),
            }
        }
    }

    let price_required = Required::with_message("Target price is required");
    let price_numeric = Numeric::<Decimal>::with_message("Target price must be a number");
    let price_rules: [&dyn ValidationRule<str>; 2] = [&price_required, &price_numeric];
    let mut target_price = None;
    match validate_all(input.target_price.as_str(), &price_rules).error_message() {
        Some(message) => errors.target_price = Some(message.to_string()),
        None => {
            let parsed = input.target_price.trim().parse::<Decimal>().unwrap_or_default();
            let min = MinValue::with_message(Decimal::ZERO, "Target price must not be negative");
            match min.validate(&parsed).error_message() {
                Some(message) => errors.target_price = Some(message.to_string()),
                None => target_price = Some(parsed),
            }
        }
    }

    match (errors.is_empty(), quantity, target_price) {
        (true, Some(quantity), Some(target_price)) => Ok(ValidSell {
            instrument_id: input.instrument_id.trim().to_string(),
            quantity,
            target_price,
        }),
        _ => Err(errors),
    }
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trade went through; the form was cleared and the holdings reloaded.
    Executed(TradeResult),
    /// The service refused or could not be reached; the form is kept as typed.
    Failed(String),
    /// The form did not validate; nothing was sent.
    Invalid(FieldErrors),
}

/// The sell-trade form and its notifications.
pub struct SellTradeForm {
    executor: Arc<dyn Executor>,
    account: AccountConfig,
    input: SellTradeInput,
    instruments: Vec<Instrument>,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl SellTradeForm {
    pub fn new(executor: Arc<dyn Executor>, account: AccountConfig) -> Self {
        Self {
            executor,
            account,
            input: SellTradeInput::default(),
            instruments: Vec::new(),
            error_message: None,
            success_message: None,
        }
    }

    /// Fetches the holdings offered in the instrument selector.
    pub async fn load_portfolio_instruments(&mut self) {
        match self.executor.instruments().await {
            Ok(instruments) => {
                tracing::debug!(count = instruments.len(), "Portfolio instruments loaded");
                self.instruments = instruments;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load portfolio instruments");
                self.error_message = Some(LOAD_FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Replaces every field at once.
    pub fn set_value(&mut self, input: SellTradeInput) {
        self.input = input;
    }

    pub fn input(&self) -> &SellTradeInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut SellTradeInput {
        &mut self.input
    }

    pub fn is_valid(&self) -> bool {
        validate(&self.input).is_ok()
    }

    pub fn validation_errors(&self) -> FieldErrors {
        validate(&self.input).err().unwrap_or_default()
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.input = SellTradeInput::default();
    }

    /// Validates the form and, if it is valid, makes one attempt at executing the sell.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let valid = match validate(&self.input) {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(?errors, "Sell form is invalid, nothing submitted");
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.error_message = None;
        self.success_message = None;

        let trade = match SellTrade::new(
            valid.instrument_id,
            valid.quantity,
            valid.target_price,
            self.account.client_id.as_str(),
            self.account.portfolio_id.as_str(),
        ) {
            Ok(trade) => trade,
            Err(e) => {
                tracing::warn!(error = %e, "Sell trade rejected before submission");
                let message = e.to_string();
                self.error_message = Some(message.clone());
                return SubmitOutcome::Failed(message);
            }
        };

        match self.executor.execute(&trade).await {
            Ok(result) => {
                tracing::info!(trade_id = %result.trade_id, "Trade executed successfully");
                self.reset();
                self.success_message = Some(SUCCESS_MESSAGE.to_string());
                self.load_portfolio_instruments().await;
                SubmitOutcome::Executed(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, instrument_id = %trade.instrument_id, "Sell trade failed");
                let message = e.reason().unwrap_or_else(|| SUBMIT_FAILURE_MESSAGE.to_string());
                self.error_message = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn portfolio_instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }
}
