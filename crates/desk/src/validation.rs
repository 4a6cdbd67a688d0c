//! Form validation utilities
//!
//! Provides validation rules for raw text inputs and the numeric values parsed from them.

use std::marker::PhantomData;
use std::str::FromStr;

/// Validation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg.as_str()),
        }
    }
}

/// Validation rule trait
pub trait ValidationRule<T: ?Sized>: Send + Sync {
    fn validate(&self, value: &T) -> ValidationResult;
}

/// Runs `rules` in order and stops at the first failure.
pub fn validate_all<T: ?Sized>(value: &T, rules: &[&dyn ValidationRule<T>]) -> ValidationResult {
    rules
        .iter()
        .map(|rule| rule.validate(value))
        .find(|result| !result.is_valid())
        .unwrap_or(ValidationResult::Valid)
}

/// Required field validator
pub struct Required {
    message: String,
}

impl Required {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ValidationRule<str> for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }
}

/// Accepts text that parses as `T`.
pub struct Numeric<T> {
    message: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Numeric<T> {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<T: FromStr> ValidationRule<str> for Numeric<T> {
    fn validate(&self, value: &str) -> ValidationResult {
        match value.trim().parse::<T>() {
            Ok(_) => ValidationResult::Valid,
            Err(_) => ValidationResult::Invalid(self.message.clone()),
        }
    }
}

/// Lower bound (inclusive) on a parsed value.
pub struct MinValue<T> {
    min: T,
    message: String,
}

impl<T> MinValue<T> {
    pub fn with_message(min: T, message: impl Into<String>) -> Self {
        Self {
            min,
            message: message.into(),
        }
    }
}

impl<T: PartialOrd + Send + Sync> ValidationRule<T> for MinValue<T> {
    fn validate(&self, value: &T) -> ValidationResult {
        if *value < self.min {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_required() {
        let rule = Required::with_message("Instrument is required");
        assert!(rule.validate("AAPL").is_valid());
        assert_eq!(rule.validate("   ").error_message(), Some("Instrument is required"));
    }

    #[test]
    fn test_numeric() {
        let rule = Numeric::<u64>::with_message("Whole number expected");
        assert!(rule.validate(" 12 ").is_valid());
        assert!(!rule.validate("1.5").is_valid());
        assert!(!rule.validate("-3").is_valid());

        let rule = Numeric::<Decimal>::with_message("Number expected");
        assert!(rule.validate("149.95").is_valid());
        assert_eq!(rule.validate("abc").error_message(), Some("Number expected"));
    }

    #[test]
    fn test_min_value() {
        let rule = MinValue::with_message(1u64, "Must be at least 1");
        assert!(rule.validate(&1).is_valid());
        assert_eq!(rule.validate(&0).error_message(), Some("Must be at least 1"));

        let rule = MinValue::with_message(Decimal::ZERO, "Must not be negative");
        assert!(rule.validate(&dec!(0)).is_valid());
        assert!(!rule.validate(&dec!(-0.01)).is_valid());
    }

    #[test]
    fn test_validate_all_reports_first_failure() {
        let required = Required::with_message("Quantity is required");
        let numeric = Numeric::<u64>::with_message("Quantity must be a whole number");
        let rules: [&dyn ValidationRule<str>; 2] = [&required, &numeric];

        assert_eq!(validate_all("", &rules).error_message(), Some("Quantity is required"));
        assert_eq!(
            validate_all("x", &rules).error_message(),
            Some("Quantity must be a whole number")
        );
        assert!(validate_all("3", &rules).is_valid());
    }
}
