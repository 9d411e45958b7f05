//! Savings Plan Form Model
//!
//! Form input, validation rule and the submitted plan record.
//!
//! The only rule is the contribution-rate range: a monthly rate ("Sparrate")
//! must lie in the closed interval [`MIN_RATE`, `MAX_RATE`]. ETF and duration
//! are collected but not constrained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::etf::Etf;

/// Smallest accepted monthly rate in EUR
pub const MIN_RATE: f64 = 25.0;

/// Largest accepted monthly rate in EUR
pub const MAX_RATE: f64 = 10_000.0;

/// Message shown when the rate is outside [`MIN_RATE`, `MAX_RATE`]
pub const RATE_OUT_OF_RANGE: &str = "Sparrate muss zwischen 25 und 10.000 € liegen";

/// Values currently entered in the savings plan form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlanInput {
    pub etf: Etf,
    /// Monthly contribution in EUR
    pub rate: f64,
    /// Duration in years
    pub years: u32,
}

impl Default for SavingsPlanInput {
    fn default() -> Self {
        Self {
            etf: Etf::default(),
            rate: 100.0,
            years: 10,
        }
    }
}

/// Outcome of validating a [`SavingsPlanInput`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Check whether a monthly rate lies within the accepted bounds.
///
/// NaN (unparsable input) is never in range.
pub fn rate_in_range(rate: f64) -> bool {
    (MIN_RATE..=MAX_RATE).contains(&rate)
}

/// Validate the form input.
pub fn validate(input: &SavingsPlanInput) -> ValidationResult {
    if rate_in_range(input.rate) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(RATE_OUT_OF_RANGE)
    }
}

/// Parse the raw text of the rate field.
///
/// Accepts a German decimal comma. Anything that is not a number yields NaN,
/// which fails validation.
pub fn parse_rate(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(f64::NAN)
}

/// Parse the raw text of the years field, falling back to 0.
pub fn parse_years(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

impl SavingsPlanInput {
    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }

    /// Turn the input into a plan record, refusing input that fails validation.
    pub fn submit(self, seq: u32, created_at: DateTime<Utc>) -> Result<SavingsPlan, PlanError> {
        if !rate_in_range(self.rate) {
            return Err(PlanError::RateOutOfRange(self.rate));
        }

        Ok(SavingsPlan {
            seq,
            etf: self.etf,
            rate: self.rate,
            years: self.years,
            created_at,
        })
    }
}

/// A submitted savings plan, kept for the current session only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// Position in submission order, starting at 1
    pub seq: u32,
    pub etf: Etf,
    pub rate: f64,
    pub years: u32,
    pub created_at: DateTime<Utc>,
}

/// Plan submission errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Sparrate {0} liegt nicht zwischen 25 und 10.000 €")]
    RateOutOfRange(f64),
}

/// Shown by [`format_eur`] for NaN, infinities and amounts beyond `i64` cents
pub const INVALID_AMOUNT: &str = "ungültiger Betrag";

/// Format an amount the way the form labels it, e.g. `10.000 €` or `99,50 €`.
pub fn format_eur(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
        return INVALID_AMOUNT.to_string();
    }

    let cents = cents as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let euros = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(euros.len() + euros.len() / 3);
    for (i, digit) in euros.chars().enumerate() {
        if i > 0 && (euros.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if fraction == 0 {
        format!("{sign}{grouped} €")
    } else {
        format!("{sign}{grouped},{fraction:02} €")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rate: f64, years: u32) -> SavingsPlanInput {
        SavingsPlanInput {
            rate,
            years,
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_bounds_inclusive() {
        for rate in [25.0, 25.5, 200.0, 9_999.99, 10_000.0] {
            assert!(validate(&input(rate, 10)).is_valid, "rate {rate}");
        }
        for rate in [-1.0, 0.0, 10.0, 24.99, 10_000.01, 50_000.0] {
            assert!(!validate(&input(rate, 10)).is_valid, "rate {rate}");
        }
    }

    #[test]
    fn test_low_rate_message() {
        let result = validate(&input(10.0, 10));
        assert!(!result.is_valid);
        assert!(result.message.contains("zwischen 25 und 10.000 €"));
        assert_eq!(result.message, RATE_OUT_OF_RANGE);
    }

    #[test]
    fn test_valid_rate_has_empty_message() {
        let result = validate(&input(200.0, 15));
        assert_eq!(result, ValidationResult::valid());
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_years_and_etf_unconstrained() {
        for etf in Etf::ALL {
            let result = validate(&SavingsPlanInput {
                etf,
                rate: 100.0,
                years: 0,
            });
            assert!(result.is_valid);
        }
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(SavingsPlanInput::default().validate().is_valid);
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("200"), 200.0);
        assert_eq!(parse_rate(" 99,5 "), 99.5);
        assert!(parse_rate("").is_nan());
        assert!(parse_rate("abc").is_nan());
        assert!(!validate(&input(parse_rate(""), 10)).is_valid);
    }

    #[test]
    fn test_parse_years() {
        assert_eq!(parse_years("15"), 15);
        assert_eq!(parse_years(""), 0);
        assert_eq!(parse_years("-3"), 0);
    }

    #[test]
    fn test_submit() {
        let now = Utc::now();
        let plan = input(250.0, 20).submit(1, now).unwrap();
        assert_eq!(plan.seq, 1);
        assert_eq!(plan.rate, 250.0);
        assert_eq!(plan.years, 20);
        assert_eq!(plan.created_at, now);

        let err = input(10.0, 20).submit(2, now).unwrap_err();
        assert_eq!(err, PlanError::RateOutOfRange(10.0));
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(25.0), "25 €");
        assert_eq!(format_eur(10_000.0), "10.000 €");
        assert_eq!(format_eur(1_234_567.5), "1.234.567,50 €");
        assert_eq!(format_eur(99.99), "99,99 €");
        assert_eq!(format_eur(-50.0), "-50 €");
    }

    #[test]
    fn test_format_eur_out_of_range_amounts() {
        for amount in [-1e300, 1e300, f64::NEG_INFINITY, f64::INFINITY, f64::NAN] {
            assert_eq!(format_eur(amount), INVALID_AMOUNT, "amount {amount}");
        }
        assert_eq!(format_eur(-1e15), "-1.000.000.000.000.000 €");
    }
}
