//! # Interest Module
//!
//! Simple-interest computation and the crate's single rounding rule.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SIMPLE INTEREST                                                        │
//! │                                                                         │
//! │  M = C * (1 + i * t)                                                    │
//! │                                                                         │
//! │    M = final amount                                                     │
//! │    C = principal (initial capital)                                      │
//! │    i = annual rate as a decimal fraction (5% → 0.05)                    │
//! │    t = time in years (may be fractional)                                │
//! │                                                                         │
//! │  Interest accrues on the ORIGINAL principal only. Nothing compounds.    │
//! │  $1000 at 5% for 2 years → $1000 + $100 = $1100                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fincalc_core::interest::final_amount;
//!
//! let amount = final_amount(1000.0, 5.0, 2.0).unwrap();
//! assert_eq!(amount, 1100.0);
//!
//! // Negative input never computes
//! assert!(final_amount(-100.0, 5.0, 2.0).is_err());
//! ```

use crate::error::CalcResult;
use crate::validation::validate_terms;
use crate::{CENTS_PER_UNIT, PERCENT_SCALE};

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a value to 2 decimal places, half away from zero.
///
/// ## Rounding Policy
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  HALF AWAY FROM ZERO (f64::round)                                       │
/// │                                                                         │
/// │  1.005 → 1.01      1.004 → 1.00      -1.005 → -1.01                     │
/// │                                                                         │
/// │  This is the standard library's rounding mode. It diverges from        │
/// │  half-to-even only when the scaled value lands EXACTLY on .5, which    │
/// │  binary floats almost never represent for decimal inputs.              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Every public result of this crate flows through this one function, so
/// the policy cannot drift between call sites.
///
/// ## Example
/// ```rust
/// use fincalc_core::interest::round_to_cents;
///
/// assert_eq!(round_to_cents(1100.004), 1100.0);
/// assert_eq!(round_to_cents(1100.006), 1100.01);
/// ```
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * CENTS_PER_UNIT).round() / CENTS_PER_UNIT
}

// =============================================================================
// Simple Interest
// =============================================================================

/// Computes the interest accrued on `principal` over `time_years` at
/// `annual_rate` percent per year, rounded to 2 decimal places.
///
/// ## Arguments
/// * `principal` - initial capital, non-negative
/// * `annual_rate` - percentage points per year (5.0 means 5%), non-negative
/// * `time_years` - duration in years, may be fractional, non-negative
///
/// ## Errors
/// Returns a [`crate::CalcError`] if any input is negative or non-finite.
/// No computation runs on invalid input.
///
/// ## Example
/// ```rust
/// use fincalc_core::interest::accrued_interest;
///
/// assert_eq!(accrued_interest(1000.0, 5.0, 2.0).unwrap(), 100.0);
/// assert_eq!(accrued_interest(1000.0, 0.0, 5.0).unwrap(), 0.0);
/// ```
pub fn accrued_interest(principal: f64, annual_rate: f64, time_years: f64) -> CalcResult<f64> {
    validate_terms(principal, annual_rate, time_years)?;
    Ok(round_to_cents(raw_interest(principal, annual_rate, time_years)))
}

/// Computes the final amount (principal + simple interest), rounded to
/// 2 decimal places.
///
/// ## Arguments
/// * `principal` - initial capital, non-negative
/// * `annual_rate` - percentage points per year (5.0 means 5%), non-negative
/// * `time_years` - duration in years, may be fractional, non-negative
///
/// ## Errors
/// Returns a [`crate::CalcError`] if any input is negative or non-finite.
/// Validation happens before any arithmetic, so a failed call has no
/// partial effects of any kind.
///
/// ## User Workflow
/// ```text
/// Principal: $1000.00, Rate: 5%, Time: 2 years
///      │
///      ▼
/// final_amount(1000.0, 5.0, 2.0) ← THIS FUNCTION
///      │
///      ▼
/// interest = 1000 * 0.05 * 2 = $100.00
///      │
///      ▼
/// Final Amount: $1100.00
/// ```
///
/// ## Example
/// ```rust
/// use fincalc_core::interest::final_amount;
///
/// assert_eq!(final_amount(2500.0, 3.5, 10.0).unwrap(), 3375.0);
/// ```
pub fn final_amount(principal: f64, annual_rate: f64, time_years: f64) -> CalcResult<f64> {
    validate_terms(principal, annual_rate, time_years)?;
    Ok(round_to_cents(
        principal + raw_interest(principal, annual_rate, time_years),
    ))
}

/// Unrounded interest. Callers must have validated the inputs already.
#[inline]
fn raw_interest(principal: f64, annual_rate: f64, time_years: f64) -> f64 {
    principal * (annual_rate / PERCENT_SCALE) * time_years
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_final_amount_basic() {
        // $1000 at 5% for 2 years = $1100
        assert_eq!(final_amount(1000.0, 5.0, 2.0).unwrap(), 1100.0);
    }

    #[test]
    fn test_final_amount_fractional_rate() {
        // $2500 at 3.5% for 10 years = $3375
        assert_eq!(final_amount(2500.0, 3.5, 10.0).unwrap(), 3375.0);
    }

    #[test]
    fn test_zero_principal_yields_zero() {
        assert_eq!(final_amount(0.0, 5.0, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_rate_yields_principal() {
        assert_eq!(final_amount(1000.0, 0.0, 5.0).unwrap(), 1000.0);
    }

    #[test]
    fn test_zero_time_yields_principal() {
        assert_eq!(final_amount(1000.0, 5.0, 0.0).unwrap(), 1000.0);
    }

    #[test]
    fn test_fractional_years() {
        // $1000 at 4% for 2.5 years = $1100
        assert_eq!(final_amount(1000.0, 4.0, 2.5).unwrap(), 1100.0);
    }

    #[test]
    fn test_negative_principal_rejected() {
        let err = final_amount(-100.0, 5.0, 2.0).unwrap_err();
        assert!(matches!(
            err,
            CalcError::NegativeInput {
                field: "principal",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = final_amount(1000.0, -5.0, 2.0).unwrap_err();
        assert!(matches!(
            err,
            CalcError::NegativeInput {
                field: "annual_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_time_rejected() {
        assert!(final_amount(1000.0, 5.0, -2.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(final_amount(f64::NAN, 5.0, 2.0).is_err());
        assert!(final_amount(1000.0, f64::INFINITY, 2.0).is_err());
        assert!(final_amount(1000.0, 5.0, f64::NAN).is_err());
    }

    #[test]
    fn test_accrued_interest() {
        assert_eq!(accrued_interest(1000.0, 5.0, 2.0).unwrap(), 100.0);
        assert_eq!(accrued_interest(2500.0, 3.5, 10.0).unwrap(), 875.0);
        assert_eq!(accrued_interest(0.0, 5.0, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = final_amount(1234.56, 7.89, 3.21).unwrap();
        let b = final_amount(1234.56, 7.89, 3.21).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_monotonic_in_principal() {
        let low = final_amount(1000.0, 5.0, 2.0).unwrap();
        let high = final_amount(2000.0, 5.0, 2.0).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_monotonic_in_rate() {
        let low = final_amount(1000.0, 5.0, 2.0).unwrap();
        let high = final_amount(1000.0, 6.0, 2.0).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_monotonic_in_time() {
        let low = final_amount(1000.0, 5.0, 2.0).unwrap();
        let high = final_amount(1000.0, 5.0, 3.0).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_result_never_below_principal() {
        assert!(final_amount(1000.0, 5.0, 2.0).unwrap() >= 1000.0);
        assert!(final_amount(1000.0, 0.0, 0.0).unwrap() >= 1000.0);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1100.004), 1100.0);
        assert_eq!(round_to_cents(1100.006), 1100.01);
        assert_eq!(round_to_cents(99.999), 100.0);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_sub_cent_interest_rounds() {
        // $1 at 0.1% for 1 year = $0.001 interest → rounds away
        assert_eq!(final_amount(1.0, 0.1, 1.0).unwrap(), 1.0);
        // $10 at 0.1% for 1 year = $0.01 interest → kept
        assert_eq!(final_amount(10.0, 0.1, 1.0).unwrap(), 10.01);
    }
}
