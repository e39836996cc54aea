//! # Domain Types
//!
//! Core domain types for interest calculations.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────────┐  │
//! │  │  InterestTerms  │   │    AnnualRate    │   │  InterestBreakdown  │  │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────────  │  │
//! │  │  principal      │   │  percent (f64)   │   │  principal          │  │
//! │  │  annual_rate    │   │  5.0 = 5%        │   │  interest           │  │
//! │  │  time_years     │   │                  │   │  final_amount       │  │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────────┘  │
//! │                                                                         │
//! │  InterestTerms is validated at construction, so a value of this type   │
//! │  is PROOF the inputs were finite and non-negative.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::interest::{accrued_interest, final_amount};
use crate::validation::validate_terms;

// =============================================================================
// Annual Rate
// =============================================================================

/// Annual interest rate in percentage points.
///
/// ## Why Percentage Points?
/// Rates arrive from users and documents as "5%" or "3.5%", not as 0.05.
/// Storing the number people actually write removes one conversion bug; the
/// division by 100 happens in exactly one place, inside the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualRate(f64);

impl AnnualRate {
    /// Creates a rate from percentage points (5.0 means 5%).
    #[inline]
    pub const fn from_percent(percent: f64) -> Self {
        AnnualRate(percent)
    }

    /// Returns the rate in percentage points.
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a decimal fraction (5% → 0.05).
    #[inline]
    pub fn as_fraction(&self) -> f64 {
        self.0 / crate::PERCENT_SCALE
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        AnnualRate(0.0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for AnnualRate {
    fn default() -> Self {
        AnnualRate::zero()
    }
}

// =============================================================================
// Interest Terms
// =============================================================================

/// A validated set of simple-interest inputs.
///
/// Construction runs the full validation pass, so any `InterestTerms` value
/// carries finite, non-negative fields and its compute methods cannot fail.
///
/// ## Example
/// ```rust
/// use fincalc_core::types::InterestTerms;
///
/// let terms = InterestTerms::new(1000.0, 5.0, 2.0).unwrap();
/// assert_eq!(terms.final_amount(), 1100.0);
///
/// assert!(InterestTerms::new(-100.0, 5.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTerms")]
pub struct InterestTerms {
    /// Initial capital invested.
    principal: f64,

    /// Annual rate in percentage points (5.0 = 5%).
    annual_rate: f64,

    /// Duration in years, may be fractional.
    time_years: f64,
}

impl InterestTerms {
    /// Creates a validated set of terms.
    ///
    /// ## Errors
    /// Returns a [`crate::CalcError`] if any field is negative or
    /// non-finite.
    pub fn new(principal: f64, annual_rate: f64, time_years: f64) -> CalcResult<Self> {
        validate_terms(principal, annual_rate, time_years)?;
        Ok(InterestTerms {
            principal,
            annual_rate,
            time_years,
        })
    }

    /// The principal amount.
    #[inline]
    pub const fn principal(&self) -> f64 {
        self.principal
    }

    /// The annual rate as a typed value.
    #[inline]
    pub const fn annual_rate(&self) -> AnnualRate {
        AnnualRate::from_percent(self.annual_rate)
    }

    /// The duration in years.
    #[inline]
    pub const fn time_years(&self) -> f64 {
        self.time_years
    }

    /// Final amount (principal + interest), rounded to 2 decimal places.
    ///
    /// Infallible: the terms were validated at construction.
    pub fn final_amount(&self) -> f64 {
        // Validation already passed, so the inner Result is always Ok
        final_amount(self.principal, self.annual_rate, self.time_years)
            .unwrap_or(self.principal)
    }

    /// Full breakdown of the calculation.
    pub fn breakdown(&self) -> InterestBreakdown {
        let interest = accrued_interest(self.principal, self.annual_rate, self.time_years)
            .unwrap_or(0.0);
        InterestBreakdown {
            principal: crate::interest::round_to_cents(self.principal),
            interest,
            final_amount: self.final_amount(),
        }
    }
}

/// Unvalidated wire shape for [`InterestTerms`].
///
/// Deserialization goes through `TryFrom`, so JSON input gets the same
/// validation as [`InterestTerms::new`] and a negative field in a payload
/// is rejected at parse time.
#[derive(Deserialize)]
struct RawTerms {
    principal: f64,
    annual_rate: f64,
    time_years: f64,
}

impl TryFrom<RawTerms> for InterestTerms {
    type Error = crate::CalcError;

    fn try_from(raw: RawTerms) -> CalcResult<Self> {
        InterestTerms::new(raw.principal, raw.annual_rate, raw.time_years)
    }
}

// =============================================================================
// Interest Breakdown
// =============================================================================

/// The result of a simple-interest calculation, itemized.
///
/// All three fields are rounded to 2 decimal places.
///
/// ## Example
/// ```rust
/// use fincalc_core::types::InterestTerms;
///
/// let breakdown = InterestTerms::new(2500.0, 3.5, 10.0).unwrap().breakdown();
/// assert_eq!(breakdown.principal, 2500.0);
/// assert_eq!(breakdown.interest, 875.0);
/// assert_eq!(breakdown.final_amount, 3375.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestBreakdown {
    /// The principal, echoed back rounded to cents.
    pub principal: f64,

    /// Interest accrued over the full period.
    pub interest: f64,

    /// Principal plus interest.
    pub final_amount: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_rate_conversions() {
        let rate = AnnualRate::from_percent(5.0);
        assert_eq!(rate.percent(), 5.0);
        assert_eq!(rate.as_fraction(), 0.05);
        assert!(!rate.is_zero());

        assert!(AnnualRate::zero().is_zero());
        assert!(AnnualRate::default().is_zero());
    }

    #[test]
    fn test_terms_validate_on_construction() {
        assert!(InterestTerms::new(1000.0, 5.0, 2.0).is_ok());
        assert!(InterestTerms::new(-1.0, 5.0, 2.0).is_err());
        assert!(InterestTerms::new(1000.0, f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_terms_compute() {
        let terms = InterestTerms::new(1000.0, 5.0, 2.0).unwrap();
        assert_eq!(terms.final_amount(), 1100.0);
        assert_eq!(terms.principal(), 1000.0);
        assert_eq!(terms.annual_rate().percent(), 5.0);
        assert_eq!(terms.time_years(), 2.0);
    }

    #[test]
    fn test_breakdown_components_sum() {
        let breakdown = InterestTerms::new(2500.0, 3.5, 10.0).unwrap().breakdown();
        assert_eq!(breakdown.interest, 875.0);
        assert_eq!(breakdown.principal + breakdown.interest, breakdown.final_amount);
    }

    #[test]
    fn test_breakdown_zero_rate() {
        let breakdown = InterestTerms::new(1000.0, 0.0, 5.0).unwrap().breakdown();
        assert_eq!(breakdown.interest, 0.0);
        assert_eq!(breakdown.final_amount, 1000.0);
    }

    #[test]
    fn test_terms_json_shape() {
        let terms = InterestTerms::new(1000.0, 5.0, 2.0).unwrap();
        let json = serde_json::to_value(terms).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "principal": 1000.0,
                "annual_rate": 5.0,
                "time_years": 2.0
            })
        );
    }

    #[test]
    fn test_terms_deserialization_validates() {
        let ok: Result<InterestTerms, _> = serde_json::from_str(
            r#"{"principal": 1000.0, "annual_rate": 5.0, "time_years": 2.0}"#,
        );
        assert_eq!(ok.unwrap().final_amount(), 1100.0);

        let bad: Result<InterestTerms, _> = serde_json::from_str(
            r#"{"principal": -100.0, "annual_rate": 5.0, "time_years": 2.0}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_breakdown_json_shape() {
        let breakdown = InterestTerms::new(1000.0, 5.0, 2.0).unwrap().breakdown();
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "principal": 1000.0,
                "interest": 100.0,
                "final_amount": 1100.0
            })
        );
    }
}
