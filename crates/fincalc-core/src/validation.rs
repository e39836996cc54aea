//! # Validation Module
//!
//! Input validation for interest calculations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (form, batch reader, RPC handler)                      │
//! │  ├── Parse text into f64                                                │
//! │  └── Immediate user feedback on non-numeric input                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Reject negative values                                             │
//! │  └── Reject NaN and ±infinity                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: interest formula (only ever sees finite, non-negative input)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fincalc_core::validation::{validate_principal, validate_rate};
//!
//! assert!(validate_principal(1000.0).is_ok());
//! assert!(validate_rate(-5.0).is_err());
//! ```

use crate::error::{CalcError, CalcResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a single monetary or temporal amount.
///
/// ## Rules
/// - Must be finite (not NaN, not ±infinity)
/// - Must be non-negative (>= 0); zero is allowed
///
/// Finiteness is checked first so a NaN never reaches the `< 0.0`
/// comparison (which would silently pass, since NaN compares false).
pub fn validate_amount(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::NonFiniteInput { field });
    }

    if value < 0.0 {
        return Err(CalcError::NegativeInput { field, value });
    }

    Ok(())
}

/// Validates a principal amount.
///
/// ## Rules
/// - Must be finite and non-negative
/// - Zero is allowed (no capital invested)
///
/// ## Example
/// ```rust
/// use fincalc_core::validation::validate_principal;
///
/// assert!(validate_principal(2500.0).is_ok());
/// assert!(validate_principal(0.0).is_ok());
/// assert!(validate_principal(-100.0).is_err());
/// ```
pub fn validate_principal(principal: f64) -> CalcResult<()> {
    validate_amount("principal", principal)
}

/// Validates an annual rate in percentage points.
///
/// ## Rules
/// - Must be finite and non-negative
/// - Zero is allowed (no growth)
/// - No upper bound: usurious rates are the caller's policy concern
pub fn validate_rate(annual_rate: f64) -> CalcResult<()> {
    validate_amount("annual_rate", annual_rate)
}

/// Validates a time span in years.
///
/// ## Rules
/// - Must be finite and non-negative
/// - May be fractional (2.5 = two and a half years)
pub fn validate_years(time_years: f64) -> CalcResult<()> {
    validate_amount("time_years", time_years)
}

/// Validates a full set of interest terms.
///
/// Checks fields in declaration order and stops at the first failure, so
/// the reported field is deterministic when several inputs are bad.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Quote Request                                                          │
/// │                                                                         │
/// │  Caller supplies (1000.0, 5.0, 2.0)                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_terms(1000.0, 5.0, 2.0) ← THIS FUNCTION                       │
/// │       │                                                                 │
/// │       ├── any field negative?   → Error, no computation runs            │
/// │       │                                                                 │
/// │       ├── any field non-finite? → Error, no computation runs            │
/// │       │                                                                 │
/// │       └── OK → Proceed with final_amount                                │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_terms(principal: f64, annual_rate: f64, time_years: f64) -> CalcResult<()> {
    validate_principal(principal)?;
    validate_rate(annual_rate)?;
    validate_years(time_years)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
