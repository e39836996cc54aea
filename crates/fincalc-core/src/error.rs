//! # Error Types
//!
//! Domain-specific error types for fincalc-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  Caller supplies (principal, annual_rate, time_years)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validation::validate_terms                                             │
//! │       │                                                                 │
//! │       ├── value < 0      → CalcError::NegativeInput { field, value }    │
//! │       ├── NaN / ±∞       → CalcError::NonFiniteInput { field }          │
//! │       │                                                                 │
//! │       └── OK → formula runs, no error path afterwards                   │
//! │                                                                         │
//! │  The error is surfaced to the caller as-is: no retry, no substitution,  │
//! │  no internal handling. Presentation is the caller's job.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Calculation Error
// =============================================================================

/// Errors produced when interest inputs fail validation.
///
/// Both variants carry the same meaning for callers: the argument set was
/// invalid and no computation took place. They are separate variants so the
/// message can name exactly what was wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An input was negative.
    ///
    /// ## When This Occurs
    /// - A caller passes a negative principal, rate, or time
    /// - Typically a sign error upstream (refund amount, date math gone wrong)
    ///
    /// ## User Workflow
    /// ```text
    /// final_amount(-100.0, 5.0, 2.0)
    ///      │
    ///      ▼
    /// NegativeInput { field: "principal", value: -100.0 }
    ///      │
    ///      ▼
    /// UI shows: "principal must be non-negative, got -100"
    /// ```
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: f64 },

    /// An input was NaN or infinite.
    ///
    /// ## When This Occurs
    /// - A caller forwards the result of a failed parse or a division by zero
    ///
    /// Rejected up front so garbage never reaches the formula; we do not
    /// propagate NaN results to callers.
    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

// =============================================================================
// Unit Tests
// =============================================================================
