//! # fincalc-core: Pure Financial Math for Fincalc
//!
//! This crate is the **heart** of Fincalc. It contains the simple-interest
//! calculation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fincalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Callers (outside this workspace)                │   │
//! │  │    Form input ──► Batch script ──► RPC handler ──► Display     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ three f64 arguments                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fincalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ interest  │  │ validation│  │   error   │  │   │
//! │  │   │   Terms   │  │  formula  │  │   rules   │  │ CalcError │  │   │
//! │  │   │ Breakdown │  │  rounding │  │   checks  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`interest`] - The simple-interest formula and the rounding rule
//! - [`types`] - Domain types (InterestTerms, AnnualRate, InterestBreakdown)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Validate First**: No arithmetic runs until every input is proven
//!    finite and non-negative
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! Because nothing here touches shared state, every function may be called
//! concurrently from any number of threads without synchronization.
//!
//! ## Example Usage
//!
//! ```rust
//! use fincalc_core::final_amount;
//!
//! // $1000 at 5% per year for 2 years
//! let amount = final_amount(1000.0, 5.0, 2.0).unwrap();
//! assert_eq!(amount, 1100.0);
//!
//! // Negative input is rejected before any computation
//! assert!(final_amount(1000.0, -5.0, 2.0).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod interest;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fincalc_core::final_amount` instead of
// `use fincalc_core::interest::final_amount`

pub use error::{CalcError, CalcResult};
pub use interest::{accrued_interest, final_amount, round_to_cents};
pub use types::{AnnualRate, InterestBreakdown, InterestTerms};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Divisor converting percentage points to a decimal fraction (5% → 0.05).
///
/// ## Why a constant?
/// Rates enter the API in percentage points because that is how people write
/// them. The conversion to a fraction happens in exactly one expression, and
/// this constant marks it.
pub const PERCENT_SCALE: f64 = 100.0;

/// Scale factor between currency units and cents, used by the rounding rule.
///
/// All public results are rounded to this precision (2 decimal places).
pub const CENTS_PER_UNIT: f64 = 100.0;
