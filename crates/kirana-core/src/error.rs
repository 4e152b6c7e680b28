//! # Error Module: Domain Error Types
//!
//! ## Error Philosophy
//!
//! Kirana is deliberately stingy with errors. Store mutations are total
//! functions (bad transfers become FAILED audit records, unknown ids are
//! no-ops), so the only place typed errors surface is the **cart edge**,
//! where the cashier needs immediate, actionable feedback:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Cashier action          Error                               │
//! │  ──────────────          ─────                               │
//! │  Add sold-out item   ──► OutOfStock                          │
//! │  Oversell a line     ──► InsufficientStock {avail, wanted}   │
//! │  Edit missing line   ──► LineNotFound                        │
//! │  Pay empty cart      ──► EmptyCart                           │
//! │  Qty 0, discount>100 ──► Validation(..)                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All errors implement `std::error::Error` via `thiserror` and produce
//! human-readable messages suitable for direct display at the till.

use thiserror::Error;

/// Convenient Result alias used throughout the crate.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from cart editing and sale finalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The product has zero stock at the selected location.
    #[error("{name} is out of stock at this location")]
    OutOfStock {
        /// Product display name.
        name: String,
    },

    /// The requested quantity exceeds what the location holds.
    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Product display name.
        name: String,
        /// Units on hand at the selected location.
        available: i64,
        /// Units the cashier asked for.
        requested: i64,
    },

    /// A line edit referenced a product that is not in the cart.
    #[error("Product {product_id} is not in the cart")]
    LineNotFound {
        /// Product id the edit referenced.
        product_id: String,
    },

    /// Payment was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Input failed validation before any business rule ran.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Field-level validation failures.
///
/// Kept separate from [`CoreError`] so validators stay reusable and the
/// messages stay mechanical ("what rule broke", not "what to do about it").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be at least 1.
    #[error("{field} must be positive")]
    MustBePositive {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Value fell outside the allowed inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

// =============================================================================
// Tests
// =============================================================================
