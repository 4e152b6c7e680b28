//! # kirana-core: Pure Business Logic for Kirana
//!
//! This crate is the **heart** of Kirana. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kirana Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     UI Shell (out of scope)                     │   │
//! │  │    POS screen ──► Inventory ──► Reports ──► AI Assistant       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kirana-store (state)                         │   │
//! │  │    Store aggregate, transfer engine, notification log           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kirana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  billing  │  │ inventory │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ low stock │  │   │
//! │  │   │   Sale    │  │  Percent  │  │BillTotals │  │ dead stock│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │  reports  │  │ validation│                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO GLOBAL STATE • PURE FUNCTIONS   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Transfer, Customer, etc.)
//! - [`money`] - Money in integer paise and Percent in basis points
//! - [`billing`] - Cart, line math, bill totals, sale finalization
//! - [`inventory`] - Low-stock / dead-stock / expiry classification
//! - [`reports`] - Pure reporting aggregators (GST, analytics, rollups)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the cart edge
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - dates are arguments,
//!    never read from the system clock
//! 2. **No I/O**: Network, file system, database access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are paise (i64), all rates are
//!    basis points (u32) - no floating point in money paths
//! 4. **Explicit Errors**: Cart editing returns typed errors; everything else
//!    is total
//!
//! ## Example Usage
//!
//! ```rust
//! use kirana_core::money::{Money, Percent};
//!
//! // Create money from paise (never from floats!)
//! let price = Money::from_rupees(120); // ₹120.00
//!
//! // GST at 5% = 500 basis points
//! let gst = price.percent_of(Percent::from_bps(500));
//! assert_eq!(gst.paise(), 600); // ₹6.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod inventory;
pub mod money;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kirana_core::Money` instead of
// `use kirana_core::money::Money`

pub use billing::{BillTotals, Cart};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Percent};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Days without a sale after which on-hand stock counts as dead stock.
///
/// ## Business Reason
/// Slow movers tie up shelf space and working capital. Sixty days is the
/// cutoff the reporting screens and the dashboard health widget agree on.
pub const DEAD_STOCK_AGE_DAYS: i64 = 60;

/// Days-to-expiry window below which a product is flagged "expiring soon".
pub const EXPIRY_SOON_DAYS: i64 = 30;

/// Loyalty accrual rate: one point per ₹100 of sale total.
///
/// ## Business Reason
/// Points are whole numbers; partial hundreds earn nothing. A ₹250 sale
/// earns 2 points, never 2.5.
pub const LOYALTY_PAISE_PER_POINT: i64 = 10_000;
