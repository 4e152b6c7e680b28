//! # Types Module: Core Domain Types
//!
//! Every record the store keeps in memory is defined here, with serde for
//! JSON snapshots and `ts-rs` bindings for a TypeScript frontend.
//!
//! ## Type Categories
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Catalog        Product, ProductStatus                           │
//! │  Places         Location, LocationKind                           │
//! │  Selling        CartLine, Sale, PaymentMethod                    │
//! │  Movement       Transfer, TransferStatus                         │
//! │  People         Customer, Supplier                               │
//! │  Tax            TaxTier, TaxCategory                             │
//! │  Planning       SalesTarget, BusinessGoal, GoalStatus            │
//! │  Messaging      Notification, NotificationKind                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//!
//! - Monetary fields are **paise** (`i64`), suffixed `_paise`; every such
//!   field has a typed accessor returning [`Money`]
//! - Rate fields are **basis points** (`u32`), suffixed `_bps`, with
//!   accessors returning [`Percent`]
//! - Stock is a per-location map `location id → units`; an absent entry
//!   means zero
//! - Structs serialize `camelCase`; closed enums pin their exact wire
//!   strings (`"WAREHOUSE"`, `"CASH"`, `"INFO"`, ...)

use crate::money::{Money, Percent};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

// =============================================================================
// Locations
// =============================================================================

/// What a stock-holding location is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum LocationKind {
    /// Back-room bulk storage; receives supplier deliveries.
    Warehouse,
    /// Customer-facing shop floor; where sales happen.
    Store,
}

/// A physical place that holds stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
}

// =============================================================================
// Products
// =============================================================================

/// Catalog lifecycle state of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductStatus {
    /// Normal, orderable and sellable.
    #[default]
    Active,
    /// No longer restocked; sell through remaining units.
    Discontinued,
    /// Stocked only part of the year (festival goods, mango season).
    Seasonal,
}

/// A catalog item with per-location stock.
///
/// # Examples
///
/// ```rust
/// use kirana_core::types::Product;
///
/// let mut rice = Product::new("prod-1", "Basmati Rice 1kg", "Grains");
/// rice.price_paise = 12_000; // ₹120.00
/// rice.stock.insert("loc-1".to_string(), 50);
/// assert_eq!(rice.stock_at("loc-1"), 50);
/// assert_eq!(rice.stock_at("loc-9"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique id, e.g. `"prod-1"`.
    pub id: String,
    /// Display name shown on bills and shelves.
    pub name: String,
    /// Internal stock-keeping unit code, if assigned.
    pub sku: Option<String>,
    /// EAN/UPC barcode, if the packaging has one.
    pub barcode: Option<String>,
    /// Free-form category name, e.g. `"Grains"`, `"Dairy"`.
    pub category: String,
    /// Supplier display name; must match a [`Supplier::name`] to roll up.
    pub supplier: Option<String>,
    /// HSN code printed on GST invoices.
    pub hsn_code: String,
    /// Catalog lifecycle state.
    pub status: ProductStatus,
    /// Selling price per unit, in paise.
    pub price_paise: i64,
    /// Purchase cost per unit, in paise. Used for COGS and stock valuation.
    pub cost_paise: i64,
    /// GST rate in basis points (5% = 500).
    pub tax_rate_bps: u32,
    /// Units on hand per location id. Absent entry = zero.
    #[serde(default)]
    pub stock: BTreeMap<String, i64>,
    /// Global reorder threshold, in units.
    pub min_stock_level: i64,
    /// Per-location threshold overrides; win over [`Self::min_stock_level`].
    #[serde(default)]
    pub min_stock_overrides: BTreeMap<String, i64>,
    /// Optional shelf-capacity ceiling, in units.
    pub max_stock_level: Option<i64>,
    /// Supplier lead time in days, for reorder planning.
    pub lead_time_days: i64,
    /// Expiry date for perishables.
    #[ts(as = "Option<String>")]
    pub expiry_date: Option<NaiveDate>,
    /// Date of the most recent recorded sale, for dead-stock detection.
    #[ts(as = "Option<String>")]
    pub last_sale_date: Option<NaiveDate>,
}

impl Product {
    /// Creates a minimal active product; callers fill in the rest.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            sku: None,
            barcode: None,
            category: category.into(),
            supplier: None,
            hsn_code: "0000".to_string(),
            status: ProductStatus::Active,
            price_paise: 0,
            cost_paise: 0,
            tax_rate_bps: 0,
            stock: BTreeMap::new(),
            min_stock_level: 0,
            min_stock_overrides: BTreeMap::new(),
            max_stock_level: None,
            lead_time_days: 0,
            expiry_date: None,
            last_sale_date: None,
        }
    }

    /// Selling price as typed [`Money`].
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Purchase cost as typed [`Money`].
    pub fn cost(&self) -> Money {
        Money::from_paise(self.cost_paise)
    }

    /// GST rate as typed [`Percent`].
    pub fn tax_rate(&self) -> Percent {
        Percent::from_bps(self.tax_rate_bps)
    }

    /// Units on hand at one location; absent entry reads as zero.
    pub fn stock_at(&self, location_id: &str) -> i64 {
        self.stock.get(location_id).copied().unwrap_or(0)
    }

    /// Units on hand summed across every location.
    pub fn total_stock(&self) -> i64 {
        self.stock.values().sum()
    }

    /// Reorder threshold in effect at a location: the per-location
    /// override when present, the global level otherwise.
    pub fn effective_min_stock(&self, location_id: &str) -> i64 {
        self.min_stock_overrides
            .get(location_id)
            .copied()
            .unwrap_or(self.min_stock_level)
    }
}

// =============================================================================
// Cart Lines
// =============================================================================

/// One line of a cart (and, after payment, of a [`Sale`]).
///
/// All pricing fields are a **snapshot** taken when the line was added.
/// Later catalog edits never change a bill that is already on the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub sku: Option<String>,
    /// HSN code carried onto the GST invoice.
    pub hsn_code: String,
    pub category: String,
    /// Unit price at the time the line was added, in paise.
    pub unit_price_paise: i64,
    /// Unit cost at the time the line was added, in paise (for COGS).
    pub unit_cost_paise: i64,
    /// GST rate at the time the line was added, in basis points.
    pub tax_rate_bps: u32,
    pub quantity: i64,
    /// Line-level discount in basis points.
    pub discount_bps: u32,
}

impl CartLine {
    /// Snapshots a product into a cart line at the given quantity.
    pub fn snapshot(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            hsn_code: product.hsn_code.clone(),
            category: product.category.clone(),
            unit_price_paise: product.price_paise,
            unit_cost_paise: product.cost_paise,
            tax_rate_bps: product.tax_rate_bps,
            quantity,
            discount_bps: 0,
        }
    }

    /// Unit price as typed [`Money`].
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Unit cost as typed [`Money`].
    pub fn unit_cost(&self) -> Money {
        Money::from_paise(self.unit_cost_paise)
    }

    /// GST rate as typed [`Percent`].
    pub fn tax_rate(&self) -> Percent {
        Percent::from_bps(self.tax_rate_bps)
    }

    /// Line discount as typed [`Percent`].
    pub fn discount(&self) -> Percent {
        Percent::from_bps(self.discount_bps)
    }

    /// Pre-discount line value: `unit price × quantity`.
    pub fn line_value(&self) -> Money {
        self.unit_price() * self.quantity
    }

    /// Rupee value of the line discount, rounded half-up.
    pub fn discount_amount(&self) -> Money {
        self.line_value().percent_of(self.discount())
    }

    /// Value the line's GST is charged on: line value minus line discount.
    pub fn taxable_value(&self) -> Money {
        self.line_value() - self.discount_amount()
    }

    /// GST charged on this line: `taxable value × rate`.
    pub fn tax_amount(&self) -> Money {
        self.taxable_value().percent_of(self.tax_rate())
    }

    /// Cost of goods for this line: `unit cost × quantity`.
    pub fn line_cost(&self) -> Money {
        self.unit_cost() * self.quantity
    }
}

// =============================================================================
// Sales
// =============================================================================

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Upi,
}

/// A finalized, immutable sale.
///
/// Totals are **frozen** at payment time. Replaying the billing math over
/// [`Self::items`] must reproduce them, but reports always read the frozen
/// fields so a printed bill and the GST report can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sale {
    /// Invoice number, `INV-` prefixed.
    pub id: String,
    /// Business date of the sale.
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Snapshot lines as sold.
    pub items: Vec<CartLine>,
    /// Post-discount subtotal, in paise.
    pub subtotal_paise: i64,
    /// Final GST charged, in paise.
    pub tax_paise: i64,
    /// Grand total the customer paid, in paise.
    pub total_paise: i64,
    /// Bill-level discount applied, in basis points.
    pub bill_discount_bps: u32,
    /// Customer id when a registered customer was attached.
    pub customer_id: Option<String>,
    /// Customer display name ("Walk-in" when anonymous).
    pub customer_name: Option<String>,
    /// Location the sale happened at.
    pub location_id: String,
    pub payment_method: PaymentMethod,
    /// Payment transaction reference, `TXN-` prefixed.
    pub transaction_id: String,
}

impl Sale {
    /// Post-discount subtotal as typed [`Money`].
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }

    /// Final GST as typed [`Money`].
    pub fn tax(&self) -> Money {
        Money::from_paise(self.tax_paise)
    }

    /// Grand total as typed [`Money`].
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }

    /// Bill discount as typed [`Percent`].
    pub fn bill_discount(&self) -> Percent {
        Percent::from_bps(self.bill_discount_bps)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Cost of goods sold for the whole sale.
    pub fn cost_of_goods(&self) -> Money {
        self.items.iter().map(|line| line.line_cost()).sum()
    }
}

// =============================================================================
// Transfers
// =============================================================================

/// Outcome of a stock transfer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum TransferStatus {
    /// Stock moved; source debited, destination credited.
    Completed,
    /// Nothing moved; [`Transfer::reason`] says why.
    Failed,
}

/// Audit record of a stock movement attempt between locations.
///
/// Failed attempts are recorded too. The transfer log answers "what
/// happened", not just "what worked".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Transfer {
    pub id: String,
    pub product_id: String,
    pub from_location_id: String,
    pub to_location_id: String,
    pub quantity: i64,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
    pub status: TransferStatus,
    /// Failure reason; `None` on success.
    pub reason: Option<String>,
    /// Free-form operator note.
    pub notes: Option<String>,
}

impl Transfer {
    /// True when stock actually moved.
    pub fn is_completed(&self) -> bool {
        self.status == TransferStatus::Completed
    }
}

// =============================================================================
// Customers & Suppliers
// =============================================================================

/// A registered customer with loyalty history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// GSTIN for B2B customers who need tax invoices.
    pub gst_number: Option<String>,
    pub address: Option<String>,
    /// Accrued loyalty points (1 point per ₹100 of sale total).
    pub loyalty_points: i64,
    /// Lifetime purchase value, in paise.
    pub total_purchases_paise: i64,
}

impl Customer {
    /// Lifetime purchase value as typed [`Money`].
    pub fn total_purchases(&self) -> Money {
        Money::from_paise(self.total_purchases_paise)
    }
}

/// A supplier the shop buys from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Supplier {
    pub id: String,
    /// Display name; products link by this name, not by id.
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Subjective quality rating, 0.0 to 5.0.
    pub rating: f64,
    pub category: String,
    /// Credit terms, e.g. `"Net 30"`.
    pub payment_terms: String,
    #[ts(as = "String")]
    pub last_supply_date: NaiveDate,
}

// =============================================================================
// Tax Tiers
// =============================================================================

/// GST slab classification used by the tax report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TaxCategory {
    /// 0% or 5% staples.
    Essential,
    /// The common 12%/18% slab.
    #[default]
    Standard,
    /// 28% slab.
    Luxury,
    /// Catch-all for general goods.
    Goods,
}

/// A configurable GST slab with its CGST/SGST split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaxTier {
    pub id: String,
    /// Display name, e.g. `"GST 18%"`.
    pub name: String,
    pub category: Option<TaxCategory>,
    /// Combined rate in basis points.
    pub rate_bps: u32,
    /// Central GST half, in basis points.
    pub cgst_bps: u32,
    /// State GST half, in basis points.
    pub sgst_bps: u32,
}

impl TaxTier {
    /// Combined rate as typed [`Percent`].
    pub fn rate(&self) -> Percent {
        Percent::from_bps(self.rate_bps)
    }

    /// CGST half as typed [`Percent`].
    pub fn cgst(&self) -> Percent {
        Percent::from_bps(self.cgst_bps)
    }

    /// SGST half as typed [`Percent`].
    pub fn sgst(&self) -> Percent {
        Percent::from_bps(self.sgst_bps)
    }
}

// =============================================================================
// Planning
// =============================================================================

/// Monthly revenue target for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesTarget {
    pub id: String,
    pub location_id: String,
    /// Target month as `"YYYY-MM"`.
    pub month: String,
    /// Revenue target, in paise.
    pub target_amount_paise: i64,
}

impl SalesTarget {
    /// Revenue target as typed [`Money`].
    pub fn target_amount(&self) -> Money {
        Money::from_paise(self.target_amount_paise)
    }
}

/// Completion state of a business goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GoalStatus {
    #[default]
    Pending,
    Completed,
}

/// A free-form goal the owner tracks on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BusinessGoal {
    pub id: String,
    pub text: String,
    #[ts(as = "Option<String>")]
    pub deadline: Option<NaiveDate>,
    pub status: GoalStatus,
}

// =============================================================================
// Notifications
// =============================================================================

/// Severity of an operational notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// One entry in the operational notification feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Headline, e.g. `"Low Stock Alert: Basmati Rice 1kg"`.
    pub message: String,
    /// Second line with specifics, e.g. `"Location: Shop Floor. Remaining: 4"`.
    pub details: Option<String>,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Tests
// =============================================================================
