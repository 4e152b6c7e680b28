//! # Inventory Module: Stock Health Classification
//!
//! Pure classifiers over the catalog: low stock, dead stock, expiry
//! buckets, and the head-count summary the dashboard opens with.
//!
//! Two comparison rules coexist on purpose:
//!
//! - **Per location** (a manager looking at one shop): strictly below the
//!   effective threshold - sitting exactly at the reorder level is "order
//!   now", not "alarm".
//! - **Across locations** (the "all" view): at or below the threshold in
//!   *any* location - the overview errs toward showing the problem.

use crate::money::Money;
use crate::types::{Location, Product};
use crate::{DEAD_STOCK_AGE_DAYS, EXPIRY_SOON_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Stock Views
// =============================================================================

/// Stock shown for a product under a location filter: the per-location
/// count, or the sum over all locations when unfiltered.
pub fn display_stock(product: &Product, location_id: Option<&str>) -> i64 {
    match location_id {
        Some(loc) => product.stock_at(loc),
        None => product.total_stock(),
    }
}

/// Low-stock check for one location: strictly below the effective
/// threshold (the per-location override when set, the global level
/// otherwise).
pub fn is_low_stock_at(product: &Product, location_id: &str) -> bool {
    product.stock_at(location_id) < product.effective_min_stock(location_id)
}

/// Low-stock check across locations: at or below the effective threshold
/// in any of them.
pub fn is_low_stock_anywhere(product: &Product, locations: &[Location]) -> bool {
    locations
        .iter()
        .any(|loc| product.stock_at(&loc.id) <= product.effective_min_stock(&loc.id))
}

/// Products flagged low under the given location filter.
pub fn low_stock_products<'a>(
    products: &'a [Product],
    location_id: Option<&str>,
    locations: &[Location],
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| match location_id {
            Some(loc) => is_low_stock_at(p, loc),
            None => is_low_stock_anywhere(p, locations),
        })
        .collect()
}

// =============================================================================
// Dead Stock
// =============================================================================

/// Dead-stock check: the last sale is more than [`DEAD_STOCK_AGE_DAYS`]
/// ago and units are still on hand (at the filtered location, or anywhere
/// when unfiltered).
///
/// A product that has never sold has no last-sale date and is never dead:
/// new listings get their sixty days before the report turns on them.
pub fn is_dead_stock(product: &Product, location_id: Option<&str>, today: NaiveDate) -> bool {
    let Some(last_sale) = product.last_sale_date else {
        return false;
    };
    if (today - last_sale).num_days() <= DEAD_STOCK_AGE_DAYS {
        return false;
    }
    display_stock(product, location_id) > 0
}

/// Products flagged dead under the given location filter.
pub fn dead_stock_products<'a>(
    products: &'a [Product],
    location_id: Option<&str>,
    today: NaiveDate,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| is_dead_stock(p, location_id, today))
        .collect()
}

// =============================================================================
// Expiry
// =============================================================================

/// Shelf-life bucket for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExpiryStatus {
    /// Expiry date is in the past.
    Expired,
    /// Expires within [`EXPIRY_SOON_DAYS`] (today counts).
    ExpiringSoon,
    /// No expiry date, or comfortably far out.
    Safe,
}

/// Buckets a product by its expiry date relative to `today`.
pub fn expiry_status(product: &Product, today: NaiveDate) -> ExpiryStatus {
    let Some(expiry) = product.expiry_date else {
        return ExpiryStatus::Safe;
    };
    let days_left = (expiry - today).num_days();
    if days_left < 0 {
        ExpiryStatus::Expired
    } else if days_left <= EXPIRY_SOON_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Safe
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Head counts for the inventory dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventorySummary {
    /// Catalog size.
    pub product_count: usize,
    /// Units on hand across all products and locations.
    pub total_units: i64,
    /// Stock valued at purchase cost, in paise.
    pub stock_value_paise: i64,
    /// Products low in any location.
    pub low_stock_count: usize,
    /// Products with stale stock on hand.
    pub dead_stock_count: usize,
    /// Products past their expiry date.
    pub expired_count: usize,
    /// Products expiring within the warning window.
    pub expiring_soon_count: usize,
}

impl InventorySummary {
    /// Stock value as typed [`Money`].
    pub fn stock_value(&self) -> Money {
        Money::from_paise(self.stock_value_paise)
    }
}

/// Computes the dashboard head-counts over the whole catalog.
pub fn inventory_summary(
    products: &[Product],
    locations: &[Location],
    today: NaiveDate,
) -> InventorySummary {
    let mut summary = InventorySummary {
        product_count: products.len(),
        total_units: 0,
        stock_value_paise: 0,
        low_stock_count: 0,
        dead_stock_count: 0,
        expired_count: 0,
        expiring_soon_count: 0,
    };

    for product in products {
        let units = product.total_stock();
        summary.total_units += units;
        summary.stock_value_paise += (product.cost() * units).paise();
        if is_low_stock_anywhere(product, locations) {
            summary.low_stock_count += 1;
        }
        if is_dead_stock(product, None, today) {
            summary.dead_stock_count += 1;
        }
        match expiry_status(product, today) {
            ExpiryStatus::Expired => summary.expired_count += 1,
            ExpiryStatus::ExpiringSoon => summary.expiring_soon_count += 1,
            ExpiryStatus::Safe => {}
        }
    }
    summary
}

// =============================================================================
// Tests
// =============================================================================
