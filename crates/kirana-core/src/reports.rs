//! # Reports Module: Pure Reporting Aggregators
//!
//! Every report is a pure fold over frozen [`Sale`] records and the
//! current catalog. Nothing here re-runs billing math: sales carry their
//! totals, and reports that disagreed with printed bills would be worse
//! than useless at GST filing time.
//!
//! Map-shaped rollups come back as vectors **sorted by value descending**
//! (ties broken by name) so report tables and charts render in a stable
//! order without post-processing.

use crate::money::Money;
use crate::types::{
    Customer, Location, PaymentMethod, Product, Sale, Supplier, TaxCategory, TaxTier,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Location name used when a sale references a location that no longer
/// exists.
const UNKNOWN_LOCATION: &str = "Unknown";

// =============================================================================
// Sales Filter
// =============================================================================

/// Composable sale filter used by the GST report screen.
///
/// Every field is optional; an empty filter matches everything. Dates are
/// inclusive on both ends. Category and tax-rate match when **any line**
/// of the sale matches, because a mixed bill belongs on both categories'
/// reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesFilter {
    #[ts(as = "Option<String>")]
    pub from: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub to: Option<NaiveDate>,
    pub location_id: Option<String>,
    pub category: Option<String>,
    pub tax_rate_bps: Option<u32>,
}

impl SalesFilter {
    /// True when the sale passes every set criterion.
    pub fn matches(&self, sale: &Sale) -> bool {
        if let Some(loc) = &self.location_id {
            if sale.location_id != *loc {
                return false;
            }
        }
        if let Some(from) = self.from {
            if sale.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if sale.date > to {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !sale.items.iter().any(|line| line.category == *category) {
                return false;
            }
        }
        if let Some(rate) = self.tax_rate_bps {
            if !sale.items.iter().any(|line| line.tax_rate_bps == rate) {
                return false;
            }
        }
        true
    }
}

/// The sales passing a filter, in their stored order.
pub fn filter_sales<'a>(sales: &'a [Sale], filter: &SalesFilter) -> Vec<&'a Sale> {
    sales.iter().filter(|s| filter.matches(s)).collect()
}

// =============================================================================
// GST Summary
// =============================================================================

/// Filing totals over a filtered set of sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaxSummary {
    /// Σ post-discount subtotals, in paise.
    pub taxable_value_paise: i64,
    /// Σ GST charged, in paise.
    pub tax_paise: i64,
    /// Σ invoice totals, in paise.
    pub total_paise: i64,
    /// Number of invoices in the summary.
    pub invoice_count: usize,
}

impl TaxSummary {
    /// Taxable value as typed [`Money`].
    pub fn taxable_value(&self) -> Money {
        Money::from_paise(self.taxable_value_paise)
    }

    /// Tax as typed [`Money`].
    pub fn tax(&self) -> Money {
        Money::from_paise(self.tax_paise)
    }

    /// Invoice total as typed [`Money`].
    pub fn total(&self) -> Money {
        Money::from_paise(self.total_paise)
    }
}

/// Sums the frozen totals of every sale passing the filter.
pub fn tax_summary(sales: &[Sale], filter: &SalesFilter) -> TaxSummary {
    let mut summary =
        TaxSummary { taxable_value_paise: 0, tax_paise: 0, total_paise: 0, invoice_count: 0 };
    for sale in sales.iter().filter(|s| filter.matches(s)) {
        summary.taxable_value_paise += sale.subtotal_paise;
        summary.tax_paise += sale.tax_paise;
        summary.total_paise += sale.total_paise;
        summary.invoice_count += 1;
    }
    summary
}

/// Tax-slab profile of one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SaleTaxProfile {
    /// Every line maps to the same slab category.
    Uniform(TaxCategory),
    /// Lines span more than one slab category.
    Mixed,
}

/// Classifies an invoice by the slab categories its line rates map to.
///
/// Lines are matched to tiers by rate. No matching tier (or tiers without
/// a category) leaves the invoice on the default
/// [`TaxCategory::Standard`].
pub fn sale_tax_profile(sale: &Sale, tiers: &[TaxTier]) -> SaleTaxProfile {
    let mut seen: Vec<TaxCategory> = Vec::new();
    for line in &sale.items {
        for tier in tiers.iter().filter(|t| t.rate_bps == line.tax_rate_bps) {
            if let Some(category) = tier.category {
                if !seen.contains(&category) {
                    seen.push(category);
                }
            }
        }
    }
    match seen.as_slice() {
        [] => SaleTaxProfile::Uniform(TaxCategory::default()),
        [only] => SaleTaxProfile::Uniform(*only),
        _ => SaleTaxProfile::Mixed,
    }
}

// =============================================================================
// Business Metrics
// =============================================================================

/// Headline health figures for the analytics screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BusinessMetrics {
    /// Σ invoice totals, in paise.
    pub total_revenue_paise: i64,
    /// Σ cost of goods sold, in paise.
    pub total_cogs_paise: i64,
    /// Revenue minus COGS, in paise.
    pub gross_profit_paise: i64,
    /// Gross profit as a percentage of revenue (0 when revenue is 0).
    pub gross_margin_pct: f64,
    /// Current stock valued at cost, in paise.
    pub inventory_value_paise: i64,
    /// COGS ÷ inventory value (0 when the shelves are empty).
    pub inventory_turnover: f64,
}

impl BusinessMetrics {
    /// Revenue as typed [`Money`].
    pub fn total_revenue(&self) -> Money {
        Money::from_paise(self.total_revenue_paise)
    }

    /// Cost of goods sold as typed [`Money`].
    pub fn total_cogs(&self) -> Money {
        Money::from_paise(self.total_cogs_paise)
    }

    /// Gross profit as typed [`Money`].
    pub fn gross_profit(&self) -> Money {
        Money::from_paise(self.gross_profit_paise)
    }

    /// Inventory value at cost as typed [`Money`].
    pub fn inventory_value(&self) -> Money {
        Money::from_paise(self.inventory_value_paise)
    }
}

/// Computes revenue, margin and turnover over all sales and current stock.
pub fn business_metrics(sales: &[Sale], products: &[Product]) -> BusinessMetrics {
    let total_revenue: Money = sales.iter().map(|s| s.total()).sum();
    let total_cogs: Money = sales.iter().map(|s| s.cost_of_goods()).sum();
    let gross_profit = total_revenue - total_cogs;
    let inventory_value: Money = products.iter().map(|p| p.cost() * p.total_stock()).sum();

    let gross_margin_pct = if total_revenue.is_positive() {
        gross_profit.paise() as f64 / total_revenue.paise() as f64 * 100.0
    } else {
        0.0
    };
    let inventory_turnover = if inventory_value.is_positive() {
        total_cogs.paise() as f64 / inventory_value.paise() as f64
    } else {
        0.0
    };

    BusinessMetrics {
        total_revenue_paise: total_revenue.paise(),
        total_cogs_paise: total_cogs.paise(),
        gross_profit_paise: gross_profit.paise(),
        gross_margin_pct,
        inventory_value_paise: inventory_value.paise(),
        inventory_turnover,
    }
}

// =============================================================================
// Revenue Rollups
// =============================================================================

/// One named slice of a revenue rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RevenueSlice {
    pub name: String,
    pub amount_paise: i64,
}

impl RevenueSlice {
    /// Slice value as typed [`Money`].
    pub fn amount(&self) -> Money {
        Money::from_paise(self.amount_paise)
    }
}

/// Sorts rollup entries by value descending, name ascending on ties.
fn sorted_slices(rollup: BTreeMap<String, i64>) -> Vec<RevenueSlice> {
    let mut slices: Vec<RevenueSlice> = rollup
        .into_iter()
        .map(|(name, amount_paise)| RevenueSlice { name, amount_paise })
        .collect();
    slices.sort_by(|a, b| b.amount_paise.cmp(&a.amount_paise).then(a.name.cmp(&b.name)));
    slices
}

/// Invoice totals grouped by location name.
///
/// Sales pointing at a deleted location group under `"Unknown"`.
pub fn revenue_by_location(sales: &[Sale], locations: &[Location]) -> Vec<RevenueSlice> {
    let mut rollup: BTreeMap<String, i64> = BTreeMap::new();
    for sale in sales {
        let name = locations
            .iter()
            .find(|l| l.id == sale.location_id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
        *rollup.entry(name).or_insert(0) += sale.total_paise;
    }
    sorted_slices(rollup)
}

/// Pre-discount line revenue (`price × qty`) grouped by line category.
///
/// Deliberately gross of discounts: the question this answers is "what do
/// customers reach for", not "what did we bank".
pub fn revenue_by_category(sales: &[Sale]) -> Vec<RevenueSlice> {
    let mut rollup: BTreeMap<String, i64> = BTreeMap::new();
    for sale in sales {
        for line in &sale.items {
            *rollup.entry(line.category.clone()).or_insert(0) += line.line_value().paise();
        }
    }
    sorted_slices(rollup)
}

/// Takings for one payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentMethodTotal {
    pub method: PaymentMethod,
    pub amount_paise: i64,
    pub sale_count: usize,
}

impl PaymentMethodTotal {
    /// Takings as typed [`Money`].
    pub fn amount(&self) -> Money {
        Money::from_paise(self.amount_paise)
    }
}

/// Invoice totals grouped by payment method, largest first.
///
/// Methods with no sales are omitted.
pub fn payment_method_totals(sales: &[Sale]) -> Vec<PaymentMethodTotal> {
    let mut rollup: BTreeMap<&'static str, PaymentMethodTotal> = BTreeMap::new();
    for sale in sales {
        let key = match sale.payment_method {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
        };
        let entry = rollup.entry(key).or_insert(PaymentMethodTotal {
            method: sale.payment_method,
            amount_paise: 0,
            sale_count: 0,
        });
        entry.amount_paise += sale.total_paise;
        entry.sale_count += 1;
    }
    let mut totals: Vec<PaymentMethodTotal> = rollup.into_values().collect();
    totals.sort_by(|a, b| b.amount_paise.cmp(&a.amount_paise));
    totals
}

/// Invoice count for one business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailySaleCount {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub count: usize,
}

/// Invoice counts per day over the `last_n_days` ending at `today`
/// (inclusive), oldest first. Days with no sales are omitted.
pub fn daily_sale_counts(sales: &[Sale], last_n_days: i64, today: NaiveDate) -> Vec<DailySaleCount> {
    let cutoff = today - chrono::Duration::days(last_n_days);
    let mut rollup: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for sale in sales.iter().filter(|s| s.date > cutoff && s.date <= today) {
        *rollup.entry(sale.date).or_insert(0) += 1;
    }
    rollup
        .into_iter()
        .map(|(date, count)| DailySaleCount { date, count })
        .collect()
}

// =============================================================================
// Catalog Rollups
// =============================================================================

/// Stock position of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryBreakdown {
    pub category: String,
    pub product_count: usize,
    pub total_units: i64,
    /// Stock valued at cost, in paise.
    pub stock_value_paise: i64,
    /// Products whose total stock sits below their global minimum.
    pub low_stock_count: usize,
}

/// Catalog grouped by category, largest stock value first.
///
/// The low-stock figure here is the coarse whole-business rule (total
/// stock vs global minimum), not the per-location classification.
pub fn category_breakdown(products: &[Product]) -> Vec<CategoryBreakdown> {
    let mut rollup: BTreeMap<String, CategoryBreakdown> = BTreeMap::new();
    for product in products {
        let entry =
            rollup.entry(product.category.clone()).or_insert_with(|| CategoryBreakdown {
                category: product.category.clone(),
                product_count: 0,
                total_units: 0,
                stock_value_paise: 0,
                low_stock_count: 0,
            });
        let units = product.total_stock();
        entry.product_count += 1;
        entry.total_units += units;
        entry.stock_value_paise += (product.cost() * units).paise();
        if units < product.min_stock_level {
            entry.low_stock_count += 1;
        }
    }
    let mut breakdown: Vec<CategoryBreakdown> = rollup.into_values().collect();
    breakdown.sort_by(|a, b| {
        b.stock_value_paise
            .cmp(&a.stock_value_paise)
            .then(a.category.cmp(&b.category))
    });
    breakdown
}

/// Stock position of one supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SupplierBreakdown {
    pub supplier: String,
    pub rating: f64,
    pub product_count: usize,
    pub total_units: i64,
    /// Stock valued at cost, in paise.
    pub stock_value_paise: i64,
}

/// Catalog grouped by supplier, largest stock value first.
///
/// Products link to suppliers by display name; unmatched products simply
/// do not appear.
pub fn supplier_breakdown(products: &[Product], suppliers: &[Supplier]) -> Vec<SupplierBreakdown> {
    let mut breakdown: Vec<SupplierBreakdown> = suppliers
        .iter()
        .map(|supplier| {
            let mut entry = SupplierBreakdown {
                supplier: supplier.name.clone(),
                rating: supplier.rating,
                product_count: 0,
                total_units: 0,
                stock_value_paise: 0,
            };
            for product in
                products.iter().filter(|p| p.supplier.as_deref() == Some(supplier.name.as_str()))
            {
                let units = product.total_stock();
                entry.product_count += 1;
                entry.total_units += units;
                entry.stock_value_paise += (product.cost() * units).paise();
            }
            entry
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.stock_value_paise
            .cmp(&a.stock_value_paise)
            .then(a.supplier.cmp(&b.supplier))
    });
    breakdown
}

// =============================================================================
// Customers & Targets
// =============================================================================

/// Customers ranked by lifetime purchase value, biggest spender first.
pub fn top_customers(customers: &[Customer], limit: usize) -> Vec<&Customer> {
    let mut ranked: Vec<&Customer> = customers.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_purchases_paise
            .cmp(&a.total_purchases_paise)
            .then(a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

/// Revenue one location took in one `"YYYY-MM"` month.
pub fn monthly_revenue(sales: &[Sale], location_id: &str, month: &str) -> Money {
    sales
        .iter()
        .filter(|s| s.location_id == location_id && s.date.format("%Y-%m").to_string() == month)
        .map(|s| s.total())
        .sum()
}

/// Fraction of a revenue target achieved (1.0 = on target, 0.0 when no
/// target is set). Callers clamp for progress bars; overshoot is real
/// information here.
pub fn target_progress(revenue: Money, target: Money) -> f64 {
    if target.is_positive() {
        revenue.paise() as f64 / target.paise() as f64
    } else {
        0.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CartLine, LocationKind};

    fn line(product_id: &str, category: &str, price_rupees: i64, qty: i64, tax_bps: u32) -> CartLine {
        CartLine {
            product_id: product_id.to_string(),
            name: product_id.to_string(),
            sku: None,
            hsn_code: "0000".to_string(),
            category: category.to_string(),
            unit_price_paise: price_rupees * 100,
            unit_cost_paise: price_rupees * 80,
            tax_rate_bps: tax_bps,
            quantity: qty,
            discount_bps: 0,
        }
    }

    fn sale(
        id: &str,
        date: (i32, u32, u32),
        location: &str,
        method: PaymentMethod,
        items: Vec<CartLine>,
    ) -> Sale {
        let subtotal: i64 = items.iter().map(|l| l.taxable_value().paise()).sum();
        let tax: i64 = items.iter().map(|l| l.tax_amount().paise()).sum();
        Sale {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            items,
            subtotal_paise: subtotal,
            tax_paise: tax,
            total_paise: subtotal + tax,
            bill_discount_bps: 0,
            customer_id: None,
            customer_name: Some("Walk-in".to_string()),
            location_id: location.to_string(),
            payment_method: method,
            transaction_id: format!("TXN-{id}"),
        }
    }

    fn fixture_sales() -> Vec<Sale> {
        vec![
            sale(
                "INV-1",
                (2025, 3, 10),
                "loc-2",
                PaymentMethod::Cash,
                vec![line("rice", "Grains", 120, 2, 500)],
            ),
            sale(
                "INV-2",
                (2025, 3, 12),
                "loc-3",
                PaymentMethod::Upi,
                vec![line("milk", "Dairy", 60, 1, 0), line("namkeen", "Snacks", 50, 2, 1_200)],
            ),
            sale(
                "INV-3",
                (2025, 4, 1),
                "loc-2",
                PaymentMethod::Upi,
                vec![line("rice", "Grains", 120, 1, 500)],
            ),
        ]
    }

    fn fixture_locations() -> Vec<Location> {
        vec![
            Location {
                id: "loc-2".to_string(),
                name: "City Store".to_string(),
                address: String::new(),
                kind: LocationKind::Store,
            },
            Location {
                id: "loc-3".to_string(),
                name: "Market Branch".to_string(),
                address: String::new(),
                kind: LocationKind::Store,
            },
        ]
    }

    fn tier(rate_bps: u32, category: TaxCategory) -> TaxTier {
        TaxTier {
            id: format!("tier-{rate_bps}"),
            name: format!("GST {}%", rate_bps / 100),
            category: Some(category),
            rate_bps,
            cgst_bps: rate_bps / 2,
            sgst_bps: rate_bps / 2,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let sales = fixture_sales();
        let summary = tax_summary(&sales, &SalesFilter::default());
        assert_eq!(summary.invoice_count, 3);
        // Σ of frozen fields, not recomputed math
        let expect_total: i64 = sales.iter().map(|s| s.total_paise).sum();
        assert_eq!(summary.total_paise, expect_total);
    }

    #[test]
    fn test_filter_by_location_and_date() {
        let sales = fixture_sales();
        let filter = SalesFilter {
            location_id: Some("loc-2".to_string()),
            from: Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()),
            ..SalesFilter::default()
        };
        let matched = filter_sales(&sales, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "INV-1");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let sales = fixture_sales();
        let filter = SalesFilter {
            from: Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()),
            ..SalesFilter::default()
        };
        assert_eq!(filter_sales(&sales, &filter).len(), 2);
    }

    #[test]
    fn test_filter_matches_any_line() {
        let sales = fixture_sales();
        // INV-2 is Dairy + Snacks; a Snacks filter must still catch it
        let filter = SalesFilter { category: Some("Snacks".to_string()), ..SalesFilter::default() };
        let matched = filter_sales(&sales, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "INV-2");

        let filter = SalesFilter { tax_rate_bps: Some(500), ..SalesFilter::default() };
        assert_eq!(filter_sales(&sales, &filter).len(), 2);
    }

    #[test]
    fn test_tax_summary_is_idempotent() {
        let sales = fixture_sales();
        let filter = SalesFilter::default();
        assert_eq!(tax_summary(&sales, &filter), tax_summary(&sales, &filter));
    }

    #[test]
    fn test_sale_tax_profile() {
        let tiers = vec![tier(500, TaxCategory::Essential), tier(1_200, TaxCategory::Standard)];
        let sales = fixture_sales();

        // INV-1: only 5% lines -> uniform Essential
        assert_eq!(
            sale_tax_profile(&sales[0], &tiers),
            SaleTaxProfile::Uniform(TaxCategory::Essential)
        );
        // INV-2: 0% (no tier) + 12% -> only Standard seen -> uniform Standard
        assert_eq!(
            sale_tax_profile(&sales[1], &tiers),
            SaleTaxProfile::Uniform(TaxCategory::Standard)
        );

        // A sale spanning Essential and Standard rates is mixed
        let mixed = sale(
            "INV-9",
            (2025, 4, 2),
            "loc-2",
            PaymentMethod::Card,
            vec![line("rice", "Grains", 120, 1, 500), line("namkeen", "Snacks", 50, 1, 1_200)],
        );
        assert_eq!(sale_tax_profile(&mixed, &tiers), SaleTaxProfile::Mixed);

        // No tiers at all: default Standard
        assert_eq!(
            sale_tax_profile(&sales[0], &[]),
            SaleTaxProfile::Uniform(TaxCategory::Standard)
        );
    }

    #[test]
    fn test_business_metrics() {
        let sales = fixture_sales();
        let mut product = Product::new("rice", "Rice", "Grains");
        product.cost_paise = 9_600;
        product.stock.insert("loc-1".to_string(), 10);

        let m = business_metrics(&sales, &[product]);
        let revenue: i64 = sales.iter().map(|s| s.total_paise).sum();
        let cogs: i64 = sales.iter().map(|s| s.cost_of_goods().paise()).sum();
        assert_eq!(m.total_revenue_paise, revenue);
        assert_eq!(m.total_cogs_paise, cogs);
        assert_eq!(m.gross_profit_paise, revenue - cogs);
        assert!(m.gross_margin_pct > 0.0);
        assert_eq!(m.inventory_value_paise, 96_000);
        assert!((m.inventory_turnover - cogs as f64 / 96_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_business_metrics_zero_guards() {
        let m = business_metrics(&[], &[]);
        assert_eq!(m.gross_margin_pct, 0.0);
        assert_eq!(m.inventory_turnover, 0.0);
    }

    #[test]
    fn test_revenue_by_location_with_unknown_fallback() {
        let mut sales = fixture_sales();
        sales.push(sale(
            "INV-4",
            (2025, 4, 2),
            "loc-deleted",
            PaymentMethod::Cash,
            vec![line("rice", "Grains", 120, 1, 500)],
        ));
        let slices = revenue_by_location(&sales, &fixture_locations());

        assert_eq!(slices.len(), 3);
        assert!(slices.iter().any(|s| s.name == "Unknown"));
        // Sorted by value descending
        assert!(slices[0].amount_paise >= slices[1].amount_paise);
        assert!(slices[1].amount_paise >= slices[2].amount_paise);
    }

    #[test]
    fn test_revenue_by_category_is_pre_discount() {
        let mut discounted = line("rice", "Grains", 100, 2, 500);
        discounted.discount_bps = 5_000; // half off
        let sales =
            vec![sale("INV-1", (2025, 3, 10), "loc-2", PaymentMethod::Cash, vec![discounted])];
        let slices = revenue_by_category(&sales);
        // Gross price × qty, discount ignored
        assert_eq!(slices[0].amount_paise, 20_000);
    }

    #[test]
    fn test_payment_method_totals() {
        let totals = payment_method_totals(&fixture_sales());
        assert_eq!(totals.len(), 2); // no CARD sales in the fixture
        let upi = totals.iter().find(|t| t.method == PaymentMethod::Upi).unwrap();
        assert_eq!(upi.sale_count, 2);
        assert!(totals[0].amount_paise >= totals[1].amount_paise);
    }

    #[test]
    fn test_daily_sale_counts_windowed_by_today() {
        let sales = fixture_sales();
        let today = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();

        let month = daily_sale_counts(&sales, 30, today);
        assert_eq!(month.len(), 3);
        assert!(month[0].date < month[2].date); // oldest first
        assert_eq!(month[0].count, 1);

        let week = daily_sale_counts(&sales, 7, today);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());

        // A sale dated after "today" never shows up
        let future_today = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let early = daily_sale_counts(&sales, 7, future_today);
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_category_breakdown() {
        let mut rice = Product::new("rice", "Rice", "Grains");
        rice.cost_paise = 9_500;
        rice.min_stock_level = 20;
        rice.stock.insert("loc-1".to_string(), 5); // below global min

        let mut milk = Product::new("milk", "Milk", "Dairy");
        milk.cost_paise = 4_500;
        milk.min_stock_level = 10;
        milk.stock.insert("loc-1".to_string(), 40);

        let breakdown = category_breakdown(&[rice, milk]);
        assert_eq!(breakdown.len(), 2);
        // Dairy: 40 × ₹45 = ₹1800 beats Grains: 5 × ₹95 = ₹475
        assert_eq!(breakdown[0].category, "Dairy");
        assert_eq!(breakdown[0].stock_value_paise, 180_000);
        assert_eq!(breakdown[1].low_stock_count, 1);
    }

    #[test]
    fn test_supplier_breakdown_sorted_descending() {
        let supplier = |id: &str, name: &str, rating: f64| Supplier {
            id: id.to_string(),
            name: name.to_string(),
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            rating,
            category: String::new(),
            payment_terms: "Net 30".to_string(),
            last_supply_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        let suppliers = vec![supplier("sup-1", "Sharma Traders", 4.5), supplier("sup-2", "Gupta & Sons", 4.0)];

        let mut rice = Product::new("rice", "Rice", "Grains");
        rice.supplier = Some("Gupta & Sons".to_string());
        rice.cost_paise = 9_500;
        rice.stock.insert("loc-1".to_string(), 100);

        let mut milk = Product::new("milk", "Milk", "Dairy");
        milk.supplier = Some("Sharma Traders".to_string());
        milk.cost_paise = 4_500;
        milk.stock.insert("loc-1".to_string(), 10);

        let breakdown = supplier_breakdown(&[rice, milk], &suppliers);
        assert_eq!(breakdown[0].supplier, "Gupta & Sons"); // ₹9500 stock value
        assert_eq!(breakdown[0].product_count, 1);
        assert_eq!(breakdown[0].total_units, 100);
        assert_eq!(breakdown[1].supplier, "Sharma Traders");
    }

    #[test]
    fn test_top_customers() {
        let customer = |id: &str, name: &str, purchases: i64| Customer {
            id: id.to_string(),
            name: name.to_string(),
            phone: String::new(),
            email: None,
            gst_number: None,
            address: None,
            loyalty_points: 0,
            total_purchases_paise: purchases,
        };
        let customers = vec![
            customer("c1", "Asha", 50_000),
            customer("c2", "Vikram", 150_000),
            customer("c3", "Meena", 80_000),
        ];
        let top = top_customers(&customers, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Vikram");
        assert_eq!(top[1].name, "Meena");
    }

    #[test]
    fn test_monthly_revenue_and_target_progress() {
        let sales = fixture_sales();
        let march = monthly_revenue(&sales, "loc-2", "2025-03");
        assert_eq!(march.paise(), sales[0].total_paise);
        assert_eq!(monthly_revenue(&sales, "loc-2", "2025-05"), Money::ZERO);

        let progress = target_progress(march, Money::from_rupees(500));
        assert!(progress > 0.0);
        assert_eq!(target_progress(march, Money::ZERO), 0.0);
    }
}
