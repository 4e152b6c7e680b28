//! # Store Module: The Owned Aggregate
//!
//! [`Store`] holds every record of a running shop and is the only way to
//! change them. Each mutator does three things, in order: apply the
//! change, emit a `tracing` event for the operator, and (where the
//! shopkeeper cares) append a notification to the bounded feed.
//!
//! ## Totality
//!
//! Every mutator is a total function:
//!
//! - a transfer that cannot happen becomes a FAILED [`Transfer`] record
//!   plus an ERROR notification, never a panic or `Err`;
//! - an unknown id is a debug-logged no-op;
//! - stock adjustments clamp at zero instead of going negative.
//!
//! Callers that need rejection semantics (the cashier's cart) get them
//! from `kirana_core::billing` before anything reaches the store.

use crate::notifications::NotificationLog;
use chrono::{NaiveDate, Utc};
use kirana_core::money::Money;
use kirana_core::types::{
    BusinessGoal, Customer, GoalStatus, Location, Notification, NotificationKind, Product, Sale,
    SalesTarget, Supplier, TaxTier, Transfer, TransferStatus,
};
use kirana_core::LOYALTY_PAISE_PER_POINT;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

// =============================================================================
// Store
// =============================================================================

/// All state of one shop, owned in one place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub(crate) products: Vec<Product>,
    pub(crate) locations: Vec<Location>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) transfers: Vec<Transfer>,
    pub(crate) customers: Vec<Customer>,
    pub(crate) suppliers: Vec<Supplier>,
    pub(crate) tax_tiers: Vec<TaxTier>,
    pub(crate) sales_targets: Vec<SalesTarget>,
    pub(crate) goals: Vec<BusinessGoal>,
    pub(crate) notifications: NotificationLog,
}

impl Store {
    /// Creates an empty store over a fixed set of locations.
    pub fn new(locations: Vec<Location>) -> Self {
        let mut store = Store {
            products: Vec::new(),
            locations,
            sales: Vec::new(),
            transfers: Vec::new(),
            customers: Vec::new(),
            suppliers: Vec::new(),
            tax_tiers: Vec::new(),
            sales_targets: Vec::new(),
            goals: Vec::new(),
            notifications: NotificationLog::new(),
        };
        info!(locations = store.locations.len(), "store initialized");
        store.add_notification(
            NotificationKind::Info,
            "System Initialized",
            Some("Welcome to Kirana".to_string()),
        );
        store
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn tax_tiers(&self) -> &[TaxTier] {
        &self.tax_tiers
    }

    pub fn sales_targets(&self) -> &[SalesTarget] {
        &self.sales_targets
    }

    pub fn goals(&self) -> &[BusinessGoal] {
        &self.goals
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    /// Display name for a location id; unknown ids read back as the id so
    /// messages always say *something*.
    fn location_name(&self, location_id: &str) -> String {
        self.locations
            .iter()
            .find(|l| l.id == location_id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| location_id.to_string())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Adds a product to the catalog.
    pub fn add_product(&mut self, product: Product) {
        info!(product_id = %product.id, name = %product.name, "product added");
        let name = product.name.clone();
        let sku = product.sku.clone().unwrap_or_else(|| "-".to_string());
        self.products.push(product);
        self.add_notification(
            NotificationKind::Success,
            format!("Product Added: {name}"),
            Some(format!("SKU: {sku}")),
        );
    }

    /// Replaces a product by id. Unknown id is a no-op.
    pub fn update_product(&mut self, product: Product) {
        let id = product.id.clone();
        let name = product.name.clone();
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = product;
                info!(product_id = %id, "product updated");
                self.add_notification(
                    NotificationKind::Info,
                    format!("Product Updated: {name}"),
                    None,
                );
            }
            None => debug!(product_id = %id, "update for unknown product ignored"),
        }
    }

    /// Removes the given products from the catalog.
    pub fn delete_products(&mut self, product_ids: &[String]) {
        let before = self.products.len();
        self.products.retain(|p| !product_ids.contains(&p.id));
        let removed = before - self.products.len();
        if removed > 0 {
            warn!(removed, "products deleted");
            self.add_notification(
                NotificationKind::Warning,
                format!("{removed} Product(s) Deleted"),
                None,
            );
        }
    }

    // =========================================================================
    // Stock
    // =========================================================================

    /// Adjusts stock at one location by `delta`, clamping at zero.
    ///
    /// A low-stock warning fires only on the **downward edge**: when the
    /// level crosses from above the effective minimum to at-or-below it.
    /// Repeat decrements below the line stay silent; a restock above the
    /// line re-arms the alert. Unknown product ids are no-ops.
    pub fn update_stock(&mut self, product_id: &str, location_id: &str, delta: i64) {
        let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) else {
            debug!(product_id, location_id, delta, "stock update for unknown product ignored");
            return;
        };

        let current = product.stock_at(location_id);
        let new_level = (current + delta).max(0);
        product.stock.insert(location_id.to_string(), new_level);

        let threshold = product.effective_min_stock(location_id);
        let crossed_down = new_level <= threshold && current > threshold;
        let name = product.name.clone();
        debug!(product_id, location_id, delta, new_level, "stock updated");

        if crossed_down {
            let location_name = self.location_name(location_id);
            warn!(product_id, location_id, new_level, threshold, "stock at or below minimum");
            self.add_notification(
                NotificationKind::Warning,
                format!("Low Stock Alert: {name}"),
                Some(format!("Location: {location_name}. Remaining: {new_level}")),
            );
        }
    }

    /// Moves stock between locations, recording the attempt either way.
    ///
    /// The returned [`Transfer`] is the appended audit record. On any
    /// guard failure nothing moves: the record is FAILED with a reason
    /// and an ERROR notification is raised.
    pub fn transfer_stock(
        &mut self,
        product_id: &str,
        from: &str,
        to: &str,
        quantity: i64,
        notes: Option<String>,
    ) -> Transfer {
        let from_name = self.location_name(from);
        let to_name = self.location_name(to);
        let snapshot = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| (p.name.clone(), p.stock_at(from)));

        let failure = match &snapshot {
            None => Some("Product not found".to_string()),
            Some((_, available)) => {
                if quantity <= 0 {
                    Some(format!("Invalid quantity: {quantity}"))
                } else if from == to {
                    Some("Source and destination locations are the same".to_string())
                } else if *available < quantity {
                    Some(format!(
                        "Insufficient stock in {from_name}. Requested: {quantity}, Available: {available}"
                    ))
                } else {
                    None
                }
            }
        };

        match &failure {
            None => {
                if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
                    let from_stock = product.stock_at(from);
                    let to_stock = product.stock_at(to);
                    product.stock.insert(from.to_string(), from_stock - quantity);
                    product.stock.insert(to.to_string(), to_stock + quantity);
                }
                let product_name =
                    snapshot.as_ref().map(|(name, _)| name.as_str()).unwrap_or(product_id);
                info!(product_id, from, to, quantity, "stock transfer completed");
                self.add_notification(
                    NotificationKind::Success,
                    "Stock Transfer Successful",
                    Some(format!(
                        "{quantity} units of {product_name} from {from_name} to {to_name}"
                    )),
                );
            }
            Some(reason) => {
                warn!(product_id, from, to, quantity, reason = %reason, "stock transfer failed");
                self.add_notification(
                    NotificationKind::Error,
                    "Stock Transfer Failed",
                    Some(reason.clone()),
                );
            }
        }

        let record = Transfer {
            id: format!("trf-{}", Uuid::new_v4()),
            product_id: product_id.to_string(),
            from_location_id: from.to_string(),
            to_location_id: to.to_string(),
            quantity,
            timestamp: Utc::now(),
            status: if failure.is_none() {
                TransferStatus::Completed
            } else {
                TransferStatus::Failed
            },
            reason: failure,
            notes,
        };
        self.transfers.push(record.clone());
        record
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Records a finalized sale: appends it, deducts per-location stock
    /// line by line (low-stock alerts can fire), notifies, and credits
    /// loyalty when a known customer is attached.
    pub fn add_sale(&mut self, sale: Sale) {
        info!(
            invoice = %sale.id,
            location_id = %sale.location_id,
            total = %sale.total(),
            lines = sale.items.len(),
            "sale recorded"
        );
        let invoice = sale.id.clone();
        let location_id = sale.location_id.clone();
        let customer_id = sale.customer_id.clone();
        let total = sale.total();
        let line_moves: Vec<(String, i64)> =
            sale.items.iter().map(|l| (l.product_id.clone(), l.quantity)).collect();

        self.sales.push(sale);

        for (product_id, quantity) in &line_moves {
            self.update_stock(product_id, &location_id, -quantity);
        }

        self.add_notification(
            NotificationKind::Success,
            format!("New Sale Recorded: {total}"),
            Some(format!("Invoice: {invoice}")),
        );

        if let Some(customer_id) = customer_id {
            if let Some(customer) = self.customers.iter_mut().find(|c| c.id == customer_id) {
                let points = total.paise() / LOYALTY_PAISE_PER_POINT;
                customer.loyalty_points += points;
                customer.total_purchases_paise += total.paise();
                debug!(customer_id = %customer.id, points, "loyalty credited");
            }
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Registers a customer.
    pub fn add_customer(&mut self, customer: Customer) {
        info!(customer_id = %customer.id, name = %customer.name, "customer added");
        let name = customer.name.clone();
        self.customers.push(customer);
        self.add_notification(
            NotificationKind::Success,
            format!("New Customer Added: {name}"),
            None,
        );
    }

    /// Replaces a customer by id. Unknown id is a no-op.
    pub fn update_customer(&mut self, customer: Customer) {
        let id = customer.id.clone();
        let name = customer.name.clone();
        match self.customers.iter_mut().find(|c| c.id == id) {
            Some(existing) => {
                *existing = customer;
                info!(customer_id = %id, "customer updated");
                self.add_notification(
                    NotificationKind::Info,
                    format!("Customer Updated: {name}"),
                    None,
                );
            }
            None => debug!(customer_id = %id, "update for unknown customer ignored"),
        }
    }

    // =========================================================================
    // Tax Tiers
    // =========================================================================

    /// Adds a GST slab.
    pub fn add_tax_tier(&mut self, tier: TaxTier) {
        info!(tier_id = %tier.id, name = %tier.name, rate_bps = tier.rate_bps, "tax tier added");
        let name = tier.name.clone();
        self.tax_tiers.push(tier);
        self.add_notification(NotificationKind::Info, format!("New Tax Tier Added: {name}"), None);
    }

    /// Removes a GST slab by id. Unknown id is a no-op.
    pub fn delete_tax_tier(&mut self, tier_id: &str) {
        let before = self.tax_tiers.len();
        self.tax_tiers.retain(|t| t.id != tier_id);
        if self.tax_tiers.len() < before {
            warn!(tier_id, "tax tier deleted");
            self.add_notification(NotificationKind::Warning, "Tax Tier Deleted", None);
        }
    }

    // =========================================================================
    // Targets & Goals
    // =========================================================================

    /// Upserts the revenue target for one (location, month) pair.
    pub fn set_sales_target(&mut self, location_id: &str, month: &str, target_amount: Money) {
        match self
            .sales_targets
            .iter_mut()
            .find(|t| t.location_id == location_id && t.month == month)
        {
            Some(existing) => existing.target_amount_paise = target_amount.paise(),
            None => self.sales_targets.push(SalesTarget {
                id: format!("tgt-{}", Uuid::new_v4()),
                location_id: location_id.to_string(),
                month: month.to_string(),
                target_amount_paise: target_amount.paise(),
            }),
        }
        info!(location_id, month, target = %target_amount, "sales target set");
        self.add_notification(NotificationKind::Info, "Sales Target Updated", None);
    }

    /// Adds a pending goal.
    pub fn add_goal(&mut self, text: impl Into<String>, deadline: Option<NaiveDate>) {
        self.goals.push(BusinessGoal {
            id: format!("goal-{}", Uuid::new_v4()),
            text: text.into(),
            deadline,
            status: GoalStatus::Pending,
        });
    }

    /// Rewords a goal. Unknown id is a no-op.
    pub fn update_goal(&mut self, goal_id: &str, text: impl Into<String>) {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) {
            goal.text = text.into();
        }
    }

    /// Marks a goal pending or completed. Unknown id is a no-op.
    pub fn set_goal_status(&mut self, goal_id: &str, status: GoalStatus) {
        if let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) {
            goal.status = status;
        }
    }

    /// Removes a goal. Unknown id is a no-op.
    pub fn delete_goal(&mut self, goal_id: &str) {
        self.goals.retain(|g| g.id != goal_id);
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Appends to the notification feed (newest first, capped).
    pub fn add_notification(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        details: Option<String>,
    ) {
        self.notifications.push(Notification {
            id: format!("not-{}", Uuid::new_v4()),
            kind,
            message: message.into(),
            details,
            timestamp: Utc::now(),
        });
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_core::types::{CartLine, LocationKind, PaymentMethod};

    fn test_locations() -> Vec<Location> {
        vec![
            Location {
                id: "loc-1".to_string(),
                name: "Main Warehouse".to_string(),
                address: "Industrial Area".to_string(),
                kind: LocationKind::Warehouse,
            },
            Location {
                id: "loc-2".to_string(),
                name: "City Center Store".to_string(),
                address: "Market Road".to_string(),
                kind: LocationKind::Store,
            },
        ]
    }

    fn test_product(id: &str, name: &str, warehouse_stock: i64, min_level: i64) -> Product {
        let mut p = Product::new(id, name, "Grains");
        p.sku = Some(format!("SKU-{id}"));
        p.price_paise = 12_000;
        p.cost_paise = 9_500;
        p.tax_rate_bps = 500;
        p.min_stock_level = min_level;
        p.stock.insert("loc-1".to_string(), warehouse_stock);
        p
    }

    fn test_store() -> Store {
        let mut store = Store::new(test_locations());
        store.add_product(test_product("prod-1", "Basmati Rice", 100, 10));
        store
    }

    fn test_sale(total_paise: i64, customer_id: Option<&str>, qty: i64) -> Sale {
        let product = test_product("prod-1", "Basmati Rice", 100, 10);
        let line = CartLine::snapshot(&product, qty);
        Sale {
            id: "INV-TEST".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            items: vec![line],
            subtotal_paise: total_paise,
            tax_paise: 0,
            total_paise,
            bill_discount_bps: 0,
            customer_id: customer_id.map(str::to_string),
            customer_name: Some("Walk-in".to_string()),
            location_id: "loc-1".to_string(),
            payment_method: PaymentMethod::Cash,
            transaction_id: "TXN-TEST".to_string(),
        }
    }

    fn warning_count(store: &Store, message_prefix: &str) -> usize {
        store
            .notifications()
            .iter()
            .filter(|n| n.kind == NotificationKind::Warning && n.message.starts_with(message_prefix))
            .count()
    }

    #[test]
    fn test_new_store_announces_itself() {
        let store = Store::new(test_locations());
        let latest = store.notifications().latest().unwrap();
        assert_eq!(latest.kind, NotificationKind::Info);
        assert_eq!(latest.message, "System Initialized");
        assert_eq!(store.notifications().len(), 1);
    }

    #[test]
    fn test_add_product_notifies_with_sku() {
        let store = test_store();
        assert_eq!(store.products().len(), 1);
        let latest = store.notifications().latest().unwrap();
        assert_eq!(latest.message, "Product Added: Basmati Rice");
        assert_eq!(latest.details.as_deref(), Some("SKU: SKU-prod-1"));
    }

    #[test]
    fn test_update_product_replaces_by_id() {
        let mut store = test_store();
        let mut renamed = test_product("prod-1", "Basmati Rice Premium", 100, 10);
        renamed.price_paise = 13_000;
        store.update_product(renamed);

        assert_eq!(store.products()[0].name, "Basmati Rice Premium");
        assert_eq!(store.products()[0].price_paise, 13_000);
        assert_eq!(
            store.notifications().latest().unwrap().message,
            "Product Updated: Basmati Rice Premium"
        );
    }

    #[test]
    fn test_update_unknown_product_is_silent() {
        let mut store = test_store();
        let count = store.notifications().len();
        store.update_product(test_product("prod-404", "Ghost", 1, 1));
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.notifications().len(), count);
    }

    #[test]
    fn test_delete_products_counts_removed() {
        let mut store = test_store();
        store.add_product(test_product("prod-2", "Sunflower Oil", 50, 5));
        store.delete_products(&["prod-1".to_string(), "prod-2".to_string(), "nope".to_string()]);

        assert!(store.products().is_empty());
        assert_eq!(store.notifications().latest().unwrap().message, "2 Product(s) Deleted");
    }

    #[test]
    fn test_update_stock_clamps_at_zero() {
        let mut store = test_store();
        store.update_stock("prod-1", "loc-2", 3);
        store.update_stock("prod-1", "loc-2", -10);
        assert_eq!(store.products()[0].stock_at("loc-2"), 0);
    }

    #[test]
    fn test_update_stock_unknown_product_is_noop() {
        let mut store = test_store();
        let count = store.notifications().len();
        store.update_stock("prod-404", "loc-1", 5);
        assert_eq!(store.notifications().len(), count);
    }

    #[test]
    fn test_low_stock_alert_fires_only_on_the_edge() {
        let mut store = test_store(); // stock 100, min 10 at loc-1
        store.update_stock("prod-1", "loc-1", -90); // 100 -> 10: crosses
        assert_eq!(warning_count(&store, "Low Stock Alert"), 1);
        let alert = store.notifications().latest().unwrap();
        assert_eq!(alert.message, "Low Stock Alert: Basmati Rice");
        assert_eq!(alert.details.as_deref(), Some("Location: Main Warehouse. Remaining: 10"));

        // Already below: further decrements stay silent
        store.update_stock("prod-1", "loc-1", -3);
        assert_eq!(warning_count(&store, "Low Stock Alert"), 1);

        // Restock above the line re-arms the alert
        store.update_stock("prod-1", "loc-1", 20); // 7 -> 27
        store.update_stock("prod-1", "loc-1", -20); // 27 -> 7: crosses again
        assert_eq!(warning_count(&store, "Low Stock Alert"), 2);
    }

    #[test]
    fn test_low_stock_alert_uses_location_override() {
        let mut store = Store::new(test_locations());
        let mut p = test_product("prod-1", "Basmati Rice", 100, 10);
        p.min_stock_overrides.insert("loc-1".to_string(), 30);
        store.add_product(p);

        store.update_stock("prod-1", "loc-1", -69); // 100 -> 31: above override
        assert_eq!(warning_count(&store, "Low Stock Alert"), 0);
        store.update_stock("prod-1", "loc-1", -1); // 31 -> 30: at override
        assert_eq!(warning_count(&store, "Low Stock Alert"), 1);
    }

    #[test]
    fn test_transfer_success_conserves_stock() {
        let mut store = test_store();
        let before_total = store.products()[0].total_stock();

        let record = store.transfer_stock("prod-1", "loc-1", "loc-2", 40, None);

        assert_eq!(record.status, TransferStatus::Completed);
        assert_eq!(record.reason, None);
        let product = &store.products()[0];
        assert_eq!(product.stock_at("loc-1"), 60);
        assert_eq!(product.stock_at("loc-2"), 40);
        assert_eq!(product.total_stock(), before_total);

        assert_eq!(store.transfers().len(), 1);
        let latest = store.notifications().latest().unwrap();
        assert_eq!(latest.kind, NotificationKind::Success);
        assert_eq!(latest.message, "Stock Transfer Successful");
        assert_eq!(
            latest.details.as_deref(),
            Some("40 units of Basmati Rice from Main Warehouse to City Center Store")
        );
    }

    #[test]
    fn test_transfer_insufficient_stock_fails_closed() {
        let mut store = test_store();
        let record = store.transfer_stock("prod-1", "loc-1", "loc-2", 500, None);

        assert_eq!(record.status, TransferStatus::Failed);
        assert_eq!(
            record.reason.as_deref(),
            Some("Insufficient stock in Main Warehouse. Requested: 500, Available: 100")
        );
        // Nothing moved
        assert_eq!(store.products()[0].stock_at("loc-1"), 100);
        assert_eq!(store.products()[0].stock_at("loc-2"), 0);
        // But the attempt is on the record and in the feed
        assert_eq!(store.transfers().len(), 1);
        let latest = store.notifications().latest().unwrap();
        assert_eq!(latest.kind, NotificationKind::Error);
        assert_eq!(latest.message, "Stock Transfer Failed");
    }

    #[test]
    fn test_transfer_unknown_product() {
        let mut store = test_store();
        let record = store.transfer_stock("prod-404", "loc-1", "loc-2", 5, None);
        assert_eq!(record.status, TransferStatus::Failed);
        assert_eq!(record.reason.as_deref(), Some("Product not found"));
    }

    #[test]
    fn test_transfer_rejects_non_positive_quantity() {
        let mut store = test_store();
        let record = store.transfer_stock("prod-1", "loc-1", "loc-2", 0, None);
        assert_eq!(record.reason.as_deref(), Some("Invalid quantity: 0"));

        let record = store.transfer_stock("prod-1", "loc-1", "loc-2", -5, None);
        assert_eq!(record.reason.as_deref(), Some("Invalid quantity: -5"));
        assert_eq!(store.products()[0].stock_at("loc-1"), 100);
    }

    #[test]
    fn test_transfer_rejects_same_location() {
        let mut store = test_store();
        let record = store.transfer_stock("prod-1", "loc-1", "loc-1", 5, None);
        assert_eq!(record.status, TransferStatus::Failed);
        assert_eq!(
            record.reason.as_deref(),
            Some("Source and destination locations are the same")
        );
        assert_eq!(store.products()[0].stock_at("loc-1"), 100);
    }

    #[test]
    fn test_transfer_message_falls_back_to_location_id() {
        let mut store = test_store();
        let record = store.transfer_stock("prod-1", "loc-ghost", "loc-2", 5, None);
        assert_eq!(
            record.reason.as_deref(),
            Some("Insufficient stock in loc-ghost. Requested: 5, Available: 0")
        );
    }

    #[test]
    fn test_transfer_keeps_operator_notes() {
        let mut store = test_store();
        let record =
            store.transfer_stock("prod-1", "loc-1", "loc-2", 10, Some("weekly top-up".to_string()));
        assert_eq!(record.notes.as_deref(), Some("weekly top-up"));
        assert_eq!(store.transfers()[0].notes.as_deref(), Some("weekly top-up"));
    }

    #[test]
    fn test_add_sale_decrements_stock_and_notifies() {
        let mut store = test_store();
        store.add_sale(test_sale(24_975, None, 2));

        assert_eq!(store.sales().len(), 1);
        assert_eq!(store.products()[0].stock_at("loc-1"), 98);
        let latest = store.notifications().latest().unwrap();
        assert_eq!(latest.message, "New Sale Recorded: ₹249.75");
        assert_eq!(latest.details.as_deref(), Some("Invoice: INV-TEST"));
    }

    #[test]
    fn test_add_sale_credits_loyalty() {
        let mut store = test_store();
        store.add_customer(Customer {
            id: "cust-1".to_string(),
            name: "Rajesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            email: None,
            gst_number: None,
            address: None,
            loyalty_points: 10,
            total_purchases_paise: 100_000,
        });

        // ₹250 earns exactly 2 points (floor of 250/100)
        store.add_sale(test_sale(25_000, Some("cust-1"), 1));

        let customer = &store.customers()[0];
        assert_eq!(customer.loyalty_points, 12);
        assert_eq!(customer.total_purchases_paise, 125_000);
    }

    #[test]
    fn test_add_sale_unknown_customer_skips_loyalty() {
        let mut store = test_store();
        store.add_sale(test_sale(25_000, Some("cust-404"), 1));
        assert_eq!(store.sales().len(), 1); // sale still recorded
    }

    #[test]
    fn test_sales_are_append_only_in_order() {
        let mut store = test_store();
        store.add_sale(test_sale(1_000, None, 1));
        store.add_sale(test_sale(2_000, None, 1));
        assert_eq!(store.sales()[0].total_paise, 1_000);
        assert_eq!(store.sales()[1].total_paise, 2_000);
    }

    #[test]
    fn test_set_sales_target_upserts_by_location_and_month() {
        let mut store = test_store();
        store.set_sales_target("loc-2", "2025-03", Money::from_rupees(60_000));
        store.set_sales_target("loc-2", "2025-03", Money::from_rupees(65_000));
        store.set_sales_target("loc-2", "2025-04", Money::from_rupees(70_000));

        assert_eq!(store.sales_targets().len(), 2);
        let march = store
            .sales_targets()
            .iter()
            .find(|t| t.month == "2025-03")
            .unwrap();
        assert_eq!(march.target_amount(), Money::from_rupees(65_000));
        assert_eq!(store.notifications().latest().unwrap().message, "Sales Target Updated");
    }

    #[test]
    fn test_tax_tier_lifecycle() {
        let mut store = test_store();
        store.add_tax_tier(TaxTier {
            id: "tax-18".to_string(),
            name: "GST 18%".to_string(),
            category: None,
            rate_bps: 1_800,
            cgst_bps: 900,
            sgst_bps: 900,
        });
        assert_eq!(
            store.notifications().latest().unwrap().message,
            "New Tax Tier Added: GST 18%"
        );

        store.delete_tax_tier("tax-18");
        assert!(store.tax_tiers().is_empty());
        assert_eq!(store.notifications().latest().unwrap().message, "Tax Tier Deleted");

        // Deleting again: no-op, no extra notification
        let count = store.notifications().len();
        store.delete_tax_tier("tax-18");
        assert_eq!(store.notifications().len(), count);
    }

    #[test]
    fn test_goal_lifecycle_is_quiet() {
        let mut store = test_store();
        let count = store.notifications().len();

        store.add_goal("Clear dead stock", NaiveDate::from_ymd_opt(2025, 12, 31));
        let goal_id = store.goals()[0].id.clone();
        assert_eq!(store.goals()[0].status, GoalStatus::Pending);

        store.update_goal(&goal_id, "Clear dead stock by Diwali");
        assert_eq!(store.goals()[0].text, "Clear dead stock by Diwali");

        store.set_goal_status(&goal_id, GoalStatus::Completed);
        assert_eq!(store.goals()[0].status, GoalStatus::Completed);

        store.delete_goal(&goal_id);
        assert!(store.goals().is_empty());

        // Goals never touch the notification feed
        assert_eq!(store.notifications().len(), count);
    }

    #[test]
    fn test_customer_update_by_id() {
        let mut store = test_store();
        store.add_customer(Customer {
            id: "cust-1".to_string(),
            name: "Priya Singh".to_string(),
            phone: "9988776655".to_string(),
            email: None,
            gst_number: None,
            address: None,
            loyalty_points: 0,
            total_purchases_paise: 0,
        });
        assert_eq!(
            store.notifications().latest().unwrap().message,
            "New Customer Added: Priya Singh"
        );

        let mut updated = store.customers()[0].clone();
        updated.phone = "9000000000".to_string();
        store.update_customer(updated);
        assert_eq!(store.customers()[0].phone, "9000000000");
        assert_eq!(
            store.notifications().latest().unwrap().message,
            "Customer Updated: Priya Singh"
        );
    }

    #[test]
    fn test_store_snapshot_uses_camel_case() {
        let store = test_store();
        let json = serde_json::to_value(&store).unwrap();
        assert!(json["products"].is_array());
        assert!(json["taxTiers"].is_array());
        assert!(json["salesTargets"].is_array());
        assert_eq!(json["products"][0]["minStockLevel"], 10);
    }
}
