//! # Demo Walkthrough
//!
//! Seeds the demo shop and walks one business morning through it:
//! billing at the counter, a stock transfer from the warehouse, and the
//! dashboard numbers the owner checks before lunch.
//!
//! ## Usage
//! ```bash
//! cargo run -p kirana-store --bin demo
//!
//! # With store-level tracing
//! RUST_LOG=debug cargo run -p kirana-store --bin demo
//! ```

use chrono::Local;
use kirana_core::reports::{self, SalesFilter};
use kirana_core::types::PaymentMethod;
use kirana_core::{inventory, Cart};
use kirana_store::seed;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let today = Local::now().date_naive();

    println!("🛒 Kirana Demo Walkthrough");
    println!("==========================");
    println!();

    // -------------------------------------------------------------------------
    // Seed
    // -------------------------------------------------------------------------
    let mut store = seed::demo_store();
    println!("✓ Seeded demo shop");
    println!(
        "  {} products, {} locations, {} customers, {} suppliers",
        store.products().len(),
        store.locations().len(),
        store.customers().len(),
        store.suppliers().len()
    );

    // -------------------------------------------------------------------------
    // Morning stock check
    // -------------------------------------------------------------------------
    println!();
    println!("Inventory this morning:");
    let summary = inventory::inventory_summary(store.products(), store.locations(), today);
    println!("  Units on hand:   {}", summary.total_units);
    println!("  Stock value:     {}", summary.stock_value());
    println!("  Low stock:       {} product(s)", summary.low_stock_count);
    println!("  Expiring soon:   {} product(s)", summary.expiring_soon_count);
    for product in inventory::low_stock_products(store.products(), None, store.locations()) {
        println!("  ⚠ {} is running low", product.name);
    }

    // -------------------------------------------------------------------------
    // A bill at the counter
    // -------------------------------------------------------------------------
    println!();
    println!("Ringing up a bill at City Center Store...");

    let mut cart = Cart::new();
    let rice = store
        .products()
        .iter()
        .find(|p| p.id == "prod-1")
        .ok_or("seed is missing prod-1")?;
    cart.add_product(rice, "loc-2", 2)?;
    let milk = store
        .products()
        .iter()
        .find(|p| p.id == "prod-5")
        .ok_or("seed is missing prod-5")?;
    cart.add_product(milk, "loc-2", 3)?;

    cart.set_line_discount("prod-1", 500)?; // 5% off the rice
    cart.set_bill_discount(1_000)?; // regulars get 10% on the bill

    let totals = cart.totals();
    println!("  Items:          {}", totals.item_count);
    println!("  Subtotal:       {}", totals.subtotal());
    println!("  Bill discount:  {}", totals.bill_discount());
    println!("  GST:            {}", totals.tax());
    println!("  Total:          {}", totals.total());

    let customer = store.customers().iter().find(|c| c.id == "cust-1");
    let sale = cart.finalize(today, "loc-2", PaymentMethod::Upi, customer)?;
    let invoice = sale.id.clone();
    store.add_sale(sale);
    println!("✓ Sale recorded: {invoice}");

    if let Some(rajesh) = store.customers().iter().find(|c| c.id == "cust-1") {
        println!(
            "  {} now holds {} loyalty points ({} lifetime)",
            rajesh.name,
            rajesh.loyalty_points,
            rajesh.total_purchases()
        );
    }

    // A quick cash sale at the other branch
    let mut cart = Cart::new();
    let dal = store
        .products()
        .iter()
        .find(|p| p.id == "prod-4")
        .ok_or("seed is missing prod-4")?;
    cart.add_product(dal, "loc-3", 5)?;
    let sale = cart.finalize(today, "loc-3", PaymentMethod::Cash, None)?;
    store.add_sale(sale);
    println!("✓ Walk-in cash sale recorded at North Branch");

    // -------------------------------------------------------------------------
    // Warehouse transfers
    // -------------------------------------------------------------------------
    println!();
    println!("Afternoon replenishment:");

    let transfer = store.transfer_stock("prod-1", "loc-1", "loc-2", 40, Some("weekly top-up".to_string()));
    println!("  Rice transfer:  {:?}", transfer.status);

    let transfer = store.transfer_stock("prod-7", "loc-1", "loc-3", 500, None);
    println!("  Sugar transfer: {:?}", transfer.status);
    if let Some(reason) = &transfer.reason {
        println!("    ({reason})");
    }

    // -------------------------------------------------------------------------
    // The owner's dashboard
    // -------------------------------------------------------------------------
    println!();
    println!("Dashboard:");

    let gst = reports::tax_summary(store.sales(), &SalesFilter::default());
    println!(
        "  GST filing:     {} invoices, taxable {}, tax {}",
        gst.invoice_count,
        gst.taxable_value(),
        gst.tax()
    );

    let metrics = reports::business_metrics(store.sales(), store.products());
    println!(
        "  Revenue {} | COGS {} | margin {:.1}%",
        metrics.total_revenue(),
        metrics.total_cogs(),
        metrics.gross_margin_pct
    );

    for slice in reports::revenue_by_location(store.sales(), store.locations()) {
        println!("  {:<18} {}", slice.name, slice.amount());
    }
    for entry in reports::payment_method_totals(store.sales()) {
        println!("  {:?} sales: {} ({} invoice(s))", entry.method, entry.amount(), entry.sale_count);
    }

    let this_month = today.format("%Y-%m").to_string();
    let revenue = reports::monthly_revenue(store.sales(), "loc-2", &this_month);
    if let Some(target) = store
        .sales_targets()
        .iter()
        .find(|t| t.location_id == "loc-2" && t.month == this_month)
    {
        let progress = reports::target_progress(revenue, target.target_amount());
        println!(
            "  City Center:    {} of {} target ({:.1}%)",
            revenue,
            target.target_amount(),
            progress * 100.0
        );
    }

    println!("  Best customers:");
    for customer in reports::top_customers(store.customers(), 3) {
        println!("    {:<20} {}", customer.name, customer.total_purchases());
    }

    // -------------------------------------------------------------------------
    // Notification feed
    // -------------------------------------------------------------------------
    println!();
    println!("Notification feed (newest first):");
    for notification in store.notifications().iter().take(8) {
        match &notification.details {
            Some(details) => println!("  [{:?}] {}: {}", notification.kind, notification.message, details),
            None => println!("  [{:?}] {}", notification.kind, notification.message),
        }
    }

    println!();
    println!("✓ Demo complete");
    Ok(())
}
