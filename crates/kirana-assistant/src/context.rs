//! # Context Module: What the Model Gets Told
//!
//! Prompt text is the whole interface to the model, so everything here
//! is a pure function over borrowed business data. No I/O, no clock, no
//! client: a snapshot goes in, a string comes out, and tests read the
//! string.

use std::fmt;

use kirana_core::inventory;
use kirana_core::money::Money;
use kirana_core::reports::BusinessMetrics;
use kirana_core::types::{Customer, Location, Product, Sale};

// =============================================================================
// Business Snapshot
// =============================================================================

/// The operational numbers the assistant is briefed with on every chat.
///
/// Built once per question from borrowed slices; cheap enough that no
/// caching is worth the staleness risk.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessContext {
    /// Σ invoice totals over all recorded sales.
    pub total_revenue: Money,
    /// Σ GST charged over all recorded sales.
    pub gst_liability: Money,
    /// Catalog size.
    pub product_count: usize,
    /// Names of products low in any location.
    pub low_stock_names: Vec<String>,
    /// Display names of active locations.
    pub location_names: Vec<String>,
    /// Registered customers.
    pub customer_count: usize,
    /// Product with the highest pre-discount sales value, if any sale exists.
    pub top_seller: Option<String>,
}

impl BusinessContext {
    /// Computes the snapshot from borrowed store slices.
    pub fn from_snapshot(
        products: &[Product],
        sales: &[Sale],
        locations: &[Location],
        customers: &[Customer],
    ) -> Self {
        let total_revenue: Money = sales.iter().map(|s| s.total()).sum();
        let gst_liability: Money = sales.iter().map(|s| s.tax()).sum();
        let low_stock_names: Vec<String> =
            inventory::low_stock_products(products, None, locations)
                .into_iter()
                .map(|p| p.name.clone())
                .collect();

        BusinessContext {
            total_revenue,
            gst_liability,
            product_count: products.len(),
            low_stock_names,
            location_names: locations.iter().map(|l| l.name.clone()).collect(),
            customer_count: customers.len(),
            top_seller: top_seller(sales),
        }
    }

    /// Renders the context block embedded in every chat prompt.
    pub fn render(&self) -> String {
        let mut block = format!(
            "Total Revenue: {}, Total Products: {}, Low Stock: {} items.\n\
             GST Liability: {}.\n\
             Active Locations: {}.\n\
             Customers on Record: {}.",
            self.total_revenue,
            self.product_count,
            self.low_stock_names.len(),
            self.gst_liability,
            self.location_names.join(", "),
            self.customer_count,
        );
        if let Some(top_seller) = &self.top_seller {
            block.push_str(&format!("\nTop Seller: {top_seller}."));
        }
        block
    }
}

/// Product name with the highest pre-discount sales value across all
/// sales. Ties resolve to the alphabetically first name.
fn top_seller(sales: &[Sale]) -> Option<String> {
    let mut by_product: std::collections::BTreeMap<&str, i64> = std::collections::BTreeMap::new();
    for sale in sales {
        for line in &sale.items {
            *by_product.entry(line.name.as_str()).or_insert(0) += line.line_value().paise();
        }
    }
    let mut best: Option<(&str, i64)> = None;
    for (name, value) in by_product {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((name, value)),
        }
    }
    best.map(|(name, _)| name.to_string())
}

// =============================================================================
// Response Tone
// =============================================================================

/// Register the model is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseTone {
    #[default]
    Professional,
    Casual,
    Concise,
    Detailed,
}

impl fmt::Display for ResponseTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tone = match self {
            ResponseTone::Professional => "Professional",
            ResponseTone::Casual => "Casual",
            ResponseTone::Concise => "Concise",
            ResponseTone::Detailed => "Detailed",
        };
        f.write_str(tone)
    }
}

// =============================================================================
// Prompt Builders
// =============================================================================

/// Builds the chat prompt: persona, tone, context block, then the query.
pub fn chat_prompt(message: &str, context: &BusinessContext, tone: ResponseTone) -> String {
    format!(
        "You are the AI Assistant for 'Hanuman Trader', an inventory management system.\n\
         \n\
         Tone: {tone}\n\
         \n\
         Context Data (Current System State):\n\
         {context}\n\
         \n\
         User Query:\n\
         {message}\n\
         \n\
         Answer helpful, concise, and professional based on the requested tone.\n\
         - If they ask about GST, analyze the taxes context provided.\n\
         - If they ask about customers, refer to the loyalty and history context.",
        context = context.render(),
    )
}

/// Builds the business-trends analysis prompt from computed metrics.
pub fn trends_prompt(
    metrics: &BusinessMetrics,
    top_sellers: &[String],
    slow_movers: &[String],
    scenarios: &[String],
) -> String {
    let scenario_text = if scenarios.is_empty() {
        String::new()
    } else {
        format!("\nConsider these hypothetical scenarios: {}.\n", scenarios.join(", "))
    };

    format!(
        "Analyze the following business metrics for 'Hanuman Trader':\n\
         Total Revenue: {revenue}\n\
         Cost of Goods Sold: {cogs}\n\
         Gross Profit: {profit} (margin {margin:.1}%)\n\
         Inventory Value: {inventory}\n\
         Inventory Turnover: {turnover:.2}\n\
         Top Sellers: {top}\n\
         Slow Movers: {slow}\n\
         {scenario_text}\n\
         Provide strategic advice on:\n\
         1. Improving inventory turnover for the top-selling and slow-moving products listed.\n\
         2. Increasing profitability.\n\
         3. Managing risks associated with the listed scenarios/factors.\n\
         \n\
         Keep it concise, actionable, and tailored for an MSME owner.",
        revenue = metrics.total_revenue(),
        cogs = metrics.total_cogs(),
        profit = metrics.gross_profit(),
        margin = metrics.gross_margin_pct,
        inventory = metrics.inventory_value(),
        turnover = metrics.inventory_turnover,
        top = name_list(top_sellers),
        slow = name_list(slow_movers),
    )
}

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kirana_core::reports;
    use kirana_core::types::{CartLine, LocationKind, PaymentMethod};

    fn location(id: &str, name: &str) -> Location {
        Location {
            id: id.to_string(),
            name: name.to_string(),
            address: String::new(),
            kind: LocationKind::Store,
        }
    }

    fn product(id: &str, name: &str, stock: i64, min_level: i64) -> Product {
        let mut p = Product::new(id, name, "Grains");
        p.cost_paise = 8_000;
        p.stock.insert("loc-1".to_string(), stock);
        p.min_stock_level = min_level;
        p
    }

    fn line(name: &str, price_rupees: i64, qty: i64, tax_bps: u32) -> CartLine {
        CartLine {
            product_id: name.to_string(),
            name: name.to_string(),
            sku: None,
            hsn_code: "0000".to_string(),
            category: "Grains".to_string(),
            unit_price_paise: price_rupees * 100,
            unit_cost_paise: price_rupees * 80,
            tax_rate_bps: tax_bps,
            quantity: qty,
            discount_bps: 0,
        }
    }

    fn sale(id: &str, items: Vec<CartLine>) -> Sale {
        let subtotal: i64 = items.iter().map(|l| l.taxable_value().paise()).sum();
        let tax: i64 = items.iter().map(|l| l.tax_amount().paise()).sum();
        Sale {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            items,
            subtotal_paise: subtotal,
            tax_paise: tax,
            total_paise: subtotal + tax,
            bill_discount_bps: 0,
            customer_id: None,
            customer_name: Some("Walk-in".to_string()),
            location_id: "loc-1".to_string(),
            payment_method: PaymentMethod::Cash,
            transaction_id: format!("TXN-{id}"),
        }
    }

    fn fixture() -> (Vec<Product>, Vec<Sale>, Vec<Location>, Vec<Customer>) {
        let products = vec![
            product("prod-1", "Basmati Rice", 100, 10),
            product("prod-2", "Sugar", 4, 10), // low: 4 <= 10
        ];
        let sales = vec![
            // Rice: ₹240 of line value; Sugar: ₹100
            sale("INV-1", vec![line("Basmati Rice", 120, 2, 500)]),
            sale("INV-2", vec![line("Sugar", 50, 2, 500)]),
        ];
        let locations = vec![location("loc-1", "City Center Store")];
        let customers = vec![Customer {
            id: "cust-1".to_string(),
            name: "Rajesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            email: None,
            gst_number: None,
            address: None,
            loyalty_points: 0,
            total_purchases_paise: 0,
        }];
        (products, sales, locations, customers)
    }

    #[test]
    fn test_snapshot_totals_and_rollups() {
        let (products, sales, locations, customers) = fixture();
        let context = BusinessContext::from_snapshot(&products, &sales, &locations, &customers);

        // ₹240 @5% = ₹12 tax; ₹100 @5% = ₹5 tax
        assert_eq!(context.total_revenue, Money::from_paise(24_000 + 1_200 + 10_000 + 500));
        assert_eq!(context.gst_liability, Money::from_paise(1_700));
        assert_eq!(context.product_count, 2);
        assert_eq!(context.low_stock_names, vec!["Sugar".to_string()]);
        assert_eq!(context.location_names, vec!["City Center Store".to_string()]);
        assert_eq!(context.customer_count, 1);
        assert_eq!(context.top_seller.as_deref(), Some("Basmati Rice"));
    }

    #[test]
    fn test_snapshot_with_no_sales() {
        let (products, _, locations, customers) = fixture();
        let context = BusinessContext::from_snapshot(&products, &[], &locations, &customers);
        assert!(context.total_revenue.is_zero());
        assert!(context.gst_liability.is_zero());
        assert_eq!(context.top_seller, None);
    }

    #[test]
    fn test_top_seller_tie_breaks_alphabetically() {
        let sales = vec![
            sale("INV-1", vec![line("Jaggery", 100, 1, 0)]),
            sale("INV-2", vec![line("Atta", 100, 1, 0)]),
        ];
        assert_eq!(top_seller(&sales).as_deref(), Some("Atta"));
    }

    #[test]
    fn test_render_reads_like_a_briefing() {
        let (products, sales, locations, customers) = fixture();
        let context = BusinessContext::from_snapshot(&products, &sales, &locations, &customers);
        let block = context.render();

        assert!(block.contains("Total Revenue: ₹357.00, Total Products: 2, Low Stock: 1 items."));
        assert!(block.contains("GST Liability: ₹17.00."));
        assert!(block.contains("Active Locations: City Center Store."));
        assert!(block.contains("Customers on Record: 1."));
        assert!(block.contains("Top Seller: Basmati Rice."));
    }

    #[test]
    fn test_render_omits_top_seller_without_sales() {
        let (products, _, locations, customers) = fixture();
        let context = BusinessContext::from_snapshot(&products, &[], &locations, &customers);
        assert!(!context.render().contains("Top Seller"));
    }

    #[test]
    fn test_chat_prompt_layout() {
        let (products, sales, locations, customers) = fixture();
        let context = BusinessContext::from_snapshot(&products, &sales, &locations, &customers);
        let prompt = chat_prompt("How is rice selling?", &context, ResponseTone::Casual);

        assert!(prompt.starts_with(
            "You are the AI Assistant for 'Hanuman Trader', an inventory management system."
        ));
        assert!(prompt.contains("Tone: Casual"));
        assert!(prompt.contains("Context Data (Current System State):"));
        assert!(prompt.contains("Total Revenue: ₹357.00"));
        assert!(prompt.contains("User Query:\nHow is rice selling?"));
        assert!(prompt.contains("If they ask about GST"));
    }

    #[test]
    fn test_tone_names() {
        assert_eq!(ResponseTone::default().to_string(), "Professional");
        assert_eq!(ResponseTone::Concise.to_string(), "Concise");
        assert_eq!(ResponseTone::Detailed.to_string(), "Detailed");
    }

    #[test]
    fn test_trends_prompt_includes_metrics_and_scenarios() {
        let (products, sales, _, _) = fixture();
        let metrics = reports::business_metrics(&sales, &products);
        let prompt = trends_prompt(
            &metrics,
            &["Basmati Rice".to_string()],
            &["Sugar".to_string()],
            &["monsoon delays".to_string(), "festival rush".to_string()],
        );

        assert!(prompt.starts_with("Analyze the following business metrics for 'Hanuman Trader':"));
        assert!(prompt.contains("Total Revenue: ₹357.00"));
        assert!(prompt.contains("Top Sellers: Basmati Rice"));
        assert!(prompt.contains("Slow Movers: Sugar"));
        assert!(prompt.contains(
            "Consider these hypothetical scenarios: monsoon delays, festival rush."
        ));
        assert!(prompt.ends_with("Keep it concise, actionable, and tailored for an MSME owner."));
    }

    #[test]
    fn test_trends_prompt_without_scenarios() {
        let (products, sales, _, _) = fixture();
        let metrics = reports::business_metrics(&sales, &products);
        let prompt = trends_prompt(&metrics, &[], &[], &[]);

        assert!(!prompt.contains("hypothetical scenarios"));
        assert!(prompt.contains("Top Sellers: None"));
        assert!(prompt.contains("Slow Movers: None"));
    }
}
