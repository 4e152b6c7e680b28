//! # Demo Dataset
//!
//! A small but realistic kirana shop: one warehouse feeding two retail
//! branches, seven products across the staple categories, the standard
//! GST slabs, and a handful of regulars. Dates are generated relative
//! to the current day so the dashboard edges (a soon-to-expire dairy
//! item, a seasonal product that stopped moving) stay demonstrable on
//! any day the demo runs.
//!
//! Seeding assigns collections directly instead of going through the
//! store mutators, so a freshly seeded store has exactly one feed
//! entry: "System Initialized".

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate};
use kirana_core::types::{
    BusinessGoal, Customer, GoalStatus, Location, LocationKind, Product, ProductStatus,
    SalesTarget, Supplier, TaxCategory, TaxTier,
};

use crate::store::Store;

/// Builds the demo shop, dated relative to today.
pub fn demo_store() -> Store {
    let today = Local::now().date_naive();
    let mut store = Store::new(locations());
    store.products = products(today);
    store.customers = customers();
    store.suppliers = suppliers(today);
    store.tax_tiers = tax_tiers();
    store.sales_targets = sales_targets(today);
    store.goals = goals();
    store
}

fn locations() -> Vec<Location> {
    vec![
        location("loc-1", "Main Warehouse", "Industrial Area, Sector 4, New Delhi", LocationKind::Warehouse),
        location("loc-2", "City Center Store", "Market Road, Shop 12, Mumbai", LocationKind::Store),
        location("loc-3", "North Branch", "Highway 5, Exit 2, Chandigarh", LocationKind::Store),
    ]
}

fn location(id: &str, name: &str, address: &str, kind: LocationKind) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        kind,
    }
}

fn tax_tiers() -> Vec<TaxTier> {
    vec![
        tier("tax-0", "Exempt", TaxCategory::Essential, 0),
        tier("tax-5", "GST 5%", TaxCategory::Essential, 500),
        tier("tax-12", "GST 12%", TaxCategory::Standard, 1_200),
        tier("tax-18", "GST 18%", TaxCategory::Standard, 1_800),
        tier("tax-28", "GST 28%", TaxCategory::Luxury, 2_800),
    ]
}

fn tier(id: &str, name: &str, category: TaxCategory, rate_bps: u32) -> TaxTier {
    TaxTier {
        id: id.to_string(),
        name: name.to_string(),
        category: Some(category),
        rate_bps,
        cgst_bps: rate_bps / 2,
        sgst_bps: rate_bps / 2,
    }
}

fn suppliers(today: NaiveDate) -> Vec<Supplier> {
    vec![
        Supplier {
            id: "sup-1".to_string(),
            name: "AgroFields Ltd".to_string(),
            contact_person: "Vikram Singh".to_string(),
            phone: "9876543210".to_string(),
            email: "orders@agrofields.in".to_string(),
            address: "Punjab, India".to_string(),
            rating: 4.5,
            category: "Grains".to_string(),
            payment_terms: "Net 30".to_string(),
            last_supply_date: today - Duration::days(5),
        },
        Supplier {
            id: "sup-2".to_string(),
            name: "PurePress Oils".to_string(),
            contact_person: "Anita Desai".to_string(),
            phone: "9988776655".to_string(),
            email: "sales@purepress.com".to_string(),
            address: "Gujarat, India".to_string(),
            rating: 4.8,
            category: "Oils".to_string(),
            payment_terms: "Immediate".to_string(),
            last_supply_date: today - Duration::days(12),
        },
        Supplier {
            id: "sup-3".to_string(),
            name: "Golden Harvest".to_string(),
            contact_person: "Rahul Roy".to_string(),
            phone: "9123456789".to_string(),
            email: "rahul@goldenharvest.com".to_string(),
            address: "MP, India".to_string(),
            rating: 3.9,
            category: "Grains".to_string(),
            payment_terms: "Net 15".to_string(),
            last_supply_date: today - Duration::days(20),
        },
        Supplier {
            id: "sup-4".to_string(),
            name: "Dal Mills Corp".to_string(),
            contact_person: "Suresh Raina".to_string(),
            phone: "8899001122".to_string(),
            email: "supply@dalmills.com".to_string(),
            address: "Maharashtra, India".to_string(),
            rating: 4.2,
            category: "Pulses".to_string(),
            payment_terms: "Net 45".to_string(),
            last_supply_date: today - Duration::days(2),
        },
        Supplier {
            id: "sup-5".to_string(),
            name: "FreshDairy Co".to_string(),
            contact_person: "Amulya V".to_string(),
            phone: "7766554433".to_string(),
            email: "fresh@dairy.com".to_string(),
            address: "Haryana, India".to_string(),
            rating: 4.9,
            category: "Dairy".to_string(),
            payment_terms: "Net 7".to_string(),
            last_supply_date: today - Duration::days(1),
        },
        Supplier {
            id: "sup-6".to_string(),
            name: "SpiceWorld".to_string(),
            contact_person: "Karan Johar".to_string(),
            phone: "9988223344".to_string(),
            email: "trade@spiceworld.com".to_string(),
            address: "Kerala, India".to_string(),
            rating: 4.0,
            category: "Spices".to_string(),
            payment_terms: "Net 30".to_string(),
            last_supply_date: today - Duration::days(45),
        },
        Supplier {
            id: "sup-7".to_string(),
            name: "SweetCane Ltd".to_string(),
            contact_person: "Priya Mani".to_string(),
            phone: "8877665544".to_string(),
            email: "orders@sweetcane.com".to_string(),
            address: "UP, India".to_string(),
            rating: 3.5,
            category: "Pantry".to_string(),
            payment_terms: "Net 60".to_string(),
            last_supply_date: today - Duration::days(60),
        },
    ]
}

fn products(today: NaiveDate) -> Vec<Product> {
    let mut rice = product("prod-1", "Basmati Rice (Premium)", "GRN-RICE-001", "Grains");
    rice.price_paise = 12_000; // ₹120.00
    rice.cost_paise = 9_500;
    rice.hsn_code = "100630".to_string();
    rice.tax_rate_bps = 500;
    rice.stock = stock_map(&[("loc-1", 500), ("loc-2", 50), ("loc-3", 20)]);
    rice.min_stock_level = 100;
    rice.min_stock_overrides = stock_map(&[("loc-2", 30), ("loc-3", 15)]);
    rice.max_stock_level = Some(1_000);
    rice.lead_time_days = 7;
    rice.supplier = Some("AgroFields Ltd".to_string());
    rice.expiry_date = Some(today + Duration::days(365));
    rice.barcode = Some("8901234567890".to_string());
    rice.last_sale_date = Some(today - Duration::days(1));

    let mut oil = product("prod-2", "Sunflower Oil (1L)", "OIL-SUN-002", "Oils");
    oil.price_paise = 18_000;
    oil.cost_paise = 14_000;
    oil.hsn_code = "151211".to_string();
    oil.tax_rate_bps = 500;
    oil.stock = stock_map(&[("loc-1", 200), ("loc-2", 40), ("loc-3", 15)]);
    oil.min_stock_level = 50;
    oil.max_stock_level = Some(500);
    oil.lead_time_days = 14;
    oil.supplier = Some("PurePress Oils".to_string());
    oil.expiry_date = Some(today + Duration::days(180));
    oil.barcode = Some("8909876543210".to_string());
    oil.last_sale_date = Some(today - Duration::days(2));

    // GST-exempt staple; also the shortest shelf life in the grains aisle
    let mut atta = product("prod-3", "Wheat Flour (Atta 10kg)", "GRN-WHT-003", "Grains");
    atta.price_paise = 45_000;
    atta.cost_paise = 38_000;
    atta.hsn_code = "110100".to_string();
    atta.tax_rate_bps = 0;
    atta.stock = stock_map(&[("loc-1", 100), ("loc-2", 10), ("loc-3", 5)]);
    atta.min_stock_level = 30;
    atta.max_stock_level = Some(200);
    atta.lead_time_days = 5;
    atta.supplier = Some("Golden Harvest".to_string());
    atta.expiry_date = Some(today + Duration::days(20));
    atta.last_sale_date = Some(today - Duration::days(5));

    let mut dal = product("prod-4", "Masoor Dal (1kg)", "PLS-MAS-004", "Pulses");
    dal.price_paise = 9_000;
    dal.cost_paise = 6_500;
    dal.hsn_code = "071340".to_string();
    dal.tax_rate_bps = 500;
    dal.stock = stock_map(&[("loc-1", 300), ("loc-2", 80), ("loc-3", 60)]);
    dal.min_stock_level = 80;
    dal.max_stock_level = Some(400);
    dal.lead_time_days = 10;
    dal.supplier = Some("Dal Mills Corp".to_string());
    dal.expiry_date = Some(today + Duration::days(200));
    dal.last_sale_date = Some(today - Duration::days(10));

    // Expires within the week: keeps the expiry widget honest
    let mut milk = product("prod-5", "Milk (Tetra Pack 1L)", "DRY-MLK-005", "Dairy");
    milk.price_paise = 7_500;
    milk.cost_paise = 6_000;
    milk.hsn_code = "040120".to_string();
    milk.tax_rate_bps = 500;
    milk.stock = stock_map(&[("loc-1", 50), ("loc-2", 12), ("loc-3", 8)]);
    milk.min_stock_level = 40;
    milk.max_stock_level = Some(150);
    milk.lead_time_days = 3;
    milk.supplier = Some("FreshDairy Co".to_string());
    milk.expiry_date = Some(today + Duration::days(5));
    milk.last_sale_date = Some(today);

    let mut turmeric = product("prod-6", "Turmeric Powder (500g)", "SPC-TUR-006", "Spices");
    turmeric.price_paise = 15_000;
    turmeric.cost_paise = 11_000;
    turmeric.hsn_code = "091030".to_string();
    turmeric.tax_rate_bps = 500;
    turmeric.stock = stock_map(&[("loc-1", 400), ("loc-2", 100), ("loc-3", 50)]);
    turmeric.min_stock_level = 50;
    turmeric.max_stock_level = Some(600);
    turmeric.lead_time_days = 15;
    turmeric.supplier = Some("SpiceWorld".to_string());
    turmeric.expiry_date = Some(today + Duration::days(500));
    turmeric.last_sale_date = Some(today - Duration::days(15));

    // Seasonal, low everywhere, and not selling: the problem child
    let mut sugar = product("prod-7", "Sugar (5kg)", "PAN-SUG-007", "Pantry");
    sugar.price_paise = 22_000;
    sugar.cost_paise = 19_000;
    sugar.hsn_code = "170199".to_string();
    sugar.tax_rate_bps = 500;
    sugar.stock = stock_map(&[("loc-1", 10), ("loc-2", 5), ("loc-3", 0)]);
    sugar.min_stock_level = 50;
    sugar.max_stock_level = Some(300);
    sugar.lead_time_days = 7;
    sugar.supplier = Some("SweetCane Ltd".to_string());
    sugar.expiry_date = Some(today + Duration::days(700));
    sugar.status = ProductStatus::Seasonal;
    sugar.last_sale_date = Some(today - Duration::days(45));

    vec![rice, oil, atta, dal, milk, turmeric, sugar]
}

fn product(id: &str, name: &str, sku: &str, category: &str) -> Product {
    let mut p = Product::new(id, name, category);
    p.sku = Some(sku.to_string());
    p
}

fn stock_map(entries: &[(&str, i64)]) -> BTreeMap<String, i64> {
    entries
        .iter()
        .map(|(location_id, units)| (location_id.to_string(), *units))
        .collect()
}

fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust-1".to_string(),
            name: "Rajesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            email: Some("rajesh@example.com".to_string()),
            gst_number: Some("29ABCDE1234F1Z5".to_string()),
            address: Some("123, MG Road, Mumbai".to_string()),
            loyalty_points: 120,
            total_purchases_paise: 1_500_000, // ₹15,000
        },
        Customer {
            id: "cust-2".to_string(),
            name: "Priya Singh".to_string(),
            phone: "9988776655".to_string(),
            email: Some("priya@example.com".to_string()),
            gst_number: None,
            address: Some("45, Civil Lines, Delhi".to_string()),
            loyalty_points: 45,
            total_purchases_paise: 500_000,
        },
        Customer {
            id: "cust-3".to_string(),
            name: "Amitabh Bachchan".to_string(),
            phone: "9123456789".to_string(),
            email: Some("bigb@example.com".to_string()),
            gst_number: Some("27AAAAA0000A1Z5".to_string()),
            address: Some("Juhu, Mumbai".to_string()),
            loyalty_points: 300,
            total_purchases_paise: 4_500_000,
        },
        Customer {
            id: "cust-4".to_string(),
            name: "Deepika P".to_string(),
            phone: "9988001122".to_string(),
            email: Some("dp@example.com".to_string()),
            gst_number: None,
            address: Some("Bangalore".to_string()),
            loyalty_points: 10,
            total_purchases_paise: 120_000,
        },
    ]
}

fn sales_targets(today: NaiveDate) -> Vec<SalesTarget> {
    let this_month = today.format("%Y-%m").to_string();
    let last_month = (today - Duration::days(30)).format("%Y-%m").to_string();
    vec![
        target("tgt-1", "loc-2", &this_month, 6_000_000), // ₹60,000
        target("tgt-2", "loc-3", &this_month, 4_000_000),
        target("tgt-3", "loc-2", &last_month, 5_500_000),
        target("tgt-4", "loc-3", &last_month, 3_500_000),
    ]
}

fn target(id: &str, location_id: &str, month: &str, target_amount_paise: i64) -> SalesTarget {
    SalesTarget {
        id: id.to_string(),
        location_id: location_id.to_string(),
        month: month.to_string(),
        target_amount_paise,
    }
}

fn goals() -> Vec<BusinessGoal> {
    vec![
        BusinessGoal {
            id: "g1".to_string(),
            text: "Increase monthly revenue by 10%".to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 12, 31),
            status: GoalStatus::Pending,
        },
        BusinessGoal {
            id: "g2".to_string(),
            text: "Reduce dead stock by 50 units".to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 11, 15),
            status: GoalStatus::Pending,
        },
        BusinessGoal {
            id: "g3".to_string(),
            text: "Expand to new location in Pune".to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 8, 1),
            status: GoalStatus::Completed,
        },
    ]
}
