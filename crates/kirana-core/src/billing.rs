//! # Billing Module: Cart and Bill Totals
//!
//! ## Billing Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Billing Pipeline                             │
//! │                                                                     │
//! │   Product ──snapshot──► CartLine ──edit──► Cart ──totals──► Bill    │
//! │                            │                 │                      │
//! │                     qty / line disc    bill discount                │
//! │                            │                 │                      │
//! │                            ▼                 ▼                      │
//! │                      typed errors      BillTotals ──pay──► Sale     │
//! │                      (cashier UI)                   (frozen)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals Math (the order matters!)
//!
//! 1. Per line: `taxable = price × qty − line discount`
//! 2. Per line: `tax = taxable × GST rate` (rounded half-up)
//! 3. `raw subtotal = Σ taxable`, `raw tax = Σ line tax`
//! 4. `bill discount = raw subtotal × bill %` (rounded half-up)
//! 5. `subtotal = raw subtotal − bill discount`
//! 6. `tax = raw tax × (100% − bill %)`: the already-rounded tax is
//!    **scaled**, never recomputed from the discounted base
//! 7. `total = subtotal + tax`
//!
//! Step 6 is a compatibility invariant: historical bills were issued with
//! scaled tax, and the GST report reads frozen sale fields. Changing it
//! would make old and new invoices irreconcilable.
//!
//! ## Worked Example
//!
//! Two units at ₹100, 10% GST, 10% bill discount:
//!
//! | Step          | Paise  |           |
//! |---------------|--------|-----------|
//! | raw subtotal  | 20,000 | ₹200.00   |
//! | raw tax       |  2,000 | ₹20.00    |
//! | bill discount |  2,000 | ₹20.00    |
//! | subtotal      | 18,000 | ₹180.00   |
//! | tax (scaled)  |  1,800 | ₹18.00    |
//! | **total**     | 19,800 | ₹198.00   |

use crate::error::{CoreError, CoreResult};
use crate::money::{Money, Percent};
use crate::types::{CartLine, Customer, PaymentMethod, Product, Sale};
use crate::validation::{validate_discount_bps, validate_quantity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Name stamped on sales with no registered customer.
pub const WALK_IN_CUSTOMER_NAME: &str = "Walk-in";

// =============================================================================
// Cart
// =============================================================================

/// An in-progress bill at the counter.
///
/// The cart owns the only mutable path into a [`Sale`]: lines are stock-
/// checked snapshots, edits return typed errors, and [`Cart::finalize`]
/// freezes the totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    bill_discount_bps: u32,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// The lines currently on the bill.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// True when nothing is on the bill.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The bill-level discount currently applied.
    pub fn bill_discount(&self) -> Percent {
        Percent::from_bps(self.bill_discount_bps)
    }

    /// Adds a product at the given location, merging into an existing line.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] when `quantity < 1`
    /// - [`CoreError::OutOfStock`] when the location holds zero units
    /// - [`CoreError::InsufficientStock`] when the merged quantity would
    ///   exceed what the location holds
    pub fn add_product(
        &mut self,
        product: &Product,
        location_id: &str,
        quantity: i64,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;
        let available = product.stock_at(location_id);
        if available <= 0 {
            return Err(CoreError::OutOfStock { name: product.name.clone() });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            let requested = line.quantity + quantity;
            if requested > available {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available,
                    requested,
                });
            }
            line.quantity = requested;
        } else {
            if quantity > available {
                return Err(CoreError::InsufficientStock {
                    name: product.name.clone(),
                    available,
                    requested: quantity,
                });
            }
            self.lines.push(CartLine::snapshot(product, quantity));
        }
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// `available` is the stock at the selling location; callers look it
    /// up so the cart never needs the catalog.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] when `quantity < 1`
    /// - [`CoreError::LineNotFound`] when the product has no line
    /// - [`CoreError::InsufficientStock`] when `quantity > available`
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        available: i64,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| CoreError::LineNotFound { product_id: product_id.to_string() })?;
        if quantity > available {
            return Err(CoreError::InsufficientStock {
                name: line.name.clone(),
                available,
                requested: quantity,
            });
        }
        line.quantity = quantity;
        Ok(())
    }

    /// Sets the line-level discount for one product.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] when the rate exceeds 100%
    /// - [`CoreError::LineNotFound`] when the product has no line
    pub fn set_line_discount(&mut self, product_id: &str, discount_bps: u32) -> CoreResult<()> {
        validate_discount_bps(discount_bps)?;
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| CoreError::LineNotFound { product_id: product_id.to_string() })?;
        line.discount_bps = discount_bps;
        Ok(())
    }

    /// Sets the bill-level discount.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Validation`] when the rate exceeds 100%
    pub fn set_bill_discount(&mut self, discount_bps: u32) -> CoreResult<()> {
        validate_discount_bps(discount_bps)?;
        self.bill_discount_bps = discount_bps;
        Ok(())
    }

    /// Removes a line from the bill.
    ///
    /// # Errors
    ///
    /// - [`CoreError::LineNotFound`] when the product has no line
    pub fn remove_line(&mut self, product_id: &str) -> CoreResult<()> {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() == before {
            return Err(CoreError::LineNotFound { product_id: product_id.to_string() });
        }
        Ok(())
    }

    /// Empties the cart and resets the bill discount.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.bill_discount_bps = 0;
    }

    /// Computes the current bill totals.
    pub fn totals(&self) -> BillTotals {
        BillTotals::from(self)
    }

    /// Freezes the cart into a [`Sale`] and empties it.
    ///
    /// The sale carries the totals as computed here; reports read those
    /// frozen fields forever after. With no customer the sale is stamped
    /// [`WALK_IN_CUSTOMER_NAME`].
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyCart`] when nothing is on the bill
    pub fn finalize(
        &mut self,
        date: NaiveDate,
        location_id: &str,
        payment_method: PaymentMethod,
        customer: Option<&Customer>,
    ) -> CoreResult<Sale> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let totals = self.totals();
        let bill_discount_bps = self.bill_discount_bps;

        let sale = Sale {
            id: invoice_number(),
            date,
            items: std::mem::take(&mut self.lines),
            subtotal_paise: totals.subtotal_paise,
            tax_paise: totals.tax_paise,
            total_paise: totals.total_paise,
            bill_discount_bps,
            customer_id: customer.map(|c| c.id.clone()),
            customer_name: Some(
                customer
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| WALK_IN_CUSTOMER_NAME.to_string()),
            ),
            location_id: location_id.to_string(),
            payment_method,
            transaction_id: transaction_number(),
        };
        self.bill_discount_bps = 0;
        Ok(sale)
    }
}

// =============================================================================
// Bill Totals
// =============================================================================

/// Computed totals for a cart, all in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillTotals {
    /// Number of distinct lines.
    pub item_count: usize,
    /// Total units across all lines.
    pub total_quantity: i64,
    /// Σ taxable line values, before the bill discount.
    pub raw_subtotal_paise: i64,
    /// Rupee value of the bill discount.
    pub bill_discount_paise: i64,
    /// Subtotal after the bill discount.
    pub subtotal_paise: i64,
    /// Final GST after scaling by the bill discount.
    pub tax_paise: i64,
    /// What the customer pays.
    pub total_paise: i64,
}

impl BillTotals {
    /// Pre-discount subtotal as typed [`Money`].
    pub fn raw_subtotal(&self) -> Money {
        Money::from_paise(self.raw_subtotal_paise)
    }

    /// Bill discount value as typed [`Money`].
    pub fn bill_discount(&self) -> Money {
        Money::from_paise(self.bill_discount_paise)
    }

    /// Final subtotal as typed [`Money`].
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
}

impl From<&Cart> for BillTotals {
    fn from(cart: &Cart) -> Self {
        let mut raw_subtotal = Money::ZERO;
        let mut raw_tax = Money::ZERO;
        for line in &cart.lines {
            raw_subtotal += line.taxable_value();
            raw_tax += line.tax_amount();
        }

        let discount = cart.bill_discount();
        let bill_discount = raw_subtotal.percent_of(discount);
        let subtotal = raw_subtotal - bill_discount;
        let tax = raw_tax.percent_of(discount.complement());
        let total = subtotal + tax;

        BillTotals {
            item_count: cart.lines.len(),
            total_quantity: cart.total_quantity(),
            raw_subtotal_paise: raw_subtotal.paise(),
            bill_discount_paise: bill_discount.paise(),
            subtotal_paise: subtotal.paise(),
            tax_paise: tax.paise(),
            total_paise: total.paise(),
        }
    }
}

// =============================================================================
// Document Numbers
// =============================================================================

fn invoice_number() -> String {
    format!("INV-{}", document_fragment())
}

fn transaction_number() -> String {
    format!("TXN-{}", document_fragment())
}

/// 12 hex chars from a fresh v4 UUID, uppercased for receipts.
fn document_fragment() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..12].to_uppercase()
}

// =============================================================================
// Tests
// =============================================================================
