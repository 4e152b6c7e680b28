//! # Money Module: Integer Rupee Arithmetic
//!
//! ## CRITICAL: Why Integer Paise?
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  NEVER USE FLOATING POINT FOR MONEY!                            │
//! │                                                                 │
//! │  Floating point: 0.1 + 0.2 = 0.30000000000000004  ❌           │
//! │  Integer paise:  10 + 20 = 30                      ✅           │
//! │                                                                 │
//! │  A kirana bill that is off by one paisa is a customer dispute  │
//! │  and a GST filing that does not reconcile.                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units
//!
//! | Concept      | Type      | Unit          | Example                |
//! |--------------|-----------|---------------|------------------------|
//! | Amounts      | [`Money`]   | paise (i64)   | ₹120.00 = 12000 paise  |
//! | Rates        | [`Percent`] | basis points  | 5% = 500 bps           |
//! |              |           | (u32)         | 18% = 1800 bps         |
//! |              |           |               | 0.25% = 25 bps         |
//!
//! ## Rounding Rule
//!
//! Every percentage application rounds **half-up** to the nearest paisa,
//! widening through i128 so intermediate products cannot overflow:
//!
//! ```text
//! result = (amount × bps + 5000) / 10000
//! ```
//!
//! This single rule is shared by GST, line discounts and bill discounts so
//! printed bills always reconcile with the GST report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

/// Basis points per whole unit (100%).
const BPS_SCALE: i128 = 10_000;

/// Half of [`BPS_SCALE`], added before dividing to get half-up rounding.
const BPS_HALF: i128 = 5_000;

// =============================================================================
// Money
// =============================================================================

/// Monetary amount in paise (1/100 of a rupee).
///
/// Wraps `i64` so amounts cannot be accidentally mixed with bare quantities
/// or basis points. Negative values are legal (refunds, adjustments).
///
/// # Examples
///
/// ```rust
/// use kirana_core::money::Money;
///
/// let price = Money::from_rupees(249);
/// assert_eq!(price.paise(), 24_900);
/// assert_eq!(price.to_string(), "₹249.00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Zero rupees.
    pub const ZERO: Money = Money(0);

    /// Creates a `Money` from a raw paise count.
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a `Money` from whole rupees.
    ///
    /// ```rust
    /// use kirana_core::money::Money;
    /// assert_eq!(Money::from_rupees(120).paise(), 12_000);
    /// ```
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Creates a `Money` from separate rupee and paise parts.
    ///
    /// ```rust
    /// use kirana_core::money::Money;
    /// assert_eq!(Money::from_rupees_paise(45, 50).paise(), 4_550);
    /// ```
    pub const fn from_rupees_paise(rupees: i64, paise: i64) -> Self {
        Money(rupees * 100 + paise)
    }

    /// The raw paise count.
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Whole-rupee part (truncated toward zero).
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Paise part after the decimal point (always 0..=99).
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// True if the amount is exactly zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True if the amount is strictly positive.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// True if the amount is strictly negative.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    pub const fn abs(&self) -> Money {
        Money(self.0.abs())
    }

    /// Takes a percentage of this amount, rounding half-up to the paisa.
    ///
    /// This is the one rounding point shared by tax and discount math.
    /// Widens through `i128` so `amount × bps` cannot overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kirana_core::money::{Money, Percent};
    ///
    /// // 18% GST on ₹200.00
    /// let tax = Money::from_rupees(200).percent_of(Percent::from_bps(1800));
    /// assert_eq!(tax.paise(), 3_600); // ₹36.00
    ///
    /// // Half-up: 5% of ₹0.50 = 2.5 paise, rounds to 3
    /// let t = Money::from_paise(50).percent_of(Percent::from_bps(500));
    /// assert_eq!(t.paise(), 3);
    /// ```
    pub fn percent_of(&self, rate: Percent) -> Money {
        let paise = (self.0 as i128 * rate.bps() as i128 + BPS_HALF) / BPS_SCALE;
        Money(paise as i64)
    }

    /// Subtracts a percentage from this amount.
    ///
    /// The discount amount itself is rounded half-up first, then subtracted,
    /// so `discounted + percent_of` always reproduces the original.
    ///
    /// ```rust
    /// use kirana_core::money::{Money, Percent};
    ///
    /// let line = Money::from_rupees(200);
    /// let after = line.less_percent(Percent::from_bps(1000)); // 10% off
    /// assert_eq!(after.paise(), 18_000); // ₹180.00
    /// ```
    pub fn less_percent(&self, rate: Percent) -> Money {
        *self - self.percent_of(rate)
    }
}

// =============================================================================
// Money: Arithmetic Operators
// =============================================================================

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

/// Multiply by a quantity (e.g. unit price × units).
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, qty: i64) -> Money {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

/// Formats as rupees with the ₹ sign: `₹120.00`, `-₹5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

// =============================================================================
// Percent
// =============================================================================

/// A percentage in basis points (1% = 100 bps, 100% = 10,000 bps).
///
/// Used for GST rates and discounts. Basis points keep fractional rates
/// like 0.25% exact where an f64 percentage would not be.
///
/// # Examples
///
/// ```rust
/// use kirana_core::money::Percent;
///
/// let gst = Percent::from_bps(1800);
/// assert_eq!(gst.percentage(), 18.0);
/// assert_eq!(gst.to_string(), "18%");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// 0%.
    pub const ZERO: Percent = Percent(0);

    /// 100%.
    pub const FULL: Percent = Percent(10_000);

    /// Creates a `Percent` from basis points.
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a `Percent` from a whole-number percentage.
    ///
    /// ```rust
    /// use kirana_core::money::Percent;
    /// assert_eq!(Percent::from_percentage(5).bps(), 500);
    /// ```
    pub const fn from_percentage(pct: u32) -> Self {
        Percent(pct * 100)
    }

    /// The raw basis-point count.
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as a float percentage, for display only.
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// True if the rate is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The remainder up to 100%, saturating at zero.
    ///
    /// A 10% bill discount leaves 90% of the tax standing:
    ///
    /// ```rust
    /// use kirana_core::money::Percent;
    /// assert_eq!(Percent::from_bps(1000).complement().bps(), 9_000);
    /// assert_eq!(Percent::from_bps(12_000).complement().bps(), 0);
    /// ```
    pub const fn complement(&self) -> Percent {
        Percent(Percent::FULL.0.saturating_sub(self.0))
    }
}

/// Formats as a percentage: `18%`, `0.25%`.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}%", self.percentage())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
