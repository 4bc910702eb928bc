//! # Money
//!
//! Prices and totals as integer cents. Floating point never touches cart
//! math: `0.1 + 0.2` is not `0.3`, but `10 + 20` is always `30`. Decimal
//! catalog prices are rounded to cents once, on the way in.
//!
//! ```text
//! CatalogItem.price_cents ──► Money ──► × quantity ──► Σ lines ──► subtotal
//! ```
//!
//! Arithmetic saturates at `i64::MAX`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use ts_rs::TS;

/// An amount in cents. Currency is a display concern of the app.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Converts a decimal amount in major units (`12.5` → 1250 cents),
    /// rounding to the nearest cent. Only used at the catalog boundary.
    pub fn from_major(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }
}

/// `12.50`, `-0.05`. No currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

/// Unit price times quantity.
impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}
