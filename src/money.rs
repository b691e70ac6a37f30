//! Money rendering and the free-shipping progress bar.
//!
//! Platform amounts are integer cents. Display format is the shop's euro
//! convention: comma decimal separator, trailing currency symbol.

/// Cart total at which shipping becomes free, in cents.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 4900;

/// Render cents as the shop's euro format, e.g. `4999` → `"49,99 €"`.
#[must_use]
pub fn format_eur(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{sign}{},{:02} €", cents / 100, cents % 100)
}

/// State of the free-shipping progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShippingProgress {
    /// Fill percentage, capped at 100.
    pub percent: f64,
    /// Cents still missing; 0 once the threshold is reached.
    pub remaining_cents: i64,
}

impl ShippingProgress {
    /// Whether the cart has earned free shipping.
    #[must_use]
    pub fn unlocked(&self) -> bool {
        self.remaining_cents == 0
    }
}

/// Progress toward free shipping for a cart totaling `total_cents`.
#[must_use]
pub fn shipping_progress(total_cents: i64) -> ShippingProgress {
    let ratio = total_cents as f64 / FREE_SHIPPING_THRESHOLD_CENTS as f64;
    ShippingProgress {
        percent: (ratio * 100.0).clamp(0.0, 100.0),
        remaining_cents: (FREE_SHIPPING_THRESHOLD_CENTS - total_cents).max(0),
    }
}

#[cfg(test)]
#[path = "money_test.rs"]
mod tests;
