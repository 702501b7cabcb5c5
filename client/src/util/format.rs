//! Display formatting for tour and booking values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{DiscountKind, Price};

/// Price cell text: tips-based tours show no amount.
pub fn format_price(price: &Price) -> String {
    if price.based_on_tips {
        return "Tips based".to_owned();
    }
    format!("€{:.2}", price.value)
}

/// Short discount badge such as `-15%` or `-€5.00`.
pub fn format_discount(price: &Price) -> Option<String> {
    let discount = price.discount.as_ref()?;
    Some(match discount.kind {
        DiscountKind::Percentage => format!("-{}%", discount.amount),
        DiscountKind::Fixed => format!("-€{:.2}", discount.amount),
    })
}

/// One decimal, or a dash for unrated tours.
pub fn format_rating(rating: f64) -> String {
    if rating > 0.0 { format!("{rating:.1}") } else { "–".to_owned() }
}
