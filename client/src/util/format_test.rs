use super::*;
use crate::net::types::Discount;

fn discount(kind: DiscountKind, amount: f64) -> Option<Discount> {
    Some(Discount { kind, amount, description: String::new(), valid_from: String::new(), valid_to: String::new() })
}

#[test]
fn price_shows_two_decimals() {
    let price = Price { value: 29.9, based_on_tips: false, discount: None };
    assert_eq!(format_price(&price), "€29.90");
}

#[test]
fn tips_based_price_hides_amount() {
    let price = Price { value: 10.0, based_on_tips: true, discount: None };
    assert_eq!(format_price(&price), "Tips based");
}

#[test]
fn discount_badge_by_kind() {
    let pct = Price { discount: discount(DiscountKind::Percentage, 15.0), ..Price::default() };
    let fixed = Price { discount: discount(DiscountKind::Fixed, 5.0), ..Price::default() };
    assert_eq!(format_discount(&pct).as_deref(), Some("-15%"));
    assert_eq!(format_discount(&fixed).as_deref(), Some("-€5.00"));
    assert_eq!(format_discount(&Price::default()), None);
}

#[test]
fn rating_dash_when_unrated() {
    assert_eq!(format_rating(4.76), "4.8");
    assert_eq!(format_rating(0.0), "–");
}
