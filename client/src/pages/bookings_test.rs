use super::*;

fn booking(id: &str, tour_id: &str) -> Booking {
    Booking { id: id.to_owned(), tour_id: tour_id.to_owned(), ..Booking::default() }
}

#[test]
fn provider_bookings_keeps_own_tours_only() {
    let items = vec![booking("b1", "t1"), booking("b2", "t2"), booking("b3", "t1")];
    let kept = provider_bookings(items, &["t1".to_owned()]);
    let ids: Vec<_> = kept.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["b1", "b3"]);
}

#[test]
fn provider_bookings_without_tour_list_keeps_all() {
    let items = vec![booking("b1", "t1"), booking("b2", "t2")];
    assert_eq!(provider_bookings(items, &[]).len(), 2);
}
