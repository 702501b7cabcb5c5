use super::*;
use crate::net::testing::client_answering;
use crate::net::transport::Method;
use crate::net::types::BookingStatus;

const BOOKING: &str = r#"{
    "_id": "b1",
    "tourId": "t1",
    "userId": "u1",
    "date": "2026-11-02",
    "hour": "10:00",
    "status": "confirmado",
    "numberOfPeople": 3,
    "totalPrice": 75.5
}"#;

#[tokio::test]
async fn create_booking_posts_camel_case_body() {
    let (client, transport) = client_answering(201, BOOKING);
    let request = BookingRequest {
        tour_id: "t1".to_owned(),
        user_id: "u1".to_owned(),
        date: "2026-11-02".to_owned(),
        hour: "10:00".to_owned(),
        number_of_people: 3,
    };

    let booking = create_booking(&client, &request).await.unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.number_of_people, 3);

    let body = transport.last().body.unwrap();
    assert!(body.contains(r#""tourId":"t1""#));
    assert!(body.contains(r#""numberOfPeople":3"#));
}

#[tokio::test]
async fn lookups_hit_expected_paths() {
    let (client, transport) = client_answering(200, "[]");
    bookings_by_user(&client, "u1").await.unwrap();
    assert_eq!(transport.last().url, "http://api.test/bookings/user/u1");

    let (client, transport) = client_answering(200, "[]");
    bookings_by_tour(&client, "t1").await.unwrap();
    assert_eq!(transport.last().url, "http://api.test/bookings/tour/t1");

    let (client, transport) = client_answering(200, BOOKING);
    let booking = get_booking(&client, "b1").await.unwrap();
    assert_eq!(booking.id, "b1");
    assert_eq!(transport.last().url, "http://api.test/bookings/b1");

    let (client, transport) = client_answering(200, &format!("[{BOOKING}]"));
    assert_eq!(list_bookings(&client).await.unwrap().len(), 1);
    assert_eq!(transport.last().url, "http://api.test/bookings");
}

#[tokio::test]
async fn update_booking_sends_only_set_fields() {
    let (client, transport) = client_answering(200, BOOKING);
    let patch = BookingPatch { status: Some(BookingStatus::Confirmed), ..BookingPatch::default() };

    update_booking(&client, "b1", &patch).await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::Patch);
    assert_eq!(sent.body.as_deref(), Some(r#"{"status":"confirmado"}"#));
}

#[tokio::test]
async fn cancel_booking_is_delete() {
    let (client, transport) = client_answering(200, "");

    cancel_booking(&client, "b1").await.unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, "http://api.test/bookings/b1");
}
