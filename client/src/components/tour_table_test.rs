use super::*;

#[test]
fn location_label_joins_name_and_country() {
    let location = Location { name: "Sevilla".to_owned(), country: "España".to_owned() };
    assert_eq!(location_label(&location), "Sevilla, España");
}

#[test]
fn location_label_skips_blank_parts() {
    let location = Location { name: "  ".to_owned(), country: "Italia".to_owned() };
    assert_eq!(location_label(&location), "Italia");
    assert_eq!(location_label(&Location::default()), "");
}

#[test]
fn edit_href_points_at_editor_route() {
    assert_eq!(edit_href("abc"), "/dashboard/tours/abc");
}
