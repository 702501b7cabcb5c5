use super::*;

#[test]
fn new_is_the_only_create_id() {
    assert!(is_new_tour("new"));
    assert!(!is_new_tour("New"));
    assert!(!is_new_tour("t1"));
    assert!(!is_new_tour(""));
}
