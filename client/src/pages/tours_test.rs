use super::*;

#[test]
fn provider_filters_scope_to_provider() {
    let filters = provider_filters(Some("p1"));
    assert_eq!(filters.provider_id.as_deref(), Some("p1"));
    assert_eq!(filters.limit, "100");
}

#[test]
fn provider_filters_without_provider_still_raise_limit() {
    let filters = provider_filters(None);
    assert!(filters.provider_id.is_none());
    assert_eq!(filters.limit, "100");
}
