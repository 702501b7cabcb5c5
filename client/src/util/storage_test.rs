use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());

    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);

    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn load_json_discards_garbage() {
    let store = MemoryStorage::new();
    store.set("n", "not json");
    assert_eq!(load_json::<u32>(&store, "n"), None);
}

#[test]
fn save_then_load_json() {
    let store = MemoryStorage::new();
    save_json(&store, "list", &vec!["a", "b"]);
    assert_eq!(load_json::<Vec<String>>(&store, "list"), Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
}
