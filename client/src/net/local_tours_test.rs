use super::*;
use crate::util::storage::MemoryStorage;

fn local() -> (Arc<MemoryStorage>, LocalTours) {
    let backing = Arc::new(MemoryStorage::new());
    (backing.clone(), LocalTours::new(backing))
}

fn draft(title: &str) -> TourDraft {
    TourDraft {
        title: title.to_owned(),
        category: "historia".to_owned(),
        stops: vec![Stop { stop_name: "Plaza".to_owned(), ..Stop::default() }],
        images: vec![TourImage { id: None, image_url: "https://img.test/1.png".to_owned() }],
        provider_id: Some("p1".to_owned()),
        ..TourDraft::default()
    }
}

// =============================================================
// Reads
// =============================================================

#[test]
fn empty_store_lists_seed_tours() {
    let (backing, tours) = local();
    assert_eq!(tours.list(), seed_tours());
    assert!(backing.is_empty());
}

#[test]
fn get_unknown_id_is_not_found() {
    let (_, tours) = local();
    assert_eq!(tours.get("nope").unwrap_err().status(), Some(404));
    assert_eq!(tours.get("2").unwrap().title, "Tour por el Casco Antiguo");
}

#[test]
fn unreadable_cache_falls_back_to_seed() {
    let (backing, tours) = local();
    backing.set(TOURS_KEY, "{broken");
    assert_eq!(tours.list().len(), 2);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn create_assigns_uuid_and_resets_rating() {
    let (backing, tours) = local();

    let created = tours.create(&draft("Walk"));
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created.rating, 0.0);
    assert!(created.reviews.is_empty());
    assert_eq!(created.stops.len(), 1);
    assert_eq!(created.images.len(), 1);
    assert_eq!(created.provider.as_ref().map(ProviderRef::id), Some("p1"));

    assert!(backing.get(TOURS_KEY).is_some());
    assert_eq!(tours.list().len(), 3);
    assert_eq!(tours.get(&created.id).unwrap(), created);
}

#[test]
fn update_keeps_identity_rating_and_reviews() {
    let (_, tours) = local();

    let updated = tours.update("1", &draft("Renamed")).unwrap();
    assert_eq!(updated.id, "1");
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.rating, 4.5);
    assert_eq!(updated.reviews.len(), 1);
    assert_eq!(updated.provider.as_ref().map(ProviderRef::id), Some("1"));
    assert_eq!(tours.get("1").unwrap().title, "Renamed");
}

#[test]
fn update_unknown_id_is_not_found() {
    let (backing, tours) = local();
    assert!(tours.update("missing", &draft("x")).is_err());
    assert!(backing.is_empty());
}

#[test]
fn delete_removes_tour_and_persists() {
    let (_, tours) = local();
    tours.delete("1");

    let remaining = tours.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "2");
}

#[test]
fn delete_last_tour_leaves_empty_list_not_seed() {
    let (_, tours) = local();
    tours.delete("1");
    tours.delete("2");
    assert!(tours.list().is_empty());
}
