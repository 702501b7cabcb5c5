use super::*;
use crate::net::testing::{ScriptedTransport, client_answering, signed_in_client};
use crate::util::storage::MemoryStorage;

fn mock_config() -> ClientConfig {
    ClientConfig { mock_mode: true, ..ClientConfig::default() }
}

#[tokio::test]
async fn mock_mode_never_touches_network() {
    let transport = Arc::new(ScriptedTransport::new(Vec::new()));
    let (api, _) = signed_in_client(transport.clone());
    let source = TourSource::from_config(&mock_config(), api, Arc::new(MemoryStorage::new()));
    assert!(source.is_local());

    let created = source.create(&TourDraft { title: "Walk".to_owned(), ..TourDraft::default() }).await.unwrap();
    assert_eq!(source.get(&created.id).await.unwrap().title, "Walk");
    source.delete(&created.id).await.unwrap();
    assert_eq!(source.get(&created.id).await.unwrap_err().status(), Some(404));
    assert_eq!(source.list(&TourFilters::default()).await.unwrap().len(), 2);

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn remote_mode_goes_through_api() {
    let (api, transport) = client_answering(200, r#"[{"id":"t1"}]"#);
    let source = TourSource::from_config(&ClientConfig::default(), api, Arc::new(MemoryStorage::new()));
    assert!(!source.is_local());

    let tours = source.list(&TourFilters::for_provider("p1", 20)).await.unwrap();
    assert_eq!(tours.len(), 1);
    assert_eq!(transport.last().url, "http://api.test/tours");
}

#[tokio::test]
async fn remote_update_carries_provider() {
    let (api, transport) = client_answering(200, r#"{"id":"t1"}"#);
    let source = TourSource::Remote(api);

    source.update("t1", Some("p9"), &TourDraft::default()).await.unwrap();
    assert!(transport.last().body.unwrap().contains(r#""providerId":"p9""#));
}
