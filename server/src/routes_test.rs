use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Fresh site root with one built asset.
fn site_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("tourdesk-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::write(root.join("pkg").join("tourdesk.css"), "body { margin: 0; }").unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let root = site_root("healthz");
    let resp = service_routes(&root).oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_built_assets() {
    let root = site_root("pkg");
    let resp = service_routes(&root).oneshot(get_request("/pkg/tourdesk.css")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("content-type").and_then(|v| v.to_str().ok()).unwrap_or_default();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn pkg_missing_asset_is_not_found() {
    let root = site_root("missing");
    let resp = service_routes(&root).oneshot(get_request("/pkg/tourdesk.wasm")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
