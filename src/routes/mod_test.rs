use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).expect("request")
}

fn site_with_bundle(css: &str) -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let pkg = dir.path().join("pkg");
    std::fs::create_dir_all(&pkg).expect("create pkg dir");
    std::fs::write(pkg.join("monitorai.css"), css).expect("write bundle css");

    let site_root = dir.path().to_string_lossy().into_owned();
    let options = LeptosOptions::builder().output_name("monitorai").site_root(site_root).build();
    (dir, site_routes(options))
}

// =============================================================
// base_routes
// =============================================================

#[tokio::test]
async fn healthz_answers_ok() {
    let response = base_routes().oneshot(get("/healthz")).await.expect("healthz response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_base_route_is_not_found() {
    let response = base_routes().oneshot(get("/nope")).await.expect("fallback response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================
// site_routes
// =============================================================

#[tokio::test]
async fn pkg_mount_serves_bundle_files() {
    let (_dir, app) = site_with_bundle("body { color: red; }");

    let response = app.oneshot(get("/pkg/monitorai.css")).await.expect("pkg response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    assert_eq!(&body[..], b"body { color: red; }");
}

#[tokio::test]
async fn pkg_mount_misses_are_not_found() {
    let (_dir, app) = site_with_bundle("");

    let response = app.oneshot(get("/pkg/missing.wasm")).await.expect("pkg response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn site_router_keeps_healthz() {
    let (_dir, app) = site_with_bundle("");

    let response = app.oneshot(get("/healthz")).await.expect("healthz response");
    assert_eq!(response.status(), StatusCode::OK);
}
