//! # Router Tests
//!
//! Exercise the HTTP surface through `tower::ServiceExt::oneshot` against a
//! static catalog.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use shelfrig::catalog::{CatalogItem, StaticGateway, Variation};
use shelfrig::server::{AppState, router};

fn app() -> axum::Router {
    let gateway = StaticGateway::new(vec![
        CatalogItem::new(
            "Milk",
            vec![
                Variation::new("1L", 250, "036000291452"),
                Variation::new("2L", 425, "036000291469"),
            ],
        ),
        CatalogItem::new("Eggs", vec![Variation::new("Dozen", 399, "12345678")]),
    ]);
    router(Arc::new(AppState::new(Arc::new(gateway))))
}

async fn call(router: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let resp = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, bytes.to_vec())
}

async fn api(router: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = call(router, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = api(&app(), "GET", "/api/test-server", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "Server is running" }));
}

#[tokio::test]
async fn test_product_search_proxy() {
    let (status, body) = api(&app(), "GET", "/api/products/search?q=milk", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Milk");
    assert_eq!(body[0]["variations"][1]["price"], 425);
}

#[tokio::test]
async fn test_toggle_and_layout() {
    let router = app();
    let milk = json!({
        "name": "Milk",
        "variations": [
            {"name": "1L", "price": 250, "barcode": "036000291452"},
            {"name": "2L", "price": 425, "barcode": "036000291469"}
        ]
    });

    let (status, body) = api(&router, "POST", "/api/session/toggle", Some(milk)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["label_count"], 2);
    assert_eq!(body["snapshot"]["remaining"], 30);

    let (status, body) = api(&router, "GET", "/api/session/layout", None).await;
    assert_eq!(status, StatusCode::OK);
    let slots = body["sheet"]["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 32);
    assert_eq!(slots[0]["kind"], "filled");
    assert_eq!(slots[0]["price_cents"], 250);
    assert_eq!(slots[2]["kind"], "blank");
    assert_eq!(body["occupied"], 2);
}

#[tokio::test]
async fn test_scan_flow_returns_effects() {
    let router = app();

    let (_, body) = api(&router, "POST", "/api/session/scan-mode", Some(json!({"enabled": true}))).await;
    assert_eq!(body["effects"][0]["type"], "focus_scan_input");
    assert_eq!(body["snapshot"]["scan"]["state"], "armed");

    let (_, body) = api(&router, "POST", "/api/session/scan", Some(json!({"input": "12345678"}))).await;
    let types: Vec<_> = body["effects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, vec!["lookup", "feedback", "play_cue"]);
    assert_eq!(body["effects"][1]["severity"], "success");
    assert_eq!(body["effects"][2]["cue"], "success");
    assert_eq!(body["snapshot"]["queue"][0]["name"], "Eggs");
    assert_eq!(body["snapshot"]["feedback"]["message"], "Eggs added (1 label)");
}

#[tokio::test]
async fn test_override_validation_and_sheet() {
    let router = app();
    let eggs = json!({"name": "Eggs", "variations": [{"name": "Dozen", "price": 399, "barcode": "12345678"}]});
    api(&router, "POST", "/api/session/toggle", Some(eggs)).await;

    let too_long = "x".repeat(31);
    let (status, _) = call(
        &router,
        "POST",
        "/api/session/override",
        Some(json!({"name": "Eggs", "text": too_long})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = api(
        &router,
        "POST",
        "/api/session/override",
        Some(json!({"name": "Eggs", "text": "Farm <Fresh> Eggs"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["overrides"]["Eggs"], "Farm <Fresh> Eggs");

    let (status, html) = call(&router, "GET", "/print?auto_print=false", None).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(html).unwrap();
    assert!(html.contains("Farm &lt;Fresh&gt; Eggs"));
    assert!(html.contains("$3.99"));
    assert!(!html.contains("window.print()"));
}

#[tokio::test]
async fn test_override_before_queueing_is_kept() {
    let router = app();
    let (status, body) = api(
        &router,
        "POST",
        "/api/session/override",
        Some(json!({"name": "Eggs", "text": "Farm Eggs"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["overrides"]["Eggs"], "Farm Eggs");

    let eggs = json!({"name": "Eggs", "variations": [{"name": "Dozen", "price": 399, "barcode": "12345678"}]});
    let (_, body) = api(&router, "POST", "/api/session/toggle", Some(eggs)).await;
    assert_eq!(body["snapshot"]["queue"][0]["display_name"], "Farm Eggs");
}

#[tokio::test]
async fn test_clear_cascades_overrides() {
    let router = app();
    let eggs = json!({"name": "Eggs", "variations": [{"name": "Dozen", "price": 399, "barcode": "12345678"}]});
    api(&router, "POST", "/api/session/toggle", Some(eggs)).await;
    api(
        &router,
        "POST",
        "/api/session/override",
        Some(json!({"name": "Eggs", "text": "Farm Eggs"})),
    )
    .await;

    let (_, body) = api(&router, "POST", "/api/session/clear", None).await;
    assert_eq!(body["snapshot"]["label_count"], 0);
    assert_eq!(body["snapshot"]["overrides"], json!({}));
}

#[tokio::test]
async fn test_index_is_served() {
    let (status, html) = call(&app(), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(html).unwrap();
    assert!(html.contains("window.__SHELFRIG"));
    assert!(html.contains("\"capacity\":32"));
}
