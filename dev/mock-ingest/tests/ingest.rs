use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mock_ingest::build_router;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

#[tokio::test]
async fn health_ok() {
    let app = build_router();
    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn ingest_then_list() {
    let app = build_router();
    let body = json!({
        "deviceID": "abc123",
        "lat": 12.5,
        "long": -0.3,
    })
    .to_string();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/telemetry")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["status"], "ok");
    assert!(!v["id"].as_str().unwrap().is_empty());

    let list_resp = app
        .oneshot(
            Request::builder()
                .uri("/api/telemetry")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(list_resp.status(), StatusCode::OK);
    let records: Value =
        serde_json::from_slice(&to_bytes(list_resp.into_body(), 64 * 1024).await.unwrap()).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["deviceID"], "abc123");
    assert_eq!(records[0]["lat"], 12.5);
    assert_eq!(records[0]["long"], -0.3);
    assert_eq!(records[0]["id"], v["id"]);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = build_router();
    let body = json!({
        "deviceID": "abc123",
    })
    .to_string();

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/telemetry")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}
