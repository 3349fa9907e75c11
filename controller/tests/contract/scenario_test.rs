//! Contract Test: ネットワーク作成 → エンドポイント登録 → ネットワーク削除

use crate::support::{build_app, endpoint_body};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_network_lifecycle_without_cascade() {
    let app = build_app();

    let (status, network) = app
        .send_json(
            Method::POST,
            "/api/v1/networks",
            &json!({ "tenant_id": "t1", "name": "n1", "vni": 1000 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(network["vni"], 1000);
    assert_eq!(network["created_at"], network["updated_at"]);
    let network_id = network["id"].as_str().unwrap().to_string();

    let (status, endpoint) = app
        .send_json(
            Method::POST,
            &format!("/api/v1/networks/{network_id}/endpoints"),
            &endpoint_body("h1"),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let endpoint_id = endpoint["id"].as_str().unwrap().to_string();

    let (status, listed) = app
        .get(&format!("/api/v1/networks/{network_id}/endpoints"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([endpoint.clone()]));

    let (status, _) = app.delete(&format!("/api/v1/networks/{network_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/v1/networks/{network_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // エンドポイントは削除されない
    let (status, fetched) = app.get(&format!("/api/v1/endpoints/{endpoint_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, endpoint);
    let (_, listed) = app
        .get(&format!("/api/v1/networks/{network_id}/endpoints"))
        .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}
