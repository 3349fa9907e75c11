//! Contract Test: /api/v1/networks/:network_id/endpoints, /api/v1/endpoints/:endpoint_id

use crate::support::{build_app, build_app_with, endpoint_body};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_create_endpoint_returns_created_entity() {
    let app = build_app();
    let network_id = app.create_network("t1", "n1", 1000).await;

    let (status, body) = app
        .send_json(
            Method::POST,
            &format!("/api/v1/networks/{network_id}/endpoints"),
            &endpoint_body("h1"),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["network_id"], network_id);
    assert_eq!(body["mac_address"], "00:11:22:33:44:55");
    assert_eq!(body["ip_address"], "192.168.1.100");
    assert_eq!(body["host_id"], "h1");
    assert_eq!(body["vtep_ip"], "10.0.0.1");
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_endpoint_missing_vtep() {
    let app = build_app();
    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/v1/networks/net-1/endpoints",
            &json!({ "mac_address": "m", "ip_address": "i", "host_id": "h" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "vtep_ip is required");
    assert!(app.state.store.endpoints.is_empty().unwrap());
}

#[tokio::test]
async fn test_unknown_network_is_accepted_by_default() {
    let app = build_app();
    let endpoint_id = app.create_endpoint("never-created", "h1").await;

    let (status, body) = app.get(&format!("/api/v1/endpoints/{endpoint_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["network_id"], "never-created");
}

#[tokio::test]
async fn test_strict_mode_requires_existing_network() {
    let app = build_app_with(|config| config.store.require_existing_network = true);

    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/v1/networks/never-created/endpoints",
            &endpoint_body("h1"),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let network_id = app.create_network("t1", "n1", 7).await;
    app.create_endpoint(&network_id, "h1").await;
}

#[tokio::test]
async fn test_list_endpoints_is_scoped_to_network() {
    let app = build_app();
    let net_a = app.create_network("t1", "a", 1).await;
    let net_b = app.create_network("t1", "b", 2).await;

    let mut expected = Vec::new();
    for i in 0..5 {
        expected.push(app.create_endpoint(&net_a, &format!("a{i}")).await);
    }
    app.create_endpoint(&net_b, "b0").await;

    let (status, body) = app
        .get(&format!("/api/v1/networks/{net_a}/endpoints"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let mut listed: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();
    listed.sort();
    expected.sort();
    assert_eq!(listed, expected);

    let (_, body) = app.get("/api/v1/networks/empty/endpoints").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_scoped_lookup_rejects_other_network() {
    let app = build_app();
    let net_a = app.create_network("t1", "a", 1).await;
    let net_b = app.create_network("t1", "b", 2).await;
    let endpoint_id = app.create_endpoint(&net_a, "h1").await;

    let (status, _) = app
        .get(&format!("/api/v1/networks/{net_a}/endpoints/{endpoint_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .get(&format!("/api/v1/networks/{net_b}/endpoints/{endpoint_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Endpoint not found");

    let (status, _) = app
        .delete(&format!("/api/v1/networks/{net_b}/endpoints/{endpoint_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&format!("/api/v1/endpoints/{endpoint_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_endpoint() {
    let app = build_app();
    let network_id = app.create_network("t1", "n1", 9).await;
    let endpoint_id = app.create_endpoint(&network_id, "h1").await;

    let (status, _) = app
        .delete(&format!(
            "/api/v1/networks/{network_id}/endpoints/{endpoint_id}"
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/v1/endpoints/{endpoint_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app
        .get(&format!("/api/v1/networks/{network_id}/endpoints"))
        .await;
    assert!(body.as_array().unwrap().is_empty());
}
