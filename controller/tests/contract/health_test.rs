//! Contract Test: GET /api/v1/health

use crate::support::build_app;
use axum::http::StatusCode;

#[tokio::test]
async fn test_health_reports_table_sizes() {
    let app = build_app();

    let (status, body) = app.get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["networks"], 0);
    assert_eq!(body["endpoints"], 0);

    let network_id = app.create_network("t1", "n1", 5).await;
    app.create_endpoint(&network_id, "h1").await;
    app.create_endpoint(&network_id, "h2").await;

    let (_, body) = app.get("/api/v1/health").await;
    assert_eq!(body["networks"], 1);
    assert_eq!(body["endpoints"], 2);
}
