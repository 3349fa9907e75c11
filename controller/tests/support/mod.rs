//! 契約テスト共通ヘルパー

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use vxlan_controller::{api, AppState};
use vxlan_controller_common::config::ControllerConfig;

/// テスト用のルーターと共有状態
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

/// 小さいバケット数のインメモリ状態でルーターを構築
pub fn build_app() -> TestApp {
    build_app_with(|_| {})
}

/// 設定を調整してルーターを構築
pub fn build_app_with(configure: impl FnOnce(&mut ControllerConfig)) -> TestApp {
    let mut config = ControllerConfig::default();
    config.store.bucket_count = 61;
    configure(&mut config);

    let state = AppState::new(config);
    TestApp {
        app: api::create_app(state.clone()),
        state,
    }
}

impl TestApp {
    /// 生のボディでリクエストを送る
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.call(request).await
    }

    /// JSONボディ付きリクエスト
    pub async fn send_json(&self, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send_raw(method, uri, &body.to_string()).await
    }

    /// GET
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.call(request).await
    }

    /// DELETE
    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.call(request).await
    }

    async fn call(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// ネットワークを作成してIDを返す
    pub async fn create_network(&self, tenant_id: &str, name: &str, vni: u32) -> String {
        let (status, body) = self
            .send_json(
                Method::POST,
                "/api/v1/networks",
                &serde_json::json!({ "tenant_id": tenant_id, "name": name, "vni": vni }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    /// エンドポイントを作成してIDを返す
    pub async fn create_endpoint(&self, network_id: &str, host_id: &str) -> String {
        let (status, body) = self
            .send_json(
                Method::POST,
                &format!("/api/v1/networks/{network_id}/endpoints"),
                &endpoint_body(host_id),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        body["id"].as_str().unwrap().to_string()
    }
}

/// 標準的なエンドポイント作成ボディ
pub fn endpoint_body(host_id: &str) -> Value {
    serde_json::json!({
        "mac_address": "00:11:22:33:44:55",
        "ip_address": "192.168.1.100",
        "host_id": host_id,
        "vtep_ip": "10.0.0.1"
    })
}
