//! REST APIハンドラー
//!
//! ネットワーク・エンドポイント管理API（ベースパス `/api/v1`）

pub mod endpoints;
pub mod error;
pub mod health;
pub mod networks;

use crate::AppState;
use axum::{http::Uri, routing::get, Router};
use error::AppError;
use tower_http::trace::TraceLayer;
use vxlan_controller_common::error::ControllerError;

/// APIのベースパス
pub const API_BASE: &str = "/api/v1";

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/networks",
            get(networks::list_networks).post(networks::create_network),
        )
        .route(
            "/networks/:network_id",
            get(networks::get_network).delete(networks::delete_network),
        )
        .route(
            "/networks/:network_id/endpoints",
            get(endpoints::list_endpoints).post(endpoints::create_endpoint),
        )
        .route(
            "/networks/:network_id/endpoints/:endpoint_id",
            get(endpoints::get_endpoint).delete(endpoints::delete_endpoint),
        )
        .route("/endpoints/:endpoint_id", get(endpoints::get_endpoint_by_id))
        .route("/health", get(health::health));

    Router::new()
        .nest(API_BASE, api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 未定義ルートは標準エラーボディで404を返す
async fn not_found(uri: Uri) -> AppError {
    AppError(ControllerError::RouteNotFound(uri.path().to_string()))
}
