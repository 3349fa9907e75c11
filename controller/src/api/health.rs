//! ヘルスチェックAPI

use crate::api::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use vxlan_controller_common::protocol::HealthResponse;

/// GET /api/v1/health - 稼働確認とテーブル件数
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        networks: state.store.networks.len()?,
        endpoints: state.store.endpoints.len()?,
    }))
}
