//! エンドポイント管理API
//!
//! エンドポイントはネットワーク配下のパスで作成・一覧・削除し、
//! IDのみでの取得も受け付ける。

use crate::api::error::AppError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use vxlan_controller_common::{
    commands, error::ControllerError, protocol::CreateEndpointRequest, types::Endpoint,
};

/// 所属ネットワークのVNI（ネットワークが存在しない場合はNone）
fn network_vni(state: &AppState, network_id: &str) -> Result<Option<u32>, AppError> {
    Ok(state.store.networks.get(network_id)?.map(|n| n.vni))
}

/// POST /api/v1/networks/:network_id/endpoints - エンドポイント作成
pub async fn create_endpoint(
    State(state): State<AppState>,
    Path(network_id): Path<String>,
    payload: Result<Json<CreateEndpointRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Endpoint>), AppError> {
    let Json(req) = payload?;
    let endpoint = req.into_endpoint(&network_id)?;

    let vni = network_vni(&state, &network_id)?;
    if vni.is_none() && state.config.store.require_existing_network {
        return Err(ControllerError::NetworkNotFound(network_id).into());
    }

    state.store.endpoints.save(endpoint.clone())?;

    info!(
        endpoint_id = %endpoint.id,
        network_id = %endpoint.network_id,
        host_id = %endpoint.host_id,
        "Endpoint created"
    );
    if let Some(vni) = vni {
        debug!(
            command = %commands::endpoint_add(&endpoint, vni),
            "Rendered overlay command"
        );
    }

    Ok((StatusCode::CREATED, Json(endpoint)))
}

/// GET /api/v1/networks/:network_id/endpoints - ネットワーク配下のエンドポイント一覧
pub async fn list_endpoints(
    State(state): State<AppState>,
    Path(network_id): Path<String>,
) -> Result<Json<Vec<Endpoint>>, AppError> {
    let endpoints = state.store.endpoints.list(&network_id)?;
    Ok(Json(endpoints))
}

/// GET /api/v1/networks/:network_id/endpoints/:endpoint_id - 所属を確認して取得
pub async fn get_endpoint(
    State(state): State<AppState>,
    Path((network_id, endpoint_id)): Path<(String, String)>,
) -> Result<Json<Endpoint>, AppError> {
    state
        .store
        .endpoints
        .get(Some(&network_id), &endpoint_id)?
        .map(Json)
        .ok_or_else(|| ControllerError::EndpointNotFound(endpoint_id).into())
}

/// GET /api/v1/endpoints/:endpoint_id - IDのみで取得
pub async fn get_endpoint_by_id(
    State(state): State<AppState>,
    Path(endpoint_id): Path<String>,
) -> Result<Json<Endpoint>, AppError> {
    state
        .store
        .endpoints
        .get(None, &endpoint_id)?
        .map(Json)
        .ok_or_else(|| ControllerError::EndpointNotFound(endpoint_id).into())
}

/// DELETE /api/v1/networks/:network_id/endpoints/:endpoint_id - エンドポイント削除
pub async fn delete_endpoint(
    State(state): State<AppState>,
    Path((network_id, endpoint_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .store
        .endpoints
        .remove(Some(&network_id), &endpoint_id)?
        .ok_or_else(|| ControllerError::EndpointNotFound(endpoint_id.clone()))?;

    info!(endpoint_id = %endpoint_id, network_id = %network_id, "Endpoint deleted");
    if let Some(vni) = network_vni(&state, &network_id)? {
        debug!(
            command = %commands::endpoint_delete(&removed, vni),
            "Rendered overlay command"
        );
    }

    Ok(StatusCode::NO_CONTENT)
}
