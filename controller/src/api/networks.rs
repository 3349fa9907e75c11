//! ネットワーク管理API

use crate::api::error::AppError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use vxlan_controller_common::{
    commands,
    error::ControllerError,
    protocol::{CreateNetworkRequest, ListNetworksQuery},
    types::Network,
};

/// POST /api/v1/networks - ネットワーク作成
pub async fn create_network(
    State(state): State<AppState>,
    payload: Result<Json<CreateNetworkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Network>), AppError> {
    let Json(req) = payload?;
    let network = req.into_network()?;
    state.store.networks.save(network.clone())?;

    info!(
        network_id = %network.id,
        tenant_id = %network.tenant_id,
        vni = network.vni,
        "Network created"
    );
    debug!(
        command = %commands::network_add(&network, commands::DEFAULT_UNDERLAY_DEV),
        "Rendered overlay command"
    );

    Ok((StatusCode::CREATED, Json(network)))
}

/// GET /api/v1/networks - ネットワーク一覧
pub async fn list_networks(
    State(state): State<AppState>,
    Query(query): Query<ListNetworksQuery>,
) -> Result<Json<Vec<Network>>, AppError> {
    let networks = state.store.networks.list(query.tenant_id.as_deref())?;
    Ok(Json(networks))
}

/// GET /api/v1/networks/:network_id - ネットワーク取得
pub async fn get_network(
    State(state): State<AppState>,
    Path(network_id): Path<String>,
) -> Result<Json<Network>, AppError> {
    state
        .store
        .networks
        .get(&network_id)?
        .map(Json)
        .ok_or_else(|| ControllerError::NetworkNotFound(network_id).into())
}

/// DELETE /api/v1/networks/:network_id - ネットワーク削除
///
/// 配下のエンドポイントは残る。
pub async fn delete_network(
    State(state): State<AppState>,
    Path(network_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .store
        .networks
        .remove(&network_id)?
        .ok_or_else(|| ControllerError::NetworkNotFound(network_id.clone()))?;

    info!(network_id = %network_id, vni = removed.vni, "Network deleted");
    debug!(
        command = %commands::network_delete(removed.vni),
        "Rendered overlay command"
    );

    Ok(StatusCode::NO_CONTENT)
}
