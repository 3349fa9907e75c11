//! HTTP APIのリクエスト・レスポンス定義
//!
//! 必須項目もすべて `Option` で受け取り、欠落をエンティティ変換時に検出する。

use serde::{Deserialize, Serialize};

use crate::error::{CommonError, CommonResult};
use crate::types::{Endpoint, Network};

/// ネットワーク作成リクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateNetworkRequest {
    /// テナントID
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// 表示名
    #[serde(default)]
    pub name: Option<String>,
    /// VNI（範囲外・負値は変換時にエラー）
    #[serde(default)]
    pub vni: Option<i64>,
    /// 説明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateNetworkRequest {
    /// 検証済みの [`Network`] に変換
    pub fn into_network(self) -> CommonResult<Network> {
        let tenant_id = present("tenant_id", self.tenant_id)?;
        let name = present("name", self.name)?;
        let vni = self
            .vni
            .ok_or_else(|| CommonError::InvalidParams("vni is required".to_string()))?;
        let vni = u32::try_from(vni).map_err(|_| {
            CommonError::InvalidParams(format!("vni out of range: {}", vni))
        })?;

        Network::new(&tenant_id, &name, vni, self.description.as_deref())
    }
}

/// エンドポイント作成リクエスト（network_idはURLから取得）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateEndpointRequest {
    /// MACアドレス
    #[serde(default)]
    pub mac_address: Option<String>,
    /// IPアドレス
    #[serde(default)]
    pub ip_address: Option<String>,
    /// ホストID
    #[serde(default)]
    pub host_id: Option<String>,
    /// VTEPのIPアドレス
    #[serde(default)]
    pub vtep_ip: Option<String>,
}

impl CreateEndpointRequest {
    /// 指定ネットワーク配下の検証済み [`Endpoint`] に変換
    pub fn into_endpoint(self, network_id: &str) -> CommonResult<Endpoint> {
        let mac_address = present("mac_address", self.mac_address)?;
        let ip_address = present("ip_address", self.ip_address)?;
        let host_id = present("host_id", self.host_id)?;
        let vtep_ip = present("vtep_ip", self.vtep_ip)?;

        Endpoint::new(network_id, &mac_address, &ip_address, &host_id, &vtep_ip)
    }
}

/// ネットワーク一覧のクエリパラメータ
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListNetworksQuery {
    /// テナントで絞り込む
    #[serde(default)]
    pub tenant_id: Option<String>,
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// 状態 ("ok")
    pub status: String,
    /// 保持しているネットワーク数
    pub networks: usize,
    /// 保持しているエンドポイント数
    pub endpoints: usize,
}

fn present(field: &str, value: Option<String>) -> CommonResult<String> {
    value.ok_or_else(|| CommonError::InvalidParams(format!("{} is required", field)))
}
