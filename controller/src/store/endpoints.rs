//! エンドポイントテーブル
//!
//! エンドポイントIDを主キーとし、所属ネットワークIDの二次インデックスを持つ。

use tracing::{info, warn};
use vxlan_controller_common::error::ControllerResult;
use vxlan_controller_common::types::Endpoint;

use super::table::{Record, Table};

impl Record for Endpoint {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn index_key(&self) -> Option<&str> {
        Some(&self.network_id)
    }
}

/// エンドポイントテーブル
#[derive(Clone)]
pub struct EndpointTable {
    table: Table<Endpoint>,
}

/// `network_id` 指定時は所属が一致する場合のみ対象とする
fn scoped(network_id: Option<&str>) -> impl Fn(&Endpoint) -> bool + '_ {
    move |endpoint| network_id.map_or(true, |id| endpoint.network_id == id)
}

impl EndpointTable {
    /// 空のテーブルを作成
    pub fn new(bucket_count: usize) -> Self {
        Self {
            table: Table::new("endpoints", bucket_count),
        }
    }

    /// エンドポイントを保存（同一IDは置き換え）
    pub fn save(&self, endpoint: Endpoint) -> ControllerResult<()> {
        let id = endpoint.id;
        let network_id = endpoint.network_id.clone();
        if let Some(previous) = self.table.save(endpoint)? {
            warn!(
                endpoint_id = %id,
                previous_network_id = %previous.network_id,
                network_id = %network_id,
                "Endpoint replaced"
            );
        } else {
            info!(endpoint_id = %id, network_id = %network_id, "Endpoint stored");
        }
        Ok(())
    }

    /// エンドポイントを取得
    pub fn get(
        &self,
        network_id: Option<&str>,
        endpoint_id: &str,
    ) -> ControllerResult<Option<Endpoint>> {
        self.table.get_where(endpoint_id, scoped(network_id))
    }

    /// エンドポイントを削除して返す
    pub fn remove(
        &self,
        network_id: Option<&str>,
        endpoint_id: &str,
    ) -> ControllerResult<Option<Endpoint>> {
        self.table.remove_where(endpoint_id, scoped(network_id))
    }

    /// エンドポイントを削除し、存在したかを返す
    pub fn delete(&self, network_id: Option<&str>, endpoint_id: &str) -> ControllerResult<bool> {
        Ok(self.remove(network_id, endpoint_id)?.is_some())
    }

    /// ネットワーク配下のエンドポイント一覧
    pub fn list(&self, network_id: &str) -> ControllerResult<Vec<Endpoint>> {
        self.table.list_indexed(network_id)
    }

    /// 保持しているエンドポイント数
    pub fn len(&self) -> ControllerResult<usize> {
        self.table.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> ControllerResult<bool> {
        self.table.is_empty()
    }

    /// 全エンドポイントを破棄
    pub fn clear(&self) -> ControllerResult<usize> {
        self.table.clear()
    }
}
