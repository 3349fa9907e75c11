//! ネットワークテーブル
//!
//! ネットワークIDを主キーとし、テナントによる絞り込みは全走査で行う。

use tracing::{info, warn};
use vxlan_controller_common::error::ControllerResult;
use vxlan_controller_common::types::Network;

use super::table::{Record, Table};

impl Record for Network {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// ネットワークテーブル
#[derive(Clone)]
pub struct NetworkTable {
    table: Table<Network>,
}

impl NetworkTable {
    /// 空のテーブルを作成
    pub fn new(bucket_count: usize) -> Self {
        Self {
            table: Table::new("networks", bucket_count),
        }
    }

    /// ネットワークを保存（同一IDは置き換え）
    pub fn save(&self, network: Network) -> ControllerResult<()> {
        let id = network.id;
        let vni = network.vni;
        if let Some(previous) = self.table.save(network)? {
            warn!(network_id = %id, previous_vni = previous.vni, vni, "Network replaced");
        } else {
            info!(network_id = %id, vni, "Network stored");
        }
        Ok(())
    }

    /// ネットワークを取得
    pub fn get(&self, network_id: &str) -> ControllerResult<Option<Network>> {
        self.table.get(network_id)
    }

    /// ネットワークを削除して返す
    ///
    /// 配下のエンドポイントは削除しない。
    pub fn remove(&self, network_id: &str) -> ControllerResult<Option<Network>> {
        self.table.remove(network_id)
    }

    /// ネットワークを削除し、存在したかを返す
    pub fn delete(&self, network_id: &str) -> ControllerResult<bool> {
        Ok(self.remove(network_id)?.is_some())
    }

    /// ネットワーク一覧（テナント指定時はそのテナントのみ）
    pub fn list(&self, tenant_id: Option<&str>) -> ControllerResult<Vec<Network>> {
        self.table
            .list(|network| tenant_id.map_or(true, |tenant| network.tenant_id == tenant))
    }

    /// 保持しているネットワーク数
    pub fn len(&self) -> ControllerResult<usize> {
        self.table.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> ControllerResult<bool> {
        self.table.is_empty()
    }

    /// 全ネットワークを破棄
    pub fn clear(&self) -> ControllerResult<usize> {
        self.table.clear()
    }
}
