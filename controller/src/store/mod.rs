//! インメモリストア
//!
//! ネットワーク用とエンドポイント用の2テーブルをまとめたコンテキスト。
//! テーブルごとに独立したロックを持ち、互いに競合しない。永続化はしない。

pub mod chained;
pub mod endpoints;
pub mod networks;
pub mod table;

use tracing::info;
use vxlan_controller_common::config::StoreConfig;
use vxlan_controller_common::error::ControllerResult;

pub use endpoints::EndpointTable;
pub use networks::NetworkTable;

/// ストア
#[derive(Clone)]
pub struct Store {
    /// ネットワークテーブル
    pub networks: NetworkTable,
    /// エンドポイントテーブル
    pub endpoints: EndpointTable,
}

/// 破棄したレコード数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeardownReport {
    /// 破棄したネットワーク数
    pub networks: usize,
    /// 破棄したエンドポイント数
    pub endpoints: usize,
}

impl Store {
    /// 設定に従って空のストアを作成
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_buckets(config.bucket_count)
    }

    /// 指定バケット数で空のストアを作成
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            networks: NetworkTable::new(bucket_count),
            endpoints: EndpointTable::new(bucket_count),
        }
    }

    /// 全テーブルを破棄する（プロセス終了時に1回呼ぶ）
    pub fn teardown(&self) -> ControllerResult<TeardownReport> {
        let report = TeardownReport {
            networks: self.networks.clear()?,
            endpoints: self.endpoints.clear()?,
        };
        info!(
            networks = report.networks,
            endpoints = report.endpoints,
            "Store torn down"
        );
        Ok(report)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}
