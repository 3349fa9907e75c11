//! VXLAN Controller Server
//!
//! VXLANオーバーレイのネットワーク定義とエンドポイントを管理するコントロールプレーン

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// ロギング初期化ユーティリティ
pub mod logging;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// インメモリストア
pub mod store;

use std::sync::Arc;
use vxlan_controller_common::config::ControllerConfig;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// ネットワーク/エンドポイントストア
    pub store: store::Store,
    /// 起動時に読み込んだ設定
    pub config: Arc<ControllerConfig>,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// 設定から空のストアを持つ状態を作成
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            store: store::Store::new(&config.store),
            config: Arc::new(config),
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}
