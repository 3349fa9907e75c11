//! VXLAN Controller 共通ライブラリ
//!
//! コントローラー本体とテストで共有する型・プロトコル・エラー・設定

#![warn(missing_docs)]

/// ネットワーク/エンドポイントのエンティティ定義
pub mod types;

/// HTTP API のリクエスト・レスポンス
pub mod protocol;

/// エラー型定義
pub mod error;

/// 設定管理
pub mod config;

/// iproute2 コマンド生成
pub mod commands;
