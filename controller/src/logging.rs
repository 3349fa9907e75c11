//! ロギング初期化
//!
//! 標準出力に加え、ディレクトリ指定時は日次ローテーションのファイルにも出力する。
//! フィルタは `RUST_LOG` が優先され、未設定なら設定ファイルのレベルを使う。

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use vxlan_controller_common::config::LoggingConfig;

/// ログファイル名のプレフィックス
pub const LOG_FILE_PREFIX: &str = "vxlan-controller.log";

/// ロギング初期化エラー
#[derive(Debug, Error)]
pub enum LoggingError {
    /// ログレベル指定が不正
    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    /// グローバルサブスクライバが既に設定済み
    #[error("Failed to install subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// ロギングを初期化する
///
/// ファイル出力時は返されたガードを保持している間だけ書き込みが行われる。
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LoggingError::InvalidFilter(config.level.clone(), e.to_string()))?,
    };

    let stdout_layer = if config.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
