//! 設定管理
//!
//! ControllerConfig 等の設定構造体と、ファイル・環境変数からの読み込み

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CommonError, CommonResult};

/// 環境変数のプレフィックス（例: `VXLAN_STORE__BUCKET_COUNT`）
pub const ENV_PREFIX: &str = "VXLAN";

/// コントローラー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControllerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 18080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// ストア設定
    #[serde(default)]
    pub store: StoreConfig,

    /// ログ設定
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// ストア設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// テーブルごとのバケット数（固定、デフォルト: 10007）
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,

    /// エンドポイント作成時に所属ネットワークの存在を要求する (デフォルト: false)
    #[serde(default)]
    pub require_existing_network: bool,
}

/// ログ設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// ログレベル (デフォルト: "info"、RUST_LOGが優先)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// ログファイル出力先ディレクトリ（未指定なら標準出力のみ）
    #[serde(default)]
    pub dir: Option<String>,

    /// JSON形式で出力する (デフォルト: false)
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    18080
}

fn default_bucket_count() -> usize {
    10007
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            bucket_count: default_bucket_count(),
            require_existing_network: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
            json: false,
        }
    }
}

impl ControllerConfig {
    /// 設定を読み込む
    ///
    /// 優先順位: 環境変数 (`VXLAN_*`、階層は `__` 区切り) > 設定ファイル > デフォルト値
    pub fn load(path: Option<&Path>) -> CommonResult<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// 設定値の整合性を検証
    pub fn validate(&self) -> CommonResult<()> {
        if self.port == 0 {
            return Err(CommonError::Config("port must be non-zero".to_string()));
        }
        if self.store.bucket_count == 0 {
            return Err(CommonError::Config(
                "store.bucket_count must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// バインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
