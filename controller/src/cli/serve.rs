//! serve サブコマンド
//!
//! コントローラーサーバーを起動します。

use clap::Args;
use std::path::PathBuf;
use vxlan_controller_common::{config::ControllerConfig, error::CommonResult};

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port (overrides the configuration file)
    #[arg(short, long, env = "VXLAN_PORT")]
    pub port: Option<u16>,

    /// Bind address (overrides the configuration file)
    #[arg(short = 'H', long, env = "VXLAN_HOST")]
    pub host: Option<String>,

    /// Configuration file (TOML/JSON/YAML)
    #[arg(short, long, env = "VXLAN_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// 設定を読み込み、CLI引数で上書きする
    pub fn resolve(&self) -> CommonResult<ControllerConfig> {
        let mut config = ControllerConfig::load(self.config.as_deref())?;
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config.validate()?;
        Ok(config)
    }
}
