//! check-config サブコマンド
//!
//! 設定を読み込んで検証し、最終的な値をJSONで出力します。

use clap::Args;
use std::path::PathBuf;
use vxlan_controller_common::{config::ControllerConfig, error::CommonResult};

/// check-config サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct CheckConfigArgs {
    /// Configuration file (TOML/JSON/YAML)
    #[arg(short, long, env = "VXLAN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// 検証済み設定をJSON文字列で返す
pub fn execute(args: &CheckConfigArgs) -> CommonResult<String> {
    let config = ControllerConfig::load(args.config.as_deref())?;
    Ok(serde_json::to_string_pretty(&config)?)
}
