//! エンティティ定義
//!
//! Network（VXLANセグメント）とEndpoint（ホストバインディング）のコアデータ型

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CommonError, CommonResult};

/// VNIの最大値 (2^24 - 1)
pub const MAX_VNI: u32 = 16_777_215;

/// タイムスタンプの文字列形式（UTC、秒精度）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// VXLANネットワーク
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Network {
    /// 一意識別子
    pub id: Uuid,
    /// テナントID
    pub tenant_id: String,
    /// 表示名
    pub name: String,
    /// VXLAN Network Identifier (1..=MAX_VNI)
    pub vni: u32,
    /// 説明（未指定と空文字列を区別する）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 作成日時
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// 更新日時
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Network {
    /// 入力を検証して新しいネットワークを作成
    ///
    /// `tenant_id`・`name` が空、または `vni` が範囲外の場合は
    /// [`CommonError::InvalidParams`] を返す。
    pub fn new(
        tenant_id: &str,
        name: &str,
        vni: u32,
        description: Option<&str>,
    ) -> CommonResult<Self> {
        require("tenant_id", tenant_id)?;
        require("name", name)?;
        validate_vni(vni)?;

        let now = now();
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id: tenant_id.to_string(),
            name: name.to_string(),
            vni,
            description: description.map(str::to_string),
            created_at: now,
            updated_at: now,
        })
    }
}

/// ネットワークに接続されたエンドポイント
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// 一意識別子
    pub id: Uuid,
    /// 所属ネットワークID（存在確認は行わない）
    pub network_id: String,
    /// MACアドレス
    pub mac_address: String,
    /// IPアドレス
    pub ip_address: String,
    /// ホストID
    pub host_id: String,
    /// VTEPのIPアドレス
    pub vtep_ip: String,
    /// 作成日時
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// 更新日時
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Endpoint {
    /// 入力を検証して新しいエンドポイントを作成
    ///
    /// 書式の検証は行わず、空でないことのみ確認する。
    pub fn new(
        network_id: &str,
        mac_address: &str,
        ip_address: &str,
        host_id: &str,
        vtep_ip: &str,
    ) -> CommonResult<Self> {
        require("network_id", network_id)?;
        require("mac_address", mac_address)?;
        require("ip_address", ip_address)?;
        require("host_id", host_id)?;
        require("vtep_ip", vtep_ip)?;

        let now = now();
        Ok(Self {
            id: Uuid::new_v4(),
            network_id: network_id.to_string(),
            mac_address: mac_address.to_string(),
            ip_address: ip_address.to_string(),
            host_id: host_id.to_string(),
            vtep_ip: vtep_ip.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// VNIが 1..=MAX_VNI の範囲内か検証
pub fn validate_vni(vni: u32) -> CommonResult<()> {
    if vni == 0 || vni > MAX_VNI {
        return Err(CommonError::InvalidParams(format!(
            "vni must be between 1 and {}, got {}",
            MAX_VNI, vni
        )));
    }
    Ok(())
}

fn require(field: &str, value: &str) -> CommonResult<()> {
    if value.is_empty() {
        return Err(CommonError::InvalidParams(format!("{} is required", field)));
    }
    Ok(())
}

/// 秒精度に切り詰めた現在時刻
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// `YYYY-MM-DDTHH:MM:SSZ` 形式でのシリアライズ
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// 固定書式で文字列化
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    /// 固定書式の文字列から復元
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
