//! iproute2 コマンド生成
//!
//! ネットワーク/エンドポイントに対応する `ip link` / `bridge fdb` コマンド文字列を組み立てる。
//! 実行はしない（ログ出力・外部ツール連携用）。

use crate::types::{Endpoint, Network};

/// VXLANのUDP宛先ポート (IANA)
pub const VXLAN_UDP_PORT: u16 = 4789;

/// アンダーレイのデフォルトデバイス
pub const DEFAULT_UNDERLAY_DEV: &str = "eth0";

/// FDBのフラッディング用全ゼロMAC
const FLOOD_MAC: &str = "00:00:00:00:00:00";

/// VXLANインターフェース名 (`vxlan<vni>`)
pub fn interface_name(vni: u32) -> String {
    format!("vxlan{}", vni)
}

/// ネットワーク作成コマンド
pub fn network_add(network: &Network, underlay_dev: &str) -> String {
    format!(
        "ip link add {} type vxlan id {} dstport {} dev {}",
        interface_name(network.vni),
        network.vni,
        VXLAN_UDP_PORT,
        underlay_dev
    )
}

/// ネットワーク削除コマンド
pub fn network_delete(vni: u32) -> String {
    format!("ip link delete {}", interface_name(vni))
}

/// エンドポイント追加コマンド（VTEP宛のフラッディングエントリ）
pub fn endpoint_add(endpoint: &Endpoint, vni: u32) -> String {
    format!(
        "bridge fdb append to {} dst {} dev {}",
        FLOOD_MAC,
        endpoint.vtep_ip,
        interface_name(vni)
    )
}

/// エンドポイント削除コマンド
pub fn endpoint_delete(endpoint: &Endpoint, vni: u32) -> String {
    format!(
        "bridge fdb del {} dst {} dev {}",
        endpoint.mac_address,
        endpoint.vtep_ip,
        interface_name(vni)
    )
}
