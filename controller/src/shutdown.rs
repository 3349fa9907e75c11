//! 協調的シャットダウン
//!
//! `server::run` がOSシグナルと組み合わせてグレースフルシャットダウンに使う。

use std::sync::Arc;
use tokio::sync::watch;

/// シャットダウン要求を伝えるハンドル
///
/// 複製したハンドルはすべて同じ状態を共有する。
#[derive(Clone, Debug)]
pub struct ShutdownController {
    requested: Arc<watch::Sender<bool>>,
}

impl Default for ShutdownController {
    fn default() -> Self {
        let (requested, _) = watch::channel(false);
        Self {
            requested: Arc::new(requested),
        }
    }
}

impl ShutdownController {
    /// シャットダウンが要求済みか
    pub fn is_shutdown_requested(&self) -> bool {
        *self.requested.borrow()
    }

    /// シャットダウンを要求し、待機中のタスクをすべて起こす
    pub fn request_shutdown(&self) {
        self.requested.send_replace(true);
    }

    /// シャットダウンが要求されるまで待機
    pub async fn wait(&self) {
        let mut receiver = self.requested.subscribe();
        // 送信側は self が保持しているため閉じることはない
        let _ = receiver.wait_for(|requested| *requested).await;
    }
}
