use async_trait::async_trait;
use thiserror::Error;

/// 通知のエラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// 配信に失敗した
    #[error("notification delivery failed: {0}")]
    Delivery(String),

    /// 利用者に通知チャネルが設定されていない
    #[error("user has no notification service")]
    MissingService,
}

pub type Result<T> = std::result::Result<T, NotificationError>;

/// 通知サービスポート
///
/// 利用者ごとに自分の通知チャネルを持つ。
/// 実装はメール、SMS、プッシュ通知など。呼び出し側は再試行しない。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 指定した利用者にメッセージを送信する
    async fn notify_user(&self, user_id: &str, message: &str) -> Result<()>;
}
