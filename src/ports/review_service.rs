use async_trait::async_trait;
use thiserror::Error;

/// レビューサービスのエラー
#[derive(Debug, Error)]
pub enum ReviewServiceError {
    /// サービスに接続できない、または応答が異常
    #[error("review service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ReviewServiceError>;

/// レビューサービスポート
///
/// 書籍レビューの取得元を抽象化する。
/// 利用者は取得1回ごとに`close()`をちょうど1回呼び出す必要がある。
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// ISBNに対応するレビューを取得する
    ///
    /// レビューがない場合は空のVecを返す。
    async fn get_reviews_for_book(&self, isbn: &str) -> Result<Vec<String>>;

    /// 取得に使用したリソースを解放する
    fn close(&self);
}
