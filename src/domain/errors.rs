use thiserror::Error;

/// 書籍の状態遷移エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookStateError {
    /// 既に貸出中
    #[error("already borrowed")]
    AlreadyBorrowed,
    /// 貸出されていない
    #[error("not borrowed")]
    NotBorrowed,
}
