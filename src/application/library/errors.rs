use crate::domain::BookStateError;
use crate::ports::{NotificationError, ReviewServiceError};
use thiserror::Error;

pub const INVALID_BOOK: &str = "Invalid book.";
pub const INVALID_ISBN: &str = "Invalid ISBN.";
pub const INVALID_TITLE: &str = "Invalid title.";
pub const INVALID_AUTHOR: &str = "Invalid author.";
pub const INVALID_BORROWED_STATE: &str = "Book with invalid borrowed state.";
pub const BOOK_ALREADY_EXISTS: &str = "Book already exists.";
pub const INVALID_USER: &str = "Invalid user.";
pub const INVALID_USER_ID: &str = "Invalid user Id.";
pub const INVALID_USER_NAME: &str = "Invalid user name.";
pub const INVALID_NOTIFICATION_SERVICE: &str = "Invalid notification service.";
pub const USER_ALREADY_EXISTS: &str = "User already exists.";

/// 図書館アプリケーション層のエラー
///
/// 各バリアントの表示文字列は呼び出し元との契約であり、変更しないこと。
#[derive(Debug, Error)]
pub enum LibraryError {
    /// 入力値が不正（呼び出し元の誤り、再試行しない）
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// 書籍が存在しない
    #[error("Book not found!")]
    BookNotFound,

    /// 利用者が登録されていない
    #[error("User not found!")]
    UserNotRegistered,

    /// 書籍が既に貸出中
    #[error("Book is already borrowed!")]
    BookAlreadyBorrowed,

    /// 書籍が貸出されていない
    #[error("Book wasn't borrowed!")]
    BookNotBorrowed,

    /// レビューサービスの障害
    #[error("Review service unavailable!")]
    ReviewServiceUnavailable(#[source] ReviewServiceError),

    /// レビューが1件もない
    #[error("No reviews found!")]
    NoReviewsFound,

    /// 通知の送信に失敗
    #[error("Notification failed!")]
    NotificationFailed(#[source] NotificationError),

    /// DatabaseServiceのエラー
    #[error("Database error")]
    DatabaseError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<BookStateError> for LibraryError {
    fn from(err: BookStateError) -> Self {
        match err {
            BookStateError::AlreadyBorrowed => LibraryError::BookAlreadyBorrowed,
            BookStateError::NotBorrowed => LibraryError::BookNotBorrowed,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryError>;
