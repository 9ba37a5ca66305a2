use crate::domain::{Book, User};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// データベースサービスポート
///
/// 書籍・利用者・貸出状態の永続化を抽象化する。
/// 内部のストレージについては何も規定しない。
#[async_trait]
pub trait DatabaseService: Send + Sync {
    /// ISBNで書籍を取得する
    ///
    /// 存在しない場合は`None`を返す。
    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>>;

    /// 書籍を登録する
    async fn add_book(&self, isbn: &str, book: Book) -> Result<()>;

    /// IDで利用者を取得する
    ///
    /// 存在しない場合は`None`を返す。
    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>>;

    /// 利用者を登録する
    async fn register_user(&self, user_id: &str, user: User) -> Result<()>;

    /// 貸出を記録する
    ///
    /// `book`は貸出状態に遷移済みの書籍。保存済みの書籍をこれで置き換え、
    /// 利用者との対応を記録する。
    async fn borrow_book(&self, isbn: &str, user_id: &str, book: Book) -> Result<()>;

    /// 返却を記録する
    ///
    /// `book`は返却済み状態に遷移済みの書籍。保存済みの書籍をこれで置き換え、
    /// 貸出の記録を削除する。
    async fn return_book(&self, isbn: &str, book: Book) -> Result<()>;
}
