use crate::config::LibraryConfig;
use crate::domain::validation::{has_user_id_format, is_valid_isbn, is_valid_name};
use crate::domain::{Book, User};
use crate::ports::{DatabaseService, ReviewService};
use std::sync::Arc;

use super::errors::*;
use super::notifications::notify_book_availability;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、各ユースケース関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub database: Arc<dyn DatabaseService>,
    pub review_service: Arc<dyn ReviewService>,
    pub config: LibraryConfig,
}

fn invalid_argument(message: &'static str) -> LibraryError {
    tracing::debug!(reason = message, "Rejected invalid argument");
    LibraryError::InvalidArgument(message)
}

pub(super) fn ensure_valid_isbn(isbn: &str) -> Result<()> {
    if !is_valid_isbn(isbn) {
        tracing::debug!(isbn, "Rejected invalid ISBN");
        return Err(invalid_argument(INVALID_ISBN));
    }
    Ok(())
}

pub(super) fn ensure_valid_user_id(config: &LibraryConfig, user_id: &str) -> Result<()> {
    if !has_user_id_format(user_id, config.user_id_length) {
        tracing::debug!(user_id, "Rejected invalid user id");
        return Err(invalid_argument(INVALID_USER_ID));
    }
    Ok(())
}

/// 書籍を取得するヘルパー関数
///
/// # エラー
/// - DatabaseError: 読み込み失敗
/// - BookNotFound: 書籍が存在しない
pub(super) async fn find_book(database: &Arc<dyn DatabaseService>, isbn: &str) -> Result<Book> {
    database
        .get_book_by_isbn(isbn)
        .await
        .map_err(database_error)?
        .ok_or(LibraryError::BookNotFound)
}

/// 利用者を取得するヘルパー関数
///
/// # エラー
/// - DatabaseError: 読み込み失敗
/// - UserNotRegistered: 利用者が登録されていない
pub(super) async fn find_user(database: &Arc<dyn DatabaseService>, user_id: &str) -> Result<User> {
    database
        .get_user_by_id(user_id)
        .await
        .map_err(database_error)?
        .ok_or(LibraryError::UserNotRegistered)
}

fn database_error(err: Box<dyn std::error::Error + Send + Sync>) -> LibraryError {
    tracing::error!("Database error: {}", err);
    LibraryError::DatabaseError(err)
}

/// 書籍を登録する
///
/// 検証順序（最初の失敗で中断）：
/// 1. 書籍が指定されていること
/// 2. ISBNが有効であること
/// 3. タイトルが空でないこと
/// 4. 著者名が名前の文法に合うこと
/// 5. 貸出中でないこと
/// 6. 同じISBNの書籍が未登録であること
#[tracing::instrument(skip_all, fields(isbn = tracing::field::Empty))]
pub async fn add_book(deps: &ServiceDependencies, book: Option<Book>) -> Result<()> {
    let book = book.ok_or_else(|| invalid_argument(INVALID_BOOK))?;
    tracing::Span::current().record("isbn", book.isbn());

    ensure_valid_isbn(book.isbn())?;

    if book.title().is_empty() {
        return Err(invalid_argument(INVALID_TITLE));
    }

    if !is_valid_name(book.author()) {
        return Err(invalid_argument(INVALID_AUTHOR));
    }

    if book.is_borrowed() {
        return Err(invalid_argument(INVALID_BORROWED_STATE));
    }

    let existing = deps
        .database
        .get_book_by_isbn(book.isbn())
        .await
        .map_err(database_error)?;

    if existing.is_some() {
        return Err(invalid_argument(BOOK_ALREADY_EXISTS));
    }

    let isbn = book.isbn().to_string();
    deps.database
        .add_book(&isbn, book)
        .await
        .map_err(database_error)?;

    tracing::info!(isbn = %isbn, "Book added");
    Ok(())
}

/// 利用者を登録する
///
/// 検証順序：利用者の有無 → ID → 名前 → 通知チャネル → 重複登録
#[tracing::instrument(skip_all, fields(user_id = tracing::field::Empty))]
pub async fn register_user(deps: &ServiceDependencies, user: Option<User>) -> Result<()> {
    let user = user.ok_or_else(|| invalid_argument(INVALID_USER))?;
    tracing::Span::current().record("user_id", user.id());

    ensure_valid_user_id(&deps.config, user.id())?;

    if !is_valid_name(user.name()) {
        return Err(invalid_argument(INVALID_USER_NAME));
    }

    if !user.has_notification_service() {
        return Err(invalid_argument(INVALID_NOTIFICATION_SERVICE));
    }

    let existing = deps
        .database
        .get_user_by_id(user.id())
        .await
        .map_err(database_error)?;

    if existing.is_some() {
        return Err(invalid_argument(USER_ALREADY_EXISTS));
    }

    let user_id = user.id().to_string();
    deps.database
        .register_user(&user_id, user)
        .await
        .map_err(database_error)?;

    tracing::info!(user_id = %user_id, "User registered");
    Ok(())
}

/// 書籍を貸し出す
///
/// 検証順序は ISBN → 書籍の存在 → 利用者ID → 利用者の存在 → 貸出中でないこと。
/// 複数の条件が同時に不正な場合にどのエラーを返すかはこの順序で決まる。
#[tracing::instrument(skip(deps))]
pub async fn borrow_book(deps: &ServiceDependencies, isbn: &str, user_id: &str) -> Result<()> {
    ensure_valid_isbn(isbn)?;

    let mut book = find_book(&deps.database, isbn).await?;

    ensure_valid_user_id(&deps.config, user_id)?;

    find_user(&deps.database, user_id).await?;

    if book.is_borrowed() {
        return Err(LibraryError::BookAlreadyBorrowed);
    }

    book.borrow()?;

    deps.database
        .borrow_book(isbn, user_id, book)
        .await
        .map_err(database_error)?;

    tracing::info!("Book borrowed");
    Ok(())
}

/// 書籍を返却する
#[tracing::instrument(skip(deps))]
pub async fn return_book(deps: &ServiceDependencies, isbn: &str) -> Result<()> {
    ensure_valid_isbn(isbn)?;

    let mut book = find_book(&deps.database, isbn).await?;

    if !book.is_borrowed() {
        return Err(LibraryError::BookNotBorrowed);
    }

    book.return_copy()?;

    deps.database
        .return_book(isbn, book)
        .await
        .map_err(database_error)?;

    tracing::info!("Book returned");
    Ok(())
}

/// ISBNで書籍を取得する
///
/// 貸出中の書籍の場合は、返却時に知らせる旨を利用者へ通知する。
/// この通知の失敗は無視し、書籍は常に返す。貸出状態は変更しない。
#[tracing::instrument(skip(deps))]
pub async fn get_book_by_isbn(
    deps: &ServiceDependencies,
    isbn: &str,
    user_id: &str,
) -> Result<Book> {
    ensure_valid_isbn(isbn)?;
    ensure_valid_user_id(&deps.config, user_id)?;

    let book = find_book(&deps.database, isbn).await?;

    if book.is_borrowed() {
        if let Err(e) = notify_book_availability(deps, &book, user_id).await {
            tracing::warn!(error = %e, "Availability notification skipped");
        }
    }

    Ok(book)
}
