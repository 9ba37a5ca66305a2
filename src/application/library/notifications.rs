use crate::domain::Book;
use crate::ports::ReviewService;
use crate::ports::review_service;

use super::errors::{LibraryError, Result};
use super::library_service::{
    ServiceDependencies, ensure_valid_isbn, ensure_valid_user_id, find_book, find_user,
};

/// レビューサービスの利用区間
///
/// 取得時に生成し、ドロップ時に必ず`close()`を1回呼ぶ。
/// 正常終了・エラー・`?`による早期リターンのいずれでも解放される。
struct ReviewSession<'a> {
    service: &'a dyn ReviewService,
}

impl<'a> ReviewSession<'a> {
    fn acquire(service: &'a dyn ReviewService) -> Self {
        Self { service }
    }

    async fn fetch_reviews(&self, isbn: &str) -> review_service::Result<Vec<String>> {
        self.service.get_reviews_for_book(isbn).await
    }
}

impl Drop for ReviewSession<'_> {
    fn drop(&mut self) {
        self.service.close();
        tracing::debug!("Review service released");
    }
}

/// レビュー通知のメッセージを組み立てる
pub fn review_message(title: &str, reviews: &[String]) -> String {
    format!("Reviews for '{}':\n{}", title, reviews.join("\n"))
}

/// 貸出中の書籍についての通知メッセージを組み立てる
pub fn availability_message(title: &str) -> String {
    format!(
        "The book '{}' is currently borrowed. You will be notified when it is returned.",
        title
    )
}

/// 書籍のレビューを利用者に通知する
///
/// 処理フロー：
/// 1. ISBN・利用者IDの検証
/// 2. 書籍・利用者の存在確認
/// 3. レビューサービスからレビューを取得（障害時はReviewServiceUnavailable）
/// 4. レビューが空ならNoReviewsFound
/// 5. タイトルとレビューを含むメッセージを利用者に送信（失敗時はNotificationFailed）
///
/// レビューサービスは3で取得し、どの経路で終了しても1回だけ解放する。
/// 通知の再試行は行わない。
#[tracing::instrument(skip(deps))]
pub async fn notify_user_with_book_reviews(
    deps: &ServiceDependencies,
    isbn: &str,
    user_id: &str,
) -> Result<()> {
    ensure_valid_isbn(isbn)?;
    ensure_valid_user_id(&deps.config, user_id)?;

    let book = find_book(&deps.database, isbn).await?;
    let user = find_user(&deps.database, user_id).await?;

    let session = ReviewSession::acquire(deps.review_service.as_ref());

    let reviews = session.fetch_reviews(isbn).await.map_err(|e| {
        tracing::warn!(error = %e, "Review service failed");
        LibraryError::ReviewServiceUnavailable(e)
    })?;

    if reviews.is_empty() {
        return Err(LibraryError::NoReviewsFound);
    }

    let message = review_message(book.title(), &reviews);

    user.send_notification(&message).await.map_err(|e| {
        tracing::warn!(error = %e, "Review notification failed");
        LibraryError::NotificationFailed(e)
    })?;

    tracing::info!(review_count = reviews.len(), "Reviews sent to user");
    Ok(())
}

/// 貸出中の書籍について利用者へ通知する
///
/// 利用者が未登録の場合や送信失敗の場合はエラーを返す。
/// 呼び出し元（get_book_by_isbn）はこのエラーを無視する。
pub(super) async fn notify_book_availability(
    deps: &ServiceDependencies,
    book: &Book,
    user_id: &str,
) -> Result<()> {
    let user = find_user(&deps.database, user_id).await?;

    user.send_notification(&availability_message(book.title()))
        .await
        .map_err(LibraryError::NotificationFailed)
}
