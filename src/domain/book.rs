use serde::{Deserialize, Serialize};

use super::BookStateError;

/// 書籍エンティティ
///
/// 識別子はISBN。貸出状態は`borrow`/`return_copy`でのみ遷移する。
/// 永続化はファサード（アプリケーション層）の責務。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    borrowed: bool,
}

impl Book {
    /// 未貸出の書籍を作成する
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            borrowed: false,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// 貸し出す
    ///
    /// # エラー
    /// 既に貸出中の場合は`BookStateError::AlreadyBorrowed`を返す
    pub fn borrow(&mut self) -> Result<(), BookStateError> {
        if self.borrowed {
            return Err(BookStateError::AlreadyBorrowed);
        }
        self.borrowed = true;
        Ok(())
    }

    /// 返却する
    ///
    /// # エラー
    /// 貸出中でない場合は`BookStateError::NotBorrowed`を返す
    pub fn return_copy(&mut self) -> Result<(), BookStateError> {
        if !self.borrowed {
            return Err(BookStateError::NotBorrowed);
        }
        self.borrowed = false;
        Ok(())
    }
}
