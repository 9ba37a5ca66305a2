use crate::domain::{Book, User};
use crate::ports::database_service::{DatabaseService as DatabaseServiceTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// DatabaseServiceのインメモリ実装
///
/// 書籍・利用者・貸出（ISBN → 利用者ID）をHashMapに保持する。
/// 貸出・返却の記録時は渡された書籍で保存済みの書籍を置き換える。
pub struct DatabaseService {
    books: Mutex<HashMap<String, Book>>,
    users: Mutex<HashMap<String, User>>,
    loans: Mutex<HashMap<String, String>>,
}

impl DatabaseService {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
            loans: Mutex::new(HashMap::new()),
        }
    }

    /// 書籍を借りている利用者のIDを返す
    pub fn borrowed_by(&self, isbn: &str) -> Option<String> {
        self.loans.lock().ok()?.get(isbn).cloned()
    }

    /// 保存されている書籍数
    pub fn book_count(&self) -> usize {
        self.books.lock().map(|books| books.len()).unwrap_or(0)
    }

    /// 登録されている利用者数
    pub fn user_count(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }
}

impl Default for DatabaseService {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(|_| "in-memory database lock poisoned".into())
}

#[async_trait]
impl DatabaseServiceTrait for DatabaseService {
    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        Ok(lock(&self.books)?.get(isbn).cloned())
    }

    async fn add_book(&self, isbn: &str, book: Book) -> Result<()> {
        lock(&self.books)?.insert(isbn.to_string(), book);
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(lock(&self.users)?.get(user_id).cloned())
    }

    async fn register_user(&self, user_id: &str, user: User) -> Result<()> {
        lock(&self.users)?.insert(user_id.to_string(), user);
        Ok(())
    }

    async fn borrow_book(&self, isbn: &str, user_id: &str, book: Book) -> Result<()> {
        let mut books = lock(&self.books)?;
        let stored = books
            .get_mut(isbn)
            .ok_or_else(|| format!("no book stored under ISBN {isbn}"))?;
        *stored = book;
        lock(&self.loans)?.insert(isbn.to_string(), user_id.to_string());
        Ok(())
    }

    async fn return_book(&self, isbn: &str, book: Book) -> Result<()> {
        let mut books = lock(&self.books)?;
        let stored = books
            .get_mut(isbn)
            .ok_or_else(|| format!("no book stored under ISBN {isbn}"))?;
        *stored = book;
        lock(&self.loans)?.remove(isbn);
        Ok(())
    }
}
