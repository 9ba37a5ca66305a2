#![allow(dead_code)]

use async_trait::async_trait;
use rusty_library::adapters::mock;
use rusty_library::application::library::ServiceDependencies;
use rusty_library::config::LibraryConfig;
use rusty_library::domain::{Book, User};
use rusty_library::ports::database_service::{DatabaseService, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const VALID_ISBN: &str = "9780306406157";
pub const OTHER_VALID_ISBN: &str = "9781861972712";
pub const VALID_USER_ID: &str = "123456789";
pub const OTHER_USER_ID: &str = "987654321";

/// テスト用にtracingを初期化（2回目以降は何もしない）
pub fn init_tracing() {
    let _ = rusty_library::telemetry::init_tracing("rusty_library=debug");
}

pub fn valid_book() -> Book {
    Book::new(VALID_ISBN, "Some Title", "Some Author")
}

/// DatabaseServiceへの呼び出し記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetBook(String),
    AddBook(String),
    GetUser(String),
    RegisterUser(String),
    BorrowBook(String, String),
    ReturnBook(String),
}

/// 呼び出しを記録するDatabaseService
///
/// 実際の保存はインメモリ実装に委譲する。
/// `set_offline(true)`で全ての呼び出しを、
/// `set_user_lookup_failing(true)`で利用者の検索だけを失敗させる。
pub struct SpyDatabase {
    inner: mock::DatabaseService,
    calls: Mutex<Vec<Call>>,
    offline: AtomicBool,
    user_lookup_failing: AtomicBool,
}

impl SpyDatabase {
    pub fn new() -> Self {
        Self {
            inner: mock::DatabaseService::new(),
            calls: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
            user_lookup_failing: AtomicBool::new(false),
        }
    }

    /// 記録を残さずに直接操作するためのインメモリ実装
    pub fn inner(&self) -> &mock::DatabaseService {
        &self.inner
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_user_lookup_failing(&self, failing: bool) {
        self.user_lookup_failing.store(failing, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> Result<()> {
        let user_lookup = matches!(call, Call::GetUser(_));
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err("database offline".into());
        }
        if user_lookup && self.user_lookup_failing.load(Ordering::SeqCst) {
            return Err("user table unavailable".into());
        }
        Ok(())
    }
}

#[async_trait]
impl DatabaseService for SpyDatabase {
    async fn get_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        self.record(Call::GetBook(isbn.to_string()))?;
        self.inner.get_book_by_isbn(isbn).await
    }

    async fn add_book(&self, isbn: &str, book: Book) -> Result<()> {
        self.record(Call::AddBook(isbn.to_string()))?;
        self.inner.add_book(isbn, book).await
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.record(Call::GetUser(user_id.to_string()))?;
        self.inner.get_user_by_id(user_id).await
    }

    async fn register_user(&self, user_id: &str, user: User) -> Result<()> {
        self.record(Call::RegisterUser(user_id.to_string()))?;
        self.inner.register_user(user_id, user).await
    }

    async fn borrow_book(&self, isbn: &str, user_id: &str, book: Book) -> Result<()> {
        self.record(Call::BorrowBook(isbn.to_string(), user_id.to_string()))?;
        self.inner.borrow_book(isbn, user_id, book).await
    }

    async fn return_book(&self, isbn: &str, book: Book) -> Result<()> {
        self.record(Call::ReturnBook(isbn.to_string()))?;
        self.inner.return_book(isbn, book).await
    }
}

/// テスト用の依存関係一式
pub struct Fixture {
    pub deps: ServiceDependencies,
    pub database: Arc<SpyDatabase>,
    pub reviews: Arc<mock::ReviewService>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        init_tracing();

        let database = Arc::new(SpyDatabase::new());
        let reviews = Arc::new(mock::ReviewService::new());

        let deps = ServiceDependencies {
            database: database.clone(),
            review_service: reviews.clone(),
            config,
        };

        Self {
            deps,
            database,
            reviews,
        }
    }

    /// 書籍を直接保存する（呼び出し記録には残らない）
    pub async fn seed_book(&self, book: Book) {
        let isbn = book.isbn().to_string();
        self.database.inner().add_book(&isbn, book).await.unwrap();
    }

    /// 貸出中の書籍を直接保存する
    pub async fn seed_borrowed_book(&self, book: Book, user_id: &str) {
        let isbn = book.isbn().to_string();
        let mut borrowed = book.clone();
        borrowed.borrow().unwrap();

        self.seed_book(book).await;
        self.database
            .inner()
            .borrow_book(&isbn, user_id, borrowed)
            .await
            .unwrap();
    }

    /// 利用者を直接登録し、その通知チャネルを返す
    pub async fn seed_user(&self, user_id: &str) -> Arc<mock::NotificationService> {
        let channel = Arc::new(mock::NotificationService::new());
        let user = User::new("Some Name", user_id, Some(channel.clone()));
        self.database
            .inner()
            .register_user(user_id, user)
            .await
            .unwrap();
        channel
    }
}
