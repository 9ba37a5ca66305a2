use crate::ports::review_service::{
    Result, ReviewService as ReviewServiceTrait, ReviewServiceError,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock implementation of ReviewService
///
/// Serves reviews registered per ISBN. Can simulate an outage and
/// counts how many times `close()` was called.
pub struct ReviewService {
    reviews: Mutex<HashMap<String, Vec<String>>>,
    unavailable: AtomicBool,
    close_count: AtomicUsize,
}

impl ReviewService {
    pub fn new() -> Self {
        Self {
            reviews: Mutex::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
            close_count: AtomicUsize::new(0),
        }
    }

    /// Register reviews for a book
    pub fn add_reviews<I, S>(&self, isbn: &str, reviews: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut stored) = self.reviews.lock() {
            stored
                .entry(isbn.to_string())
                .or_default()
                .extend(reviews.into_iter().map(Into::into));
        }
    }

    /// Make every subsequent fetch fail (or succeed again)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `close()` calls so far
    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

impl Default for ReviewService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewServiceTrait for ReviewService {
    async fn get_reviews_for_book(&self, isbn: &str) -> Result<Vec<String>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ReviewServiceError::Unavailable(
                "mock review service is down".to_string(),
            ));
        }

        let reviews = self
            .reviews
            .lock()
            .map_err(|_| ReviewServiceError::Unavailable("review store poisoned".to_string()))?;
        Ok(reviews.get(isbn).cloned().unwrap_or_default())
    }

    fn close(&self) {
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }
}
