use crate::ports::notification_service::{
    NotificationError, NotificationService as NotificationServiceTrait, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// 送信済み通知の記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentNotification {
    pub user_id: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Mock implementation of NotificationService
///
/// Does not send actual notifications.
/// Records every message instead, or fails every call when switched to
/// failing mode.
pub struct NotificationService {
    sent: Mutex<Vec<SentNotification>>,
    failing: AtomicBool,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// A channel whose every delivery fails
    pub fn failing() -> Self {
        let service = Self::new();
        service.set_failing(true);
        service
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages delivered so far
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn notify_user(&self, user_id: &str, message: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Delivery(format!(
                "mock channel refused message for {user_id}"
            )));
        }

        let mut sent = self
            .sent
            .lock()
            .map_err(|_| NotificationError::Delivery("outbox poisoned".to_string()))?;
        sent.push(SentNotification {
            user_id: user_id.to_string(),
            message: message.to_string(),
            sent_at: Utc::now(),
        });
        Ok(())
    }
}
