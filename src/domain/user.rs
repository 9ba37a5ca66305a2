use std::fmt;
use std::sync::Arc;

use crate::ports::notification_service::{NotificationError, NotificationService, Result};

/// 利用者エンティティ
///
/// 識別子はID。通知チャネル（`NotificationService`）を保持し、
/// 通知の送信はこのエンティティを経由して行う。
#[derive(Clone)]
pub struct User {
    name: String,
    id: String,
    notification_service: Option<Arc<dyn NotificationService>>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        notification_service: Option<Arc<dyn NotificationService>>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            notification_service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_notification_service(&self) -> bool {
        self.notification_service.is_some()
    }

    /// 通知を送信する
    ///
    /// 通知チャネルのエラーはそのまま呼び出し元に返す。
    pub async fn send_notification(&self, message: &str) -> Result<()> {
        match &self.notification_service {
            Some(service) => service.notify_user(&self.id, message).await,
            None => Err(NotificationError::MissingService),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("id", &self.id)
            .field(
                "notification_service",
                &self.notification_service.as_ref().map(|_| ".."),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CapturingService {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl NotificationService for CapturingService {
        async fn notify_user(&self, user_id: &str, message: &str) -> Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((user_id.to_string(), message.to_string()));
            Ok(())
        }
    }

    struct FailingService;

    #[async_trait]
    impl NotificationService for FailingService {
        async fn notify_user(&self, _user_id: &str, _message: &str) -> Result<()> {
            Err(NotificationError::Delivery("channel closed".to_string()))
        }
    }

    #[tokio::test]
    async fn test_send_notification_forwards_to_channel() {
        let service = Arc::new(CapturingService {
            sent: Mutex::new(Vec::new()),
        });
        let user = User::new("Some Name", "123456789", Some(service.clone()));

        user.send_notification("hello").await.unwrap();

        let sent = service.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![("123456789".to_string(), "hello".to_string())]
        );
    }

    #[tokio::test]
    async fn test_send_notification_propagates_channel_error() {
        let user = User::new("Some Name", "123456789", Some(Arc::new(FailingService)));

        let result = user.send_notification("hello").await;
        assert!(matches!(result, Err(NotificationError::Delivery(_))));
    }

    #[tokio::test]
    async fn test_send_notification_without_service() {
        let user = User::new("Some Name", "123456789", None);

        assert!(!user.has_notification_service());
        let result = user.send_notification("hello").await;
        assert!(matches!(result, Err(NotificationError::MissingService)));
    }

    #[test]
    fn test_debug_hides_notification_service() {
        let user = User::new("Some Name", "123456789", Some(Arc::new(FailingService)));
        let debug = format!("{user:?}");
        assert!(debug.contains("123456789"));
        assert!(debug.contains("Some(\"..\")"));
    }
}
