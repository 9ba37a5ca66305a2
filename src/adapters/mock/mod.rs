pub mod database_service;
pub mod notification_service;
pub mod review_service;

pub use database_service::DatabaseService;
pub use notification_service::{NotificationService, SentNotification};
pub use review_service::ReviewService;
