//! Notification service
//!
//! Toast-style notifications raised by the dashboard when a prediction
//! completes or fails. Presentation is up to the [`Notifier`] implementation.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn analysis_complete() -> Self {
        Self {
            title: "Analysis Complete".to_string(),
            description: "Project risk prediction generated successfully.".to_string(),
            variant: NotificationVariant::Default,
            created_at: Utc::now(),
        }
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self {
            title: "Analysis Failed".to_string(),
            description: message.into(),
            variant: NotificationVariant::Destructive,
            created_at: Utc::now(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            NotificationVariant::Destructive => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
        }
    }
}

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.sent.lock().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "Notification recorded");
        self.sent.lock().push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
