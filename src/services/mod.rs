//! Service layer modules for external integrations.
//!
//! Contains the prediction service client and the notification sinks.

pub mod notifications;
pub mod prediction_client;

pub use notifications::{MemoryNotifier, Notification, NotificationVariant, Notifier, TracingNotifier};
pub use prediction_client::{PredictionClient, Predictor};
