use crate::modules::cart::core::notification::Notification;
use async_trait::async_trait;

/// Delivers transient messages to whoever is showing the cart. Delivery is
/// best effort: a notification nobody is listening for is dropped.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}

pub mod broadcast;
pub mod in_memory;
