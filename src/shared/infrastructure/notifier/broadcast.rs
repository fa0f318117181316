use crate::modules::cart::core::notification::Notification;
use crate::shared::infrastructure::notifier::Notifier;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 32;

pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

#[async_trait::async_trait]
impl Notifier for BroadcastNotifier {
    async fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::debug!(?notification, "no subscriber for notification");
        }
    }
}
