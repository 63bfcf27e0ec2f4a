use crate::shared::infrastructure::notification_outbox::{
    NotificationOutbox, OutboxError, OutboxMessage,
};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotificationOutbox {
    messages: Mutex<Vec<OutboxMessage>>,
    seen: Mutex<HashSet<(String, i64)>>,
    is_offline: bool,
}

impl InMemoryNotificationOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn messages(&self) -> Vec<OutboxMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl NotificationOutbox for InMemoryNotificationOutbox {
    async fn enqueue(&self, message: OutboxMessage) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Backend("Notification outbox offline".into()));
        }
        let key = (message.aggregate_id.clone(), message.aggregate_version);
        if !self.seen.lock().await.insert(key) {
            return Err(OutboxError::Duplicate {
                aggregate_id: message.aggregate_id,
                aggregate_version: message.aggregate_version,
            });
        }
        self.messages.lock().await.push(message);
        Ok(())
    }
}
