// Outbox port for messages other systems react to (reminders, parent
// notifications, dashboards). Delivery is not this crate's concern; it only
// guarantees one message per accepted aggregate version.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct OutboxMessage {
    pub topic: String,
    pub message_type: String,
    pub schema_version: i32,
    pub aggregate_id: String,
    pub aggregate_version: i64,
    pub occurred_at: DateTime<Utc>,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox message for {aggregate_id} v{aggregate_version}")]
    Duplicate {
        aggregate_id: String,
        aggregate_version: i64,
    },

    #[error("payload encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait NotificationOutbox: Send + Sync {
    async fn enqueue(&self, message: OutboxMessage) -> Result<(), OutboxError>;
}

pub mod in_memory;
