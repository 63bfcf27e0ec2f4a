use crate::modules::clinic_tracking::core::intents::TrackingIntent;
use crate::shared::infrastructure::notification_outbox::{
    NotificationOutbox, OutboxError, OutboxMessage,
};

/// Turn the intents of one accepted transition into outbox messages.
/// `version` is the booking version the write produced; every intent of a
/// transition is keyed on it.
pub async fn dispatch_intents(
    outbox: &(impl NotificationOutbox + ?Sized),
    booking_id: &str,
    version: i64,
    topic: &str,
    intents: Vec<TrackingIntent>,
) -> Result<(), OutboxError> {
    for intent in intents {
        match intent {
            TrackingIntent::PublishTrackingStatusChanged { payload } => {
                let occurred_at = payload.occurred_at;
                outbox
                    .enqueue(OutboxMessage {
                        topic: topic.to_string(),
                        message_type: "TrackingStatusChanged".to_string(),
                        schema_version: 1,
                        aggregate_id: booking_id.to_string(),
                        aggregate_version: version,
                        occurred_at,
                        payload: serde_json::to_value(payload)?,
                    })
                    .await?;
            }
        }
    }
    Ok(())
}
