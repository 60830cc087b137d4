//! Notification subscriber: the bus's one consumer loop.
//!
//! Each bus instance needs a running subscriber or publishers stall
//! once the buffer fills, so [`run`] is spawned at startup before the
//! server starts accepting requests. Delivery to real channels (mail,
//! push) lives outside this service; here every event is turned into a
//! structured log line, in the exact order it was published.

use crate::domain::{DomainEvent, Subscription};

/// Drains the subscription until the bus is closed, handling one event
/// at a time.
pub async fn run(subscription: Subscription) {
    subscription.run(|event| async move { dispatch(&event) }).await;
}

/// Handles a single event.
fn dispatch(event: &DomainEvent) {
    match event {
        DomainEvent::UserCreated {
            user_id,
            username,
            email,
        } => {
            tracing::info!(kind = event.kind(), %user_id, username, email, "welcome notification queued");
        }
        DomainEvent::UserPasswordUpdated {
            user_id,
            username,
            email,
        } => {
            tracing::info!(kind = event.kind(), %user_id, username, email, "password change notification queued");
        }
        DomainEvent::ProjectCreated {
            created_by,
            project,
        } => {
            tracing::info!(
                kind = event.kind(),
                project_id = %project.project_id,
                creator = %created_by.user_id,
                title = %project.title,
                "project notification queued"
            );
        }
    }
}
