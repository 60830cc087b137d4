//! Bounded ordered channel for domain events.
//!
//! [`EventBus`] wraps a [`tokio::sync::mpsc`] channel of fixed capacity
//! (default 10). Every state mutation publishes a [`DomainEvent`] through
//! the bus; one background [`Subscription`] loop drains it in FIFO order.
//!
//! `publish` suspends the calling flow while the buffer is full, so slow
//! subscribers exert backpressure on fast producers instead of dropping
//! events. The bus closes when every publisher handle has been dropped;
//! events already enqueued are still drained before the subscriber loop
//! terminates. There is exactly one terminal state.
//!
//! Invariant: each bus instance needs at least one running subscriber
//! loop, otherwise publishers stall indefinitely once the buffer fills.

use tokio::sync::mpsc;

use super::event::DomainEvent;

/// Error returned by [`EventBus::publish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    /// The bus is closed; no further sends are permitted.
    #[error("event bus is closed")]
    Closed,
}

/// Cloneable publisher handle for the domain event channel.
///
/// Created together with its single [`Subscription`] via
/// [`EventBus::bounded`]. Services hold clones of this handle; the
/// channel stays open as long as any clone is alive.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: mpsc::Sender<DomainEvent>,
}

impl EventBus {
    /// Creates a bus with the given buffer capacity and its consumer end.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero (a zero-capacity buffer cannot
    /// provide the publish-then-drain contract).
    #[must_use]
    pub fn bounded(capacity: usize) -> (Self, Subscription) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, Subscription { receiver })
    }

    /// Publishes an event, suspending while the buffer is full.
    ///
    /// Events are delivered to the subscriber in publish order, exactly
    /// once each.
    ///
    /// # Errors
    ///
    /// Returns [`EventBusError::Closed`] if the consumer end is gone.
    pub async fn publish(&self, event: DomainEvent) -> Result<(), EventBusError> {
        self.sender
            .send(event)
            .await
            .map_err(|_| EventBusError::Closed)
    }

    /// Returns the fixed buffer capacity of the channel.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.sender.max_capacity()
    }
}

/// The single consumer end of an [`EventBus`].
///
/// Obtained once from [`EventBus::bounded`]; there is no way to create a
/// second consumer, which is what makes sequential FIFO delivery a
/// structural property rather than a convention.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<DomainEvent>,
}

impl Subscription {
    /// Receives the next event in FIFO order.
    ///
    /// Returns `None` once the bus is closed and fully drained.
    pub async fn recv(&mut self) -> Option<DomainEvent> {
        self.receiver.recv().await
    }

    /// Runs the subscriber loop until the bus is closed and drained.
    ///
    /// Each event is handled to completion before the next one is taken
    /// off the channel; a slow handler therefore delays every subsequent
    /// delivery, by design of the ordering contract.
    pub async fn run<H, Fut>(mut self, mut handler: H)
    where
        H: FnMut(DomainEvent) -> Fut,
        Fut: Future<Output = ()>,
    {
        while let Some(event) = self.receiver.recv().await {
            handler(event).await;
        }
        tracing::debug!("event bus closed, subscriber loop terminating");
    }
}
