//! Event bus abstraction and in-memory implementation

use crate::event::Event;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};

/// Event bus error types.
#[derive(Debug, Error)]
pub enum EventBusError {
    /// Failed to publish an event
    #[error("Failed to publish event: {0}")]
    Publish(String),

    /// Failed to subscribe to a topic
    #[error("Failed to subscribe: {0}")]
    Subscribe(String),

    /// Subscription channel closed
    #[error("Channel closed")]
    ChannelClosed,
}

/// Result type for event bus operations.
pub type EventBusResult<T> = Result<T, EventBusError>;

/// Subscription handle for receiving events.
pub struct Subscription {
    /// Topic pattern this subscription matches
    pub pattern: String,
    receiver: broadcast::Receiver<Event>,
}

impl Subscription {
    /// Receive the next event.
    pub async fn recv(&mut self) -> EventBusResult<Event> {
        self.receiver
            .recv()
            .await
            .map_err(|_| EventBusError::ChannelClosed)
    }
}

/// Event bus statistics.
#[derive(Debug, Clone, Default)]
pub struct EventBusStats {
    /// Total events published
    pub events_published: u64,
    /// Active subscription patterns
    pub active_patterns: usize,
}

/// Event bus for lifecycle announcements.
///
/// Publication is fire-and-forget: events published to patterns with no
/// live subscribers are dropped.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish an event.
    async fn publish(&self, event: Event) -> EventBusResult<()>;

    /// Subscribe to a topic pattern.
    ///
    /// Patterns are dot-separated; a `*` segment matches any single topic
    /// segment. `staff.*` matches `staff.separated` and `staff.finalized`
    /// but not `organization.admin_reassigned`.
    async fn subscribe(&self, pattern: &str) -> EventBusResult<Subscription>;

    /// Get bus statistics.
    async fn stats(&self) -> EventBusStats;
}

/// In-memory event bus over `tokio::sync::broadcast`.
///
/// Suitable for single-process deployments and tests.
pub struct MemoryEventBus {
    channels: RwLock<HashMap<String, broadcast::Sender<Event>>>,
    published: RwLock<u64>,
    channel_capacity: usize,
}

impl std::fmt::Debug for MemoryEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryEventBus")
            .field("channel_capacity", &self.channel_capacity)
            .finish()
    }
}

impl MemoryEventBus {
    /// Create a new in-memory bus with the default channel capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create with a custom per-pattern channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
            published: RwLock::new(0),
            channel_capacity: capacity,
        }
    }

    /// Check if a topic matches a pattern.
    ///
    /// Segment counts must agree; `*` matches exactly one segment.
    fn pattern_matches(pattern: &str, topic: &str) -> bool {
        let pattern_parts: Vec<&str> = pattern.split('.').collect();
        let topic_parts: Vec<&str> = topic.split('.').collect();

        pattern_parts.len() == topic_parts.len()
            && pattern_parts
                .iter()
                .zip(&topic_parts)
                .all(|(p, t)| *p == "*" || p == t)
    }
}

impl Default for MemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for MemoryEventBus {
    async fn publish(&self, event: Event) -> EventBusResult<()> {
        *self.published.write().await += 1;

        let channels = self.channels.read().await;
        for (pattern, sender) in channels.iter() {
            if Self::pattern_matches(pattern, &event.topic) {
                // A send error only means no live receivers remain.
                let _ = sender.send(event.clone());
            }
        }

        tracing::debug!(topic = %event.topic, event_id = %event.id, "event published");
        Ok(())
    }

    async fn subscribe(&self, pattern: &str) -> EventBusResult<Subscription> {
        let receiver = {
            let mut channels = self.channels.write().await;
            match channels.get(pattern) {
                Some(sender) => sender.subscribe(),
                None => {
                    let (sender, receiver) = broadcast::channel(self.channel_capacity);
                    channels.insert(pattern.to_string(), sender);
                    receiver
                }
            }
        };

        Ok(Subscription {
            pattern: pattern.to_string(),
            receiver,
        })
    }

    async fn stats(&self) -> EventBusStats {
        EventBusStats {
            events_published: *self.published.read().await,
            active_patterns: self.channels.read().await.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_pattern_matching() {
        assert!(MemoryEventBus::pattern_matches(
            "staff.separated",
            "staff.separated"
        ));
        assert!(MemoryEventBus::pattern_matches("staff.*", "staff.finalized"));
        assert!(MemoryEventBus::pattern_matches("*.deleted", "user.deleted"));

        assert!(!MemoryEventBus::pattern_matches("staff.*", "user.deleted"));
        assert!(!MemoryEventBus::pattern_matches(
            "staff.*",
            "organization.admin_reassigned"
        ));
        // Segment counts must agree.
        assert!(!MemoryEventBus::pattern_matches("staff.*", "staff"));
    }

    #[tokio::test]
    async fn test_publish_subscribe() {
        let bus = MemoryEventBus::new();
        let mut sub = bus.subscribe("staff.*").await.unwrap();

        let staff_id = Uuid::now_v7();
        bus.publish(Event::staff_separated(Uuid::now_v7(), staff_id))
            .await
            .unwrap();

        let received = tokio::time::timeout(std::time::Duration::from_millis(100), sub.recv())
            .await
            .expect("timed out")
            .unwrap();
        assert_eq!(received.user_id, Some(staff_id));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_succeeds() {
        let bus = MemoryEventBus::new();
        bus.publish(Event::user_deleted(Uuid::now_v7(), Uuid::now_v7()))
            .await
            .unwrap();

        let stats = bus.stats().await;
        assert_eq!(stats.events_published, 1);
        assert_eq!(stats.active_patterns, 0);
    }
}
