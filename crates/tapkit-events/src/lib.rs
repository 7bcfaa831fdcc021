//! # Tapkit Events
//!
//! Lightweight publish/subscribe events for the Tapkit platform. Lifecycle
//! outcomes (staff separation, finalization, user deletion, admin
//! reassignment) are announced on the bus so other services can react:
//! revoking sessions, updating search indexes, sending notices.
//!
//! Event publication is best-effort: a failing or absent subscriber never
//! fails the operation that produced the event.
//!
//! ## Usage
//!
//! ```rust
//! use tapkit_events::{Event, EventBus, MemoryEventBus};
//!
//! # async fn example() -> Result<(), tapkit_events::EventBusError> {
//! let bus = MemoryEventBus::new();
//! let mut sub = bus.subscribe("staff.*").await?;
//!
//! let event = Event::staff_separated(uuid::Uuid::now_v7(), uuid::Uuid::now_v7());
//! bus.publish(event).await?;
//! # Ok(())
//! # }
//! ```

pub mod bus;
pub mod event;

pub use bus::{EventBus, EventBusError, EventBusResult, EventBusStats, MemoryEventBus, Subscription};
pub use event::Event;
