//! `fieldops-events` — event sink abstraction and the fire-and-forget notifier.
//!
//! The engine publishes facts about committed work (bookings created,
//! bookings cancelled) to an external sink. This crate owns the sink
//! contract, an in-memory implementation for tests/dev, and the `Notifier`
//! wrapper that guarantees a publish failure can never fail the operation
//! that already committed.

pub mod in_memory;
pub mod notifier;
pub mod record;
pub mod sink;

pub use in_memory::{InMemoryEventSink, InMemorySinkError};
pub use notifier::Notifier;
pub use record::EventRecord;
pub use sink::{EventSink, Subscription};
