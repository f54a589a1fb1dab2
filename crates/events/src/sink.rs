//! Event publishing/subscription abstraction (mechanics only).
//!
//! The sink is intentionally **lightweight** and transport-agnostic: the
//! production deployment backs it with whatever bus the platform runs
//! (message queue, webhook fan-out), tests use the in-memory implementation.
//! Delivery is at-least-once from the engine's perspective - the booking is
//! durably committed before anything is published, so a consumer seeing a
//! duplicate must treat it as idempotent.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

/// A subscription to a published message stream.
///
/// Each subscription receives a copy of every message published after it was
/// created (broadcast semantics). Designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently buffered.
    pub fn drain(&self) -> Vec<M> {
        let mut out = Vec::new();
        while let Ok(m) = self.receiver.try_recv() {
            out.push(m);
        }
        out
    }
}

/// Outbound event sink (pub/sub contract).
///
/// `publish` can fail (sink full, transport down); failures are surfaced to
/// the caller, which for this engine is always the `Notifier` - it logs and
/// moves on, because the work the event describes has already committed.
///
/// Implementations must be safe to share across request-handling threads.
pub trait EventSink<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, S> EventSink<M> for Arc<S>
where
    S: EventSink<M> + ?Sized,
{
    type Error = S::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
