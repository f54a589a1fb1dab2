//! Fire-and-forget notification wrapper.

use tracing::warn;

use crate::record::EventRecord;
use crate::sink::EventSink;

/// Publishes engine events without ever propagating sink failures.
///
/// The scheduler calls this strictly *after* a booking has been durably
/// committed, so a lost notification must not fail the operation; it is
/// logged for the operator and otherwise swallowed.
#[derive(Debug, Clone)]
pub struct Notifier<S> {
    sink: S,
}

impl<S> Notifier<S>
where
    S: EventSink<EventRecord>,
{
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Publish, logging (not returning) any failure.
    pub fn notify(&self, record: EventRecord) {
        let name = record.name().to_string();
        if let Err(err) = self.sink.publish(record) {
            warn!(event = %name, error = ?err, "event publish failed; continuing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryEventSink;
    use chrono::Utc;
    use fieldops_core::OrganizationId;

    #[test]
    fn notify_delivers_to_subscribers() {
        let sink = InMemoryEventSink::new();
        let sub = sink.subscribe();
        let notifier = Notifier::new(sink);

        notifier.notify(EventRecord::new(
            OrganizationId::new(),
            "booking.created",
            Utc::now(),
            serde_json::json!({"ok": true}),
        ));

        let got = sub.drain();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name(), "booking.created");
    }

    #[test]
    fn notify_survives_a_sink_with_no_listeners() {
        let notifier = Notifier::new(InMemoryEventSink::new());
        notifier.notify(EventRecord::new(
            OrganizationId::new(),
            "booking.cancelled",
            Utc::now(),
            serde_json::Value::Null,
        ));
    }
}
