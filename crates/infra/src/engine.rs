//! Composition root.
//!
//! Every collaborator (stores, geocoder, event sink) is passed in
//! explicitly; nothing here reaches for a global registry. The embedding
//! process constructs one `Engine` and hands out references to its parts.

use std::sync::Arc;

use fieldops_directory::{GeocodingProvider, ResourceDirectory, ResourceStore};
use fieldops_events::{EventRecord, EventSink, InMemoryEventSink, Notifier};
use fieldops_scheduling::{AvailabilityEngine, BookingScheduler, BookingStore, RetryPolicy};

use crate::stores::{InMemoryBookingStore, InMemoryResourceStore};

/// The wired-up authorization + scheduling engine.
pub struct Engine<B, R, G, S> {
    bookings: B,
    directory: ResourceDirectory<R, G>,
    availability: AvailabilityEngine<B>,
    scheduler: BookingScheduler<B, R, S>,
    sink: S,
}

impl<B, R, G, S> Engine<B, R, G, S>
where
    B: BookingStore + Clone,
    R: ResourceStore + Clone,
    G: GeocodingProvider,
    S: EventSink<EventRecord> + Clone,
{
    pub fn new(bookings: B, resources: R, geocoder: G, sink: S, retry: RetryPolicy) -> Self {
        let directory = ResourceDirectory::new(resources.clone(), geocoder);
        let availability = AvailabilityEngine::new(bookings.clone());
        let scheduler = BookingScheduler::new(
            bookings.clone(),
            resources,
            Notifier::new(sink.clone()),
            retry,
        );
        Self {
            bookings,
            directory,
            availability,
            scheduler,
            sink,
        }
    }

    pub fn directory(&self) -> &ResourceDirectory<R, G> {
        &self.directory
    }

    pub fn availability(&self) -> &AvailabilityEngine<B> {
        &self.availability
    }

    pub fn scheduler(&self) -> &BookingScheduler<B, R, S> {
        &self.scheduler
    }

    pub fn booking_store(&self) -> &B {
        &self.bookings
    }

    pub fn event_sink(&self) -> &S {
        &self.sink
    }
}

impl<G> Engine<Arc<InMemoryBookingStore>, Arc<InMemoryResourceStore>, G, Arc<InMemoryEventSink<EventRecord>>>
where
    G: GeocodingProvider,
{
    /// Dev/test wiring: in-memory stores, in-memory sink, default retries.
    pub fn in_memory(geocoder: G) -> Self {
        Engine::new(
            Arc::new(InMemoryBookingStore::new()),
            Arc::new(InMemoryResourceStore::new()),
            geocoder,
            Arc::new(InMemoryEventSink::new()),
            RetryPolicy::default(),
        )
    }
}
