//! Cross-crate integration tests for the wired engine.
//!
//! Covers the end-to-end flows the unit tests cannot: concurrent booking
//! races, event publication ordering, and geocoding-outage tolerance
//! through the full composition.

use std::sync::Arc;
use std::thread;

use chrono::{DateTime, TimeZone, Utc};

use fieldops_auth::{Principal, Role};
use fieldops_core::{DomainError, OrganizationId, PrincipalId, ResourceId, TimeRange};
use fieldops_directory::{GeoPoint, GeocodingProvider, NewResource, ResourceDetails, ResourceKind};
use fieldops_events::{EventRecord, EventSink, InMemoryEventSink};
use fieldops_scheduling::{Booking, CancelBooking, RequestBooking};

use crate::engine::Engine;
use crate::geocoding::{OfflineGeocoder, StaticGeocoder};
use crate::stores::{InMemoryBookingStore, InMemoryResourceStore};

type TestEngine = Engine<
    Arc<InMemoryBookingStore>,
    Arc<InMemoryResourceStore>,
    OfflineGeocoder,
    Arc<InMemoryEventSink<EventRecord>>,
>;

/// In-memory wiring with process logging up, so the tolerated-failure
/// warnings from the geocoder and sink paths are visible under RUST_LOG.
fn engine_with<G: GeocodingProvider>(
    geocoder: G,
) -> Engine<Arc<InMemoryBookingStore>, Arc<InMemoryResourceStore>, G, Arc<InMemoryEventSink<EventRecord>>>
{
    fieldops_observability::init();
    Engine::in_memory(geocoder)
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, min, 0).unwrap()
}

fn period(h1: u32, m1: u32, h2: u32, m2: u32) -> TimeRange {
    TimeRange::new(at(h1, m1), at(h2, m2)).unwrap()
}

fn staff(org: OrganizationId) -> Principal {
    Principal::new(PrincipalId::new(), Role::Staff, org)
}

fn seed_kit(engine: &TestEngine, org: OrganizationId, name: &str) -> ResourceId {
    engine
        .directory()
        .create(NewResource {
            organization_id: org,
            details: ResourceDetails::Kit {
                name: name.to_string(),
                asset_tag: None,
            },
            created_at: at(0, 0),
        })
        .unwrap()
        .id_typed()
}

fn request(resource_id: ResourceId, p: TimeRange) -> RequestBooking {
    RequestBooking {
        resource_id,
        period: p,
        requested_at: at(8, 0),
    }
}

fn assert_no_blocking_overlaps(bookings: &[Booking]) {
    let blocking: Vec<&Booking> = bookings.iter().filter(|b| b.blocks_timeline()).collect();
    for (i, a) in blocking.iter().enumerate() {
        for b in &blocking[i + 1..] {
            if a.resource_id() == b.resource_id() {
                assert!(
                    !a.period().overlaps(&b.period()),
                    "bookings {} and {} overlap on resource {}",
                    a.id_typed(),
                    b.id_typed(),
                    a.resource_id()
                );
            }
        }
    }
}

#[test]
fn location_created_during_geocoder_outage_is_bookable() {
    let engine = engine_with(OfflineGeocoder);
    let org = OrganizationId::new();

    let location = engine
        .directory()
        .create(NewResource {
            organization_id: org,
            details: ResourceDetails::Location {
                name: "river site".to_string(),
                address: "99 Floodplain Rd".to_string(),
                geo: None,
            },
            created_at: at(0, 0),
        })
        .unwrap();
    assert_eq!(location.geo(), None);

    let booking = engine
        .scheduler()
        .request_booking(&staff(org), request(location.id_typed(), period(10, 0, 11, 0)))
        .unwrap();
    assert_eq!(booking.resource_id(), location.id_typed());
}

#[test]
fn geocoded_location_carries_coordinates() {
    let point = GeoPoint { lat: 52.1, lng: 4.3 };
    let geocoder = StaticGeocoder::new().with("1 Depot Way", point);
    let engine = engine_with(geocoder);

    let location = engine
        .directory()
        .create(NewResource {
            organization_id: OrganizationId::new(),
            details: ResourceDetails::Location {
                name: "depot".to_string(),
                address: "1 Depot Way".to_string(),
                geo: None,
            },
            created_at: at(0, 0),
        })
        .unwrap();
    assert_eq!(location.geo(), Some(point));
}

#[test]
fn availability_reflects_committed_bookings() {
    let engine = engine_with(OfflineGeocoder);
    let org = OrganizationId::new();
    let kit = seed_kit(&engine, org, "kit-1");

    engine
        .scheduler()
        .request_booking(&staff(org), request(kit, period(10, 0, 11, 0)))
        .unwrap();

    let free = engine
        .availability()
        .availability(kit, period(9, 0, 17, 0))
        .unwrap();
    assert_eq!(free, vec![period(9, 0, 10, 0), period(11, 0, 17, 0)]);
}

#[test]
fn booking_lifecycle_publishes_created_then_cancelled() {
    let engine = engine_with(OfflineGeocoder);
    let sub = engine.event_sink().subscribe();
    let org = OrganizationId::new();
    let kit = seed_kit(&engine, org, "kit-1");
    let principal = staff(org);

    let booking = engine
        .scheduler()
        .request_booking(&principal, request(kit, period(10, 0, 11, 0)))
        .unwrap();
    engine
        .scheduler()
        .cancel_booking(
            &principal,
            CancelBooking {
                booking_id: booking.id_typed(),
                requested_at: at(9, 0),
            },
        )
        .unwrap();
    // Idempotent repeat publishes nothing.
    engine
        .scheduler()
        .cancel_booking(
            &principal,
            CancelBooking {
                booking_id: booking.id_typed(),
                requested_at: at(9, 5),
            },
        )
        .unwrap();

    let names: Vec<String> = sub.drain().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["booking.created", "booking.cancelled"]);

    // The freed window books again.
    engine
        .scheduler()
        .request_booking(&principal, request(kit, period(10, 0, 11, 0)))
        .unwrap();
}

#[test]
fn fifty_concurrent_identical_requests_produce_exactly_one_booking() {
    let engine = engine_with(OfflineGeocoder);
    let org = OrganizationId::new();
    let kit = seed_kit(&engine, org, "kit-1");

    let outcomes: Vec<Result<Booking, DomainError>> = thread::scope(|s| {
        let handles: Vec<_> = (0..50)
            .map(|_| {
                let engine = &engine;
                let principal = staff(org);
                s.spawn(move || {
                    engine
                        .scheduler()
                        .request_booking(&principal, request(kit, period(10, 0, 11, 0)))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let wins = outcomes.iter().filter(|r| r.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|r| matches!(r, Err(DomainError::Conflict(_))))
        .count();
    assert_eq!(wins, 1);
    assert_eq!(conflicts, 49);

    assert_no_blocking_overlaps(&engine.booking_store().all());
}

#[test]
fn concurrent_overlapping_requests_never_double_book() {
    let engine = engine_with(OfflineGeocoder);
    let org = OrganizationId::new();
    let kit = seed_kit(&engine, org, "kit-1");

    // 24 staggered one-hour requests, each overlapping its neighbors by 30
    // minutes. At most every other one can win.
    thread::scope(|s| {
        for i in 0..24u32 {
            let engine = &engine;
            let principal = staff(org);
            s.spawn(move || {
                let start = at(9, 0) + chrono::Duration::minutes(30 * i as i64);
                let p = TimeRange::new(start, start + chrono::Duration::hours(1)).unwrap();
                let _ = engine.scheduler().request_booking(&principal, request(kit, p));
            });
        }
    });

    let committed = engine.booking_store().all();
    assert!(!committed.is_empty());
    assert_no_blocking_overlaps(&committed);
}

#[test]
fn requests_for_different_resources_do_not_contend() {
    let engine = engine_with(OfflineGeocoder);
    let org = OrganizationId::new();
    let kit_a = seed_kit(&engine, org, "kit-a");
    let kit_b = seed_kit(&engine, org, "kit-b");

    let outcomes: Vec<Result<Booking, DomainError>> = thread::scope(|s| {
        [kit_a, kit_b]
            .into_iter()
            .map(|kit| {
                let engine = &engine;
                let principal = staff(org);
                s.spawn(move || {
                    engine
                        .scheduler()
                        .request_booking(&principal, request(kit, period(10, 0, 11, 0)))
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect()
    });

    assert!(outcomes.iter().all(|r| r.is_ok()));
}

#[test]
fn super_admin_books_across_organizations() {
    let engine = engine_with(OfflineGeocoder);
    let org = OrganizationId::new();
    let kit = seed_kit(&engine, org, "kit-1");

    let operator = Principal::new(PrincipalId::new(), Role::SuperAdmin, OrganizationId::new());
    let booking = engine
        .scheduler()
        .request_booking(&operator, request(kit, period(10, 0, 11, 0)))
        .unwrap();
    // The booking lands in the resource's organization, not the operator's.
    assert_eq!(booking.organization_id(), org);

    // A plain admin from another organization stays locked out.
    let outsider = Principal::new(PrincipalId::new(), Role::Admin, OrganizationId::new());
    let err = engine
        .scheduler()
        .request_booking(&outsider, request(kit, period(12, 0, 13, 0)))
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized(_)));
}

#[test]
fn directory_listing_scopes_by_organization() {
    let engine = engine_with(OfflineGeocoder);
    let org_a = OrganizationId::new();
    let org_b = OrganizationId::new();
    seed_kit(&engine, org_a, "kit-a1");
    seed_kit(&engine, org_a, "kit-a2");
    seed_kit(&engine, org_b, "kit-b1");

    assert_eq!(engine.directory().list(org_a, ResourceKind::Kit).unwrap().len(), 2);
    assert_eq!(engine.directory().list(org_b, ResourceKind::Kit).unwrap().len(), 1);
}
