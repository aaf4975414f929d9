/// +----------------------------------------------------------+
/// | MODULES                                                  |
/// +----------+-------+-------+------------------------------+
/// | Exports:                                                 |
/// |   - event_store                                          |
/// |   - booking_store                                        |
/// +----------------------------------------------------------+

/// Event reads: slug lookup and the similar-events query.
pub mod event_store;

/// Booking writes.
pub mod booking_store;

pub use booking_store::{BOOKINGS_COLLECTION, BookingStore, MongoBookingStore};
pub use event_store::{EVENTS_COLLECTION, EventStore, MongoEventStore};
