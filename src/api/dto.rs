//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name                   | Description                                  | Key Methods       |
// |------------------------|----------------------------------------------|-------------------|
// | EventResponse          | Successful slug lookup payload               |                   |
// | SimilarEventsResponse  | Related listings payload                     |                   |
// | CreateBookingRequest   | Booking submission                           |                   |
// | BookingResponse        | Success/failure indicator for a booking      | success, failure  |
//--------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::domain::models::Event;

/// Response for a successful slug lookup.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub message: String,
    pub event: Event,
}

/// Related listings for an event; empty when nothing matches or the lookup
/// soft-failed.
#[derive(Debug, Serialize)]
pub struct SimilarEventsResponse {
    pub events: Vec<Event>,
}

/// Request to record a booking against an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Identifier of the referenced event. Not checked for existence.
    #[serde(rename = "eventId")]
    pub event_id: String,

    pub slug: String,

    pub email: String,
}

/// Boolean-only outcome of a booking request; callers never see why a
/// booking failed, only that it did.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
}

impl BookingResponse {
    pub fn success() -> Self {
        Self { success: true }
    }

    pub fn failure() -> Self {
        Self { success: false }
    }
}
