use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking request recorded against an event.
///
/// Created once and never updated or deleted. Nothing checks that the
/// referenced event exists or that the email has not booked before; the
/// store records whatever it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(rename = "eventId")]
    pub event_id: ObjectId,

    pub slug: String,

    pub email: String,

    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(event_id: ObjectId, slug: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            event_id,
            slug: slug.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_booking_carries_the_given_fields() {
        let event_id = ObjectId::new();
        let booking = Booking::new(event_id, "rustconf-2026", "ada@example.com");

        assert_eq!(booking.event_id, event_id);
        assert_eq!(booking.slug, "rustconf-2026");
        assert_eq!(booking.email, "ada@example.com");
        assert!(booking.id.is_none());
    }
}
