use std::sync::Arc;

use async_trait::async_trait;
use mongodb::Collection;

use crate::db::{MongoConnectionManager, StoreError};
use crate::domain::models::Booking;

pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Write access to the booking collection.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Inserts one booking record.
    ///
    /// No duplicate check and no existence check on the referenced event;
    /// a booking against an unknown event identifier is recorded as-is.
    async fn create(&self, booking: Booking) -> Result<(), StoreError>;
}

/// `BookingStore` backed by MongoDB, connecting through the shared manager.
pub struct MongoBookingStore {
    manager: Arc<MongoConnectionManager>,
}

impl MongoBookingStore {
    pub fn new(manager: Arc<MongoConnectionManager>) -> Self {
        Self { manager }
    }

    async fn bookings(&self) -> Result<Collection<Booking>, StoreError> {
        let db = self.manager.connect().await?;
        Ok(db.collection(BOOKINGS_COLLECTION))
    }
}

#[async_trait]
impl BookingStore for MongoBookingStore {
    async fn create(&self, booking: Booking) -> Result<(), StoreError> {
        let bookings = self.bookings().await?;
        bookings.insert_one(&booking).await?;
        Ok(())
    }
}
