// Expose the modules
pub mod api;
pub mod config;
pub mod db;
pub mod domain;

// Re-export key types for easier usage
pub use api::{Api, ApiError, ApiResult, AppState};
pub use config::Config;
pub use db::{
    ConnectError, ConnectionManager, Connector, MongoConnectionManager, MongoConnector, StoreError,
};
pub use domain::models::{Booking, Event};
pub use domain::stores::{BookingStore, EventStore, MongoBookingStore, MongoEventStore};
