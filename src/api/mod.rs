//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module implements the REST API using Axum for the event-listing service.
// It provides endpoints for event lookup, similar-events retrieval, and bookings.
//
// | Component      | Description                                                |
// |----------------|-----------------------------------------------------------|
// | API            | Main API structure coordinating routes and stores          |
// | Routes         | Handler functions for API endpoints                        |
// | AppState       | Shared application state                                   |
// | DTOs           | Data transfer objects for API requests/responses           |
//--------------------------------------------------------------------------------------------------

mod dto;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::stores::{BookingStore, EventStore};

pub use dto::*;
pub use error::{ApiError, ApiResult};

/// Shared application state accessible by all handlers
pub struct AppState {
    /// Read access to the event collection
    pub events: Arc<dyn EventStore>,
    /// Write access to the booking collection
    pub bookings: Arc<dyn BookingStore>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(events: Arc<dyn EventStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { events, bookings }
    }
}

/// Main API structure
pub struct Api {
    /// API address
    addr: SocketAddr,
    /// Shared application state
    state: Arc<AppState>,
}

impl Api {
    /// Creates a new API instance
    pub fn new(addr: SocketAddr, events: Arc<dyn EventStore>, bookings: Arc<dyn BookingStore>) -> Self {
        let state = Arc::new(AppState::new(events, bookings));
        Self { addr, state }
    }

    /// Creates all routes for the API
    pub fn routes(&self) -> Router {
        // Allow the local frontend origins to call the API directly
        let cors = CorsLayer::new()
            .allow_origin([
                "http://localhost:3000".parse::<HeaderValue>().unwrap(),
                "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
            ])
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

        Router::new()
            // Health check
            .route("/health", get(routes::health))
            // Event lookup
            .route("/events/:slug", get(routes::get_event))
            .route("/events/:slug/similar", get(routes::get_similar_events))
            // Bookings
            .route("/bookings", post(routes::create_booking))
            // Attach application state
            .layer(Extension(self.state.clone()))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Starts the API server and runs until shutdown
    pub async fn serve(self) -> anyhow::Result<()> {
        let app = self.routes();

        info!(addr = %self.addr, "API listening");
        let listener = TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
