use std::sync::Arc;

use tracing::info;

use eventline::{
    Api, Config, ConnectionManager, MongoBookingStore, MongoConnector, MongoEventStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (for logging)
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // One manager per process; every store connects through it.
    let manager = Arc::new(ConnectionManager::new(MongoConnector::new(
        &config.mongodb_uri,
        &config.database,
    )));

    let events = Arc::new(MongoEventStore::new(Arc::clone(&manager)));
    let bookings = Arc::new(MongoBookingStore::new(manager));

    info!(addr = %config.listen_addr, database = %config.database, "starting eventline");
    Api::new(config.listen_addr, events, bookings).serve().await
}
