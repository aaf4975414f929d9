/// Document models stored in the database.
pub mod models;

/// Read and write access to the collections.
pub mod stores;
