/// +----------------------------------------------------------+
/// | MODULES                                                  |
/// +----------+-------+-------+------------------------------+
/// | Exports:                                                 |
/// |   - connection                                           |
/// |   - error                                                |
/// +----------------------------------------------------------+

/// Single-flight connection cache and the MongoDB connector.
pub mod connection;

/// Error types for the database layer.
pub mod error;

pub use connection::{ConnectionManager, Connector, MongoConnectionManager, MongoConnector};
pub use error::{ConnectError, StoreError};
