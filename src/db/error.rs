use thiserror::Error;

/// +----------------------------------------------------------+
/// | STRUCTS | TRAITS | ENUMS | FUNCTIONS                     |
/// +----------+-------+-------+------------------------------+
/// | Enums:                                                   |
/// |   - ConnectError                                         |
/// |   - StoreError                                           |
/// +----------------------------------------------------------+

/// Failure to establish the database connection.
///
/// Cloneable so a single shared attempt can report the same failure to every
/// caller that joined it. Never cached: the next `connect` retries.
#[derive(Debug, Clone, Error)]
pub enum ConnectError {
    /// The database could not be reached or refused the connection.
    #[error("database unreachable: {0}")]
    Unreachable(String),
}

/// Failure of a read or write issued through an established connection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection itself could not be established.
    #[error(transparent)]
    Connect(#[from] ConnectError),

    /// The driver reported a query or insert failure.
    #[error("database operation failed: {0}")]
    Query(#[from] mongodb::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_error_display() {
        let err = ConnectError::Unreachable("connection refused".to_string());
        assert_eq!(format!("{}", err), "database unreachable: connection refused");
    }

    #[test]
    fn test_store_error_wraps_connect_error_transparently() {
        let err = StoreError::from(ConnectError::Unreachable("timed out".to_string()));
        assert_eq!(format!("{}", err), "database unreachable: timed out");
    }
}
