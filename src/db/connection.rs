//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module owns the single process-wide database connection. The manager caches the handle
// after the first successful attempt and deduplicates concurrent attempts, so N request tasks
// calling connect() at once produce exactly one establishment round-trip.
//
// | Component          | Description                                              |
// |--------------------|----------------------------------------------------------|
// | Connector          | Trait establishing the underlying connection             |
// | MongoConnector     | Connector backed by the MongoDB driver                   |
// | ConnectionManager  | Single-flight cache around a Connector                   |
//--------------------------------------------------------------------------------------------------

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::error::ConnectError;

/// A connection attempt shared between every caller that joined it.
type PendingAttempt<H> = Shared<BoxFuture<'static, Result<H, ConnectError>>>;

/// Establishes the underlying database connection.
///
/// Abstracted away from the single-flight cache so tests can substitute a
/// fake handle and count establishment attempts.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Handle: Clone + Send + Sync + 'static;

    async fn establish(&self) -> Result<Self::Handle, ConnectError>;
}

struct CacheState<H> {
    conn: Option<H>,
    pending: Option<PendingAttempt<H>>,
}

/// Process-wide cache around a single database connection.
///
/// `connect` is idempotent across calls: the first caller starts the attempt,
/// concurrent callers join it, and later callers get the cached handle
/// without suspending. A failed attempt is never cached; the next call
/// retries from scratch.
pub struct ConnectionManager<C: Connector> {
    connector: Arc<C>,
    state: Mutex<CacheState<C::Handle>>,
}

impl<C: Connector> ConnectionManager<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(connector),
            state: Mutex::new(CacheState {
                conn: None,
                pending: None,
            }),
        }
    }

    /// Returns the shared connection handle, establishing it on first use.
    ///
    /// At most one establishment attempt is in flight at any time; every
    /// caller that arrives while an attempt is pending awaits that same
    /// attempt and receives its result, success or failure.
    pub async fn connect(&self) -> Result<C::Handle, ConnectError> {
        let attempt = {
            let mut state = self.state.lock().await;
            if let Some(handle) = &state.conn {
                return Ok(handle.clone());
            }
            match &state.pending {
                Some(attempt) => attempt.clone(),
                None => {
                    let connector = Arc::clone(&self.connector);
                    let attempt = async move { connector.establish().await }.boxed().shared();
                    state.pending = Some(attempt.clone());
                    attempt
                }
            }
        };

        let result = attempt.clone().await;

        let mut state = self.state.lock().await;
        // Another waiter may have done the bookkeeping already, or a newer
        // attempt may have started after this one failed. Only touch the
        // pending slot while it still holds the attempt we awaited.
        let current = state
            .pending
            .as_ref()
            .is_some_and(|pending| pending.ptr_eq(&attempt));
        match result {
            Ok(handle) => {
                if current {
                    state.conn = Some(handle.clone());
                    state.pending = None;
                }
                Ok(handle)
            }
            Err(err) => {
                if current {
                    state.pending = None;
                }
                Err(err)
            }
        }
    }
}

/// Connector backed by the MongoDB driver.
///
/// Verifies the connection with a ping before handing out the database
/// handle, so a dead backend surfaces at connect time instead of operations
/// sitting in the driver's queue while it hunts for a server.
pub struct MongoConnector {
    uri: String,
    database: String,
}

impl MongoConnector {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }
}

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[async_trait]
impl Connector for MongoConnector {
    type Handle = Database;

    async fn establish(&self) -> Result<Database, ConnectError> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|err| ConnectError::Unreachable(err.to_string()))?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)
            .map_err(|err| ConnectError::Unreachable(err.to_string()))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| {
                warn!(error = %err, "mongodb ping failed");
                ConnectError::Unreachable(err.to_string())
            })?;

        info!(database = %self.database, "connected to mongodb");
        Ok(client.database(&self.database))
    }
}

/// The manager wired to the real driver, as used by the stores.
pub type MongoConnectionManager = ConnectionManager<MongoConnector>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Connector handing out numbered fake handles. Each establishment takes
    /// a short while, so concurrent callers overlap with a pending attempt.
    struct CountingConnector {
        attempts: AtomicUsize,
        fail_next: AtomicBool,
    }

    impl CountingConnector {
        fn new() -> Self {
            Self {
                attempts: AtomicUsize::new(0),
                fail_next: AtomicBool::new(false),
            }
        }

        fn failing_once() -> Self {
            Self {
                attempts: AtomicUsize::new(0),
                fail_next: AtomicBool::new(true),
            }
        }

        fn attempts(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Connector for CountingConnector {
        type Handle = usize;

        async fn establish(&self) -> Result<usize, ConnectError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            // Keep the attempt pending long enough for concurrent callers to join it.
            tokio::time::sleep(Duration::from_millis(50)).await;
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(ConnectError::Unreachable("simulated outage".to_string()));
            }
            Ok(attempt)
        }
    }

    #[tokio::test]
    async fn test_concurrent_connects_share_one_attempt() {
        // Setup
        let manager = Arc::new(ConnectionManager::new(CountingConnector::new()));

        // Execute - 16 tasks race to connect while no handle exists
        let mut tasks = Vec::new();
        for _ in 0..16 {
            let manager = Arc::clone(&manager);
            tasks.push(tokio::spawn(async move { manager.connect().await }));
        }
        let mut handles = Vec::new();
        for task in tasks {
            handles.push(task.await.unwrap().unwrap());
        }

        // Verify - exactly one establishment, all callers got the same handle
        assert_eq!(manager.connector.attempts(), 1);
        assert!(handles.iter().all(|handle| *handle == handles[0]));
    }

    #[tokio::test]
    async fn test_cached_handle_skips_new_attempts() {
        // Setup
        let manager = ConnectionManager::new(CountingConnector::new());

        // Execute
        let first = manager.connect().await.unwrap();
        let second = manager.connect().await.unwrap();

        // Verify
        assert_eq!(first, second);
        assert_eq!(manager.connector.attempts(), 1);
    }

    #[tokio::test]
    async fn test_failed_attempt_is_not_cached() {
        // Setup
        let manager = ConnectionManager::new(CountingConnector::failing_once());

        // Execute
        let first = manager.connect().await;
        let second = manager.connect().await;

        // Verify - the failure propagated, the retry started a fresh attempt
        assert!(first.is_err());
        assert_eq!(second.unwrap(), 2);
        assert_eq!(manager.connector.attempts(), 2);
    }

    #[tokio::test]
    async fn test_all_waiters_see_the_same_failure() {
        // Setup
        let manager = Arc::new(ConnectionManager::new(CountingConnector::failing_once()));

        // Execute - several tasks join the one failing attempt
        let mut tasks = Vec::new();
        for _ in 0..8 {
            let manager = Arc::clone(&manager);
            tasks.push(tokio::spawn(async move { manager.connect().await }));
        }
        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.unwrap());
        }

        // Verify - one attempt, every waiter failed identically
        assert_eq!(manager.connector.attempts(), 1);
        for result in results {
            let err = result.unwrap_err();
            assert_eq!(format!("{}", err), "database unreachable: simulated outage");
        }
    }
}
