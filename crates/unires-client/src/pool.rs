//! Connection pooling for the results store.
//!
//! SQLite calls block, so every operation runs on tokio's blocking pool with
//! a connection checked out for its duration. A semaphore bounds how many
//! operations run at once.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rusqlite::Connection;
use tokio::sync::Semaphore;

use crate::config::ClientConfig;
use crate::connection;
use crate::error::Error;

/// Configuration for the connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Connections opened eagerly when the pool is created.
    pub min_connections: usize,
    /// Maximum number of connections in use at once.
    pub max_connections: usize,
    /// Timeout for acquiring a connection from the pool.
    pub acquire_timeout: Duration,
    /// Configuration for opening new connections.
    pub client_config: ClientConfig,
}

impl PoolConfig {
    /// Create a new pool configuration for the given database file.
    pub fn new(client_config: ClientConfig) -> Self {
        Self {
            min_connections: 1,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            client_config,
        }
    }

    /// Set the minimum connections.
    pub fn with_min_connections(mut self, min: usize) -> Self {
        self.min_connections = min;
        self
    }

    /// Set the maximum connections.
    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the acquire timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.max_connections == 0 {
            return Err(Error::Pool("max_connections must be at least 1".to_string()));
        }
        if self.min_connections > self.max_connections {
            return Err(Error::Pool("min_connections cannot exceed max_connections".to_string()));
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

/// Internal pool state.
struct ConnectionPoolInner {
    config: PoolConfig,
    idle: Mutex<Vec<Connection>>,
    semaphore: Arc<Semaphore>,
}

impl ConnectionPoolInner {
    fn checkout(&self) -> Result<Connection, Error> {
        if let Some(conn) = self.idle.lock().pop() {
            return Ok(conn);
        }
        connection::establish(&self.config.client_config)
    }

    fn checkin(&self, conn: Connection) {
        // Closed pools drop connections instead of parking them.
        if self.semaphore.is_closed() {
            return;
        }
        let mut idle = self.idle.lock();
        if idle.len() < self.config.max_connections {
            idle.push(conn);
        }
    }
}

/// A bounded pool of SQLite connections.
///
/// Cloning is cheap; clones share the same connections.
///
/// # Example
///
/// ```ignore
/// use unires_client::{ClientConfig, ConnectionPool, PoolConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), unires_client::Error> {
///     let pool = ConnectionPool::new(PoolConfig::new(ClientConfig::new("results.db"))).await?;
///
///     let one: i64 = pool
///         .run(|conn| Ok(conn.query_row("SELECT 1", [], |row| row.get(0))?))
///         .await?;
///
///     pool.close();
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ConnectionPool {
    inner: Arc<ConnectionPoolInner>,
}

impl ConnectionPool {
    /// Create a new connection pool, opening `min_connections` up front.
    pub async fn new(config: PoolConfig) -> Result<Self, Error> {
        config.validate()?;

        let client_config = config.client_config.clone();
        let min = config.min_connections;
        let initial = tokio::task::spawn_blocking(move || {
            (0..min)
                .map(|_| connection::establish(&client_config))
                .collect::<Result<Vec<_>, _>>()
        })
        .await
        .map_err(|e| Error::Pool(format!("failed to open connections: {}", e)))??;

        tracing::info!(
            path = %config.client_config.path.display(),
            min_connections = config.min_connections,
            max_connections = config.max_connections,
            read_only = config.client_config.read_only,
            "opened connection pool"
        );

        let semaphore = Arc::new(Semaphore::new(config.max_connections));
        Ok(Self {
            inner: Arc::new(ConnectionPoolInner {
                config,
                idle: Mutex::new(initial),
                semaphore,
            }),
        })
    }

    /// Run an operation against a pooled connection.
    ///
    /// Waits up to the acquire timeout for a free slot, then runs `op` on the
    /// blocking thread pool.
    pub async fn run<T, F>(&self, op: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let permit = tokio::time::timeout(
            self.inner.config.acquire_timeout,
            Arc::clone(&self.inner.semaphore).acquire_owned(),
        )
        .await
        .map_err(|_| Error::Timeout)?
        .map_err(|_| Error::PoolClosed)?;

        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let conn = inner.checkout()?;
            let result = op(&conn);
            inner.checkin(conn);
            result
        })
        .await
        .map_err(|e| Error::Pool(format!("store task failed: {}", e)))?
    }

    /// Close the pool. Idle connections are dropped and later operations
    /// fail with [`Error::PoolClosed`]; operations already running finish.
    pub fn close(&self) {
        self.inner.semaphore.close();
        let dropped = {
            let mut idle = self.inner.idle.lock();
            let count = idle.len();
            idle.clear();
            count
        };
        tracing::info!(idle_closed = dropped, "closed connection pool");
    }

    /// Check if the pool has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.semaphore.is_closed()
    }

    /// Get the current number of idle connections.
    pub fn idle_connections(&self) -> usize {
        self.inner.idle.lock().len()
    }

    /// Number of operations that could start right now.
    pub fn available_slots(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    /// Get the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.inner.config
    }
}

impl std::fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("path", &self.inner.config.client_config.path)
            .field("max_connections", &self.inner.config.max_connections)
            .field("closed", &self.is_closed())
            .finish()
    }
}
