//! Gateway configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use unires_client::config::DEFAULT_DB_PATH;
use unires_client::{ClientConfig, PoolConfig};

/// University results HTTP gateway command line arguments.
#[derive(Debug, Parser)]
#[command(name = "unires-gateway")]
#[command(version, about = "HTTP/JSON API for the university results portal")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, env = "UNIRES_LISTEN", default_value = "0.0.0.0:5000")]
    pub listen: String,

    /// Path to the results database.
    #[arg(short, long, env = "UNIRES_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Minimum number of pooled connections to open at startup.
    #[arg(long, env = "UNIRES_POOL_MIN", default_value_t = 1)]
    pub pool_min_connections: usize,

    /// Maximum number of pooled connections in use at once.
    #[arg(long, env = "UNIRES_POOL_MAX", default_value_t = 10)]
    pub pool_max_connections: usize,

    /// Timeout (ms) when acquiring a pooled connection.
    #[arg(long, env = "UNIRES_POOL_ACQUIRE_TIMEOUT_MS", default_value_t = 30_000)]
    pub pool_acquire_timeout_ms: u64,

    /// Time (ms) a statement waits on a locked database.
    #[arg(long, env = "UNIRES_BUSY_TIMEOUT_MS", default_value_t = 5_000)]
    pub busy_timeout_ms: u64,
}

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Path to the results database.
    pub db_path: PathBuf,
    /// Minimum number of pooled connections to open at startup.
    pub pool_min_connections: usize,
    /// Maximum number of pooled connections in use at once.
    pub pool_max_connections: usize,
    /// Timeout when acquiring a pooled connection.
    pub pool_acquire_timeout: Duration,
    /// Time a statement waits on a locked database.
    pub busy_timeout: Duration,
}

impl GatewayConfig {
    /// Pool configuration for the gateway's read-only store client.
    pub fn pool_config(&self) -> PoolConfig {
        let client = ClientConfig::new(&self.db_path)
            .read_only()
            .with_busy_timeout(self.busy_timeout);

        PoolConfig::new(client)
            .with_min_connections(self.pool_min_connections)
            .with_max_connections(self.pool_max_connections)
            .with_acquire_timeout(self.pool_acquire_timeout)
    }
}

impl From<&Args> for GatewayConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            db_path: args.db.clone(),
            pool_min_connections: args.pool_min_connections,
            pool_max_connections: args.pool_max_connections,
            pool_acquire_timeout: Duration::from_millis(args.pool_acquire_timeout_ms),
            busy_timeout: Duration::from_millis(args.busy_timeout_ms),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            pool_min_connections: 1,
            pool_max_connections: 10,
            pool_acquire_timeout: Duration::from_secs(30),
            busy_timeout: unires_client::config::DEFAULT_BUSY_TIMEOUT,
        }
    }
}
