//! Results store client - pooled access to the university results database.
//!
//! This crate provides the query layer over the results schema and the async
//! [`Client`] that runs it on a bounded connection pool.
//!
//! # Quick Start
//!
//! ```ignore
//! use unires_client::{Client, ClientConfig, PoolConfig};
//! use unires_core::ResultFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::new(ClientConfig::new("results.db").read_only())
//!         .with_max_connections(8);
//!     let client = Client::connect(config).await?;
//!
//!     let rows = client
//!         .results(ResultFilter::new().with_semester(3).with_year(2023))
//!         .await?;
//!     println!("Found {} results", rows.len());
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod pool;
pub mod queries;
pub mod schema;

pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use pool::{ConnectionPool, PoolConfig};

/// Re-export domain types.
pub use unires_core as domain;
