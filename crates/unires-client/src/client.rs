//! Results store client.
//!
//! This module provides the main `Client` struct: the query layer and the
//! scorecard aggregation behind one pooled handle.

use unires_core::{ResultFilter, ResultRow, Scorecard, StudentRecord, SummaryStats, University};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::pool::{ConnectionPool, PoolConfig};
use crate::{queries, schema};

/// A handle to the results store.
///
/// Construct one at startup, share it (it is cheap to clone), and call
/// [`Client::close`] at shutdown.
///
/// # Example
///
/// ```ignore
/// use unires_client::{Client, ClientConfig, PoolConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), unires_client::Error> {
///     let client = Client::connect(PoolConfig::new(ClientConfig::new("results.db"))).await?;
///
///     let card = client.scorecard("REG2021001").await?;
///     println!("{} scored {}%", card.name, card.percentage);
///
///     client.close();
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    pool: ConnectionPool,
}

impl Client {
    /// Open a pooled client.
    pub async fn connect(config: PoolConfig) -> Result<Self, Error> {
        let pool = ConnectionPool::new(config).await?;
        Ok(Self { pool })
    }

    /// Open a pooled client with default pool settings.
    pub async fn open(config: ClientConfig) -> Result<Self, Error> {
        Self::connect(PoolConfig::new(config)).await
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// All universities, ordered by name.
    pub async fn universities(&self) -> Result<Vec<University>, Error> {
        self.pool.run(queries::list_universities).await
    }

    /// Result rows matching `filter`, capped at the listing limit.
    pub async fn results(&self, filter: ResultFilter) -> Result<Vec<ResultRow>, Error> {
        self.pool
            .run(move |conn| queries::find_results(conn, &filter))
            .await
    }

    /// Look up a student by registration number.
    pub async fn student(&self, reg_no: impl Into<String>) -> Result<StudentRecord, Error> {
        let reg_no = reg_no.into();
        self.pool
            .run(move |conn| queries::find_student(conn, &reg_no))
            .await
    }

    /// Build the scorecard for a student.
    ///
    /// Fails with a not-found error when the registration number is unknown.
    pub async fn scorecard(&self, reg_no: impl Into<String>) -> Result<Scorecard, Error> {
        let reg_no = reg_no.into();
        let (student, subjects) = self
            .pool
            .run(move |conn| {
                let student = queries::find_student(conn, &reg_no)?;
                let subjects = queries::student_subjects(conn, student.id)?;
                Ok((student, subjects))
            })
            .await?;

        let card = Scorecard::build(student, subjects);
        tracing::debug!(
            reg_no = %card.reg_no,
            subjects = card.subject_count(),
            percentage = %card.percentage,
            status = %card.overall_status,
            "built scorecard"
        );
        Ok(card)
    }

    /// Portal-wide summary statistics.
    pub async fn stats(&self) -> Result<SummaryStats, Error> {
        let counts = self.pool.run(queries::summary_counts).await?;
        Ok(counts.into())
    }

    /// Check the store answers a trivial query.
    pub async fn ping(&self) -> Result<(), Error> {
        self.pool.run(queries::ping).await
    }

    /// Create any missing tables; returns the schema version.
    pub async fn init_schema(&self) -> Result<u32, Error> {
        self.pool.run(schema::apply).await
    }

    /// Close the underlying pool.
    pub fn close(&self) {
        self.pool.close();
    }
}
