//! University results portal domain core.
//!
//! Pure types and functions shared by the store client, the HTTP gateway and
//! the CLI. Nothing here performs I/O.
//!
//! # Modules
//!
//! - [`model`] - Entities and joined row types
//! - [`filter`] - Typed, validated result filters
//! - [`scorecard`] - Per-student aggregation
//! - [`stats`] - Portal-wide summary statistics
//! - [`tenths`] - One-decimal rounding
//! - [`error`] - Domain error types

pub mod error;
pub mod filter;
pub mod model;
pub mod scorecard;
pub mod stats;
pub mod tenths;

pub use error::Error;

// Re-export commonly used types at crate root
pub use filter::{ResultFilter, RESULT_ROW_LIMIT};
pub use model::{
    Department, Grade, ResultRow, ResultStatus, StudentRecord, Subject, SubjectResult, University,
};
pub use scorecard::{MarksTally, Scorecard};
pub use stats::{SummaryCounts, SummaryStats};
pub use tenths::Tenths;
