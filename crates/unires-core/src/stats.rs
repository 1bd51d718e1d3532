//! Portal-wide summary statistics.

use serde::Serialize;

use crate::tenths::Tenths;

/// Raw counts read from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Number of universities.
    pub universities: u64,
    /// Number of students.
    pub students: u64,
    /// Number of result rows.
    pub results: u64,
    /// Number of result rows with status Pass.
    pub passed: u64,
}

/// Summary statistics as served to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_universities: u64,
    pub total_students: u64,
    pub total_results: u64,
    /// `passed / results × 100`, rounded to one decimal; `0.0` with no results.
    pub pass_rate: Tenths,
}

impl From<SummaryCounts> for SummaryStats {
    fn from(counts: SummaryCounts) -> Self {
        Self {
            total_universities: counts.universities,
            total_students: counts.students,
            total_results: counts.results,
            pass_rate: Tenths::percent(counts.passed, counts.results).unwrap_or(Tenths::ZERO),
        }
    }
}
