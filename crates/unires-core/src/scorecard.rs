//! Per-student scorecard aggregation.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::model::{ResultStatus, StudentRecord, SubjectResult};
use crate::tenths::Tenths;

/// Maximum marks available per subject.
pub const MAX_MARKS_PER_SUBJECT: u64 = 100;

/// Rendered in place of a rank when none is assigned.
pub const UNRANKED: &str = "N/A";

/// Marks obtained out of marks available, rendered as `"512/600"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarksTally {
    /// Sum of stored subject totals.
    pub obtained: u64,
    /// Subject count × [`MAX_MARKS_PER_SUBJECT`].
    pub max: u64,
}

impl fmt::Display for MarksTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.obtained, self.max)
    }
}

impl Serialize for MarksTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregated results for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    /// Student name.
    pub name: String,
    /// Registration number.
    pub reg_no: String,
    /// University name.
    pub university: String,
    /// Department name.
    pub department: String,
    /// Current semester.
    pub semester: u32,
    /// Admission year.
    pub year: i32,
    /// `percentage / 10`, rounded to one decimal.
    pub cgpa: Tenths,
    /// Subject lines, in the order given (code ascending from the store).
    pub subjects: Vec<SubjectResult>,
    /// Marks obtained out of marks available.
    pub total_marks: MarksTally,
    /// Rounded to one decimal; `0.0` when there are no subjects.
    pub percentage: Tenths,
    /// Pass iff every subject is a pass.
    pub overall_status: ResultStatus,
    /// Class rank; `None` serializes as `"N/A"`.
    #[serde(serialize_with = "serialize_rank")]
    pub rank: Option<u32>,
}

impl Scorecard {
    /// Aggregate a student's subject results.
    ///
    /// The stored per-subject totals are trusted as-is. A student with no
    /// subjects gets a `0/0` tally, `0.0` percentage and CGPA, and a
    /// vacuous `Pass`.
    pub fn build(student: StudentRecord, subjects: Vec<SubjectResult>) -> Self {
        let obtained: u64 = subjects.iter().map(|s| u64::from(s.total)).sum();
        let max = subjects.len() as u64 * MAX_MARKS_PER_SUBJECT;

        let percentage = Tenths::percent(obtained, max).unwrap_or(Tenths::ZERO);
        let cgpa = percentage.div10();

        let overall_status = if subjects.iter().all(|s| s.status.is_pass()) {
            ResultStatus::Pass
        } else {
            ResultStatus::Fail
        };

        Self {
            name: student.name,
            reg_no: student.reg_no,
            university: student.university,
            department: student.department,
            semester: student.current_semester,
            year: student.admission_year,
            cgpa,
            subjects,
            total_marks: MarksTally { obtained, max },
            percentage,
            overall_status,
            rank: student.rank.filter(|r| *r > 0),
        }
    }

    /// Number of subjects on the scorecard.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

fn serialize_rank<S: Serializer>(rank: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match rank {
        Some(rank) => serializer.serialize_u32(*rank),
        None => serializer.serialize_str(UNRANKED),
    }
}
