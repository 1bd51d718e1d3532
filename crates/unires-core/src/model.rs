//! Entity and row types read from the results store.
//!
//! All types here are read-only projections; the store is populated by an
//! external administrative process.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// City or campus location.
    pub location: String,
}

/// An academic department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// A subject in the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Primary key.
    pub id: i64,
    /// Curriculum code, unique per curriculum.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Letter grade awarded for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 6] = [Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// The stored / wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| Error::InvalidValue {
                kind: "grade",
                value: s.to_string(),
            })
    }
}

/// Pass/fail outcome of a single result, or of a whole scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl ResultStatus {
    /// The stored / wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "Pass",
            ResultStatus::Fail => "Fail",
        }
    }

    /// Check if this is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, ResultStatus::Pass)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pass" => Ok(ResultStatus::Pass),
            "Fail" => Ok(ResultStatus::Fail),
            other => Err(Error::InvalidValue {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// A result joined with student, university and subject display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Result primary key.
    pub id: i64,
    /// Student registration number.
    pub reg_no: String,
    /// Student name.
    pub student_name: String,
    /// University name.
    pub university: String,
    /// Semester the result belongs to.
    pub semester: u32,
    /// Subject name.
    pub subject: String,
    /// Total marks (internal + external, as stored).
    pub marks: u32,
    /// Letter grade.
    pub grade: Grade,
    /// Pass/fail.
    pub status: ResultStatus,
    /// Examination year.
    pub year: i32,
}

/// A student joined with its university and department names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Primary key.
    pub id: i64,
    /// Registration number (external lookup key).
    pub reg_no: String,
    /// Full name.
    pub name: String,
    /// University reference.
    pub university_id: i64,
    /// University display name.
    pub university: String,
    /// Department reference.
    pub department_id: i64,
    /// Department display name.
    pub department: String,
    /// Semester the student is currently in.
    pub current_semester: u32,
    /// Year of admission.
    pub admission_year: i32,
    /// Class rank, if one has been assigned.
    pub rank: Option<u32>,
}

/// One subject line of a student's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectResult {
    /// Subject code.
    pub code: String,
    /// Subject name.
    pub name: String,
    /// Internal assessment marks.
    pub internal: u32,
    /// External examination marks.
    pub external: u32,
    /// Stored total marks.
    pub total: u32,
    /// Letter grade.
    pub grade: Grade,
    /// Pass/fail.
    pub status: ResultStatus,
}
