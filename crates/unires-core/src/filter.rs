//! Typed filter for result listings.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maximum number of rows a result listing returns.
pub const RESULT_ROW_LIMIT: u32 = 200;

/// Accepted semester numbers.
pub const SEMESTER_RANGE: RangeInclusive<u32> = 1..=12;

/// Accepted examination years.
pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=9999;

/// Optional equality filters over result rows.
///
/// Every supplied field must match (AND semantics); a `None` field imposes
/// no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilter {
    /// Restrict to results recorded against this university.
    pub university: Option<i64>,
    /// Restrict to this semester.
    pub semester: Option<u32>,
    /// Restrict to this examination year.
    pub year: Option<i32>,
}

impl ResultFilter {
    /// Create an empty filter matching every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a university.
    pub fn with_university(mut self, university: i64) -> Self {
        self.university = Some(university);
        self
    }

    /// Restrict to a semester.
    pub fn with_semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Restrict to a year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Check if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.university.is_none() && self.semester.is_none() && self.year.is_none()
    }

    /// Build a filter from raw query-string values.
    ///
    /// Absent and blank values are treated as unset. Anything else must
    /// parse and fall in range, otherwise `Error::InvalidFilter` names the
    /// offending parameter.
    pub fn from_params(
        university: Option<&str>,
        semester: Option<&str>,
        year: Option<&str>,
    ) -> Result<Self, Error> {
        let university = parse_param::<i64>("university", university, |id| *id > 0)?;
        let semester = parse_param::<u32>("semester", semester, |s| SEMESTER_RANGE.contains(s))?;
        let year = parse_param::<i32>("year", year, |y| YEAR_RANGE.contains(y))?;

        Ok(Self {
            university,
            semester,
            year,
        })
    }

    /// Check whether a row with the given keys passes this filter.
    pub fn matches(&self, university: i64, semester: u32, year: i32) -> bool {
        self.university.map_or(true, |u| u == university)
            && self.semester.map_or(true, |s| s == semester)
            && self.year.map_or(true, |y| y == year)
    }
}

fn parse_param<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
    valid: impl Fn(&T) -> bool,
) -> Result<Option<T>, Error> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    match raw.parse::<T>() {
        Ok(value) if valid(&value) => Ok(Some(value)),
        _ => Err(Error::InvalidFilter {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_params_are_unset() {
        let filter = ResultFilter::from_params(Some(""), Some("  "), None).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter, ResultFilter::new());
    }

    #[test]
    fn test_params_parse() {
        let filter = ResultFilter::from_params(Some("2"), Some(" 3 "), Some("2023")).unwrap();
        assert_eq!(
            filter,
            ResultFilter::new()
                .with_university(2)
                .with_semester(3)
                .with_year(2023)
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = ResultFilter::from_params(Some("1 OR 1=1"), None, None).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidFilter {
                field: "university",
                value: "1 OR 1=1".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(ResultFilter::from_params(Some("0"), None, None).is_err());
        assert!(ResultFilter::from_params(None, Some("0"), None).is_err());
        assert!(ResultFilter::from_params(None, Some("13"), None).is_err());
        assert!(ResultFilter::from_params(None, Some("-1"), None).is_err());
        assert!(ResultFilter::from_params(None, None, Some("99")).is_err());
        assert!(ResultFilter::from_params(None, Some("12"), Some("1900")).is_ok());
    }

    #[test]
    fn test_matches_and_semantics() {
        let any = ResultFilter::new();
        assert!(any.matches(1, 1, 2020));

        let filter = ResultFilter::new().with_university(1).with_year(2023);
        assert!(filter.matches(1, 5, 2023));
        assert!(!filter.matches(2, 5, 2023));
        assert!(!filter.matches(1, 5, 2022));
    }
}
