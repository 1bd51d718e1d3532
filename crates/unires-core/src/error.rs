//! Domain error types.

use thiserror::Error;

/// Domain-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A lookup by key matched no entity.
    #[error("{0} not found")]
    NotFound(String),

    /// A filter value could not be turned into its typed form.
    #[error("invalid value for filter '{field}': {value:?}")]
    InvalidFilter {
        /// Query parameter name.
        field: &'static str,
        /// The raw value as received.
        value: String,
    },

    /// A stored value is outside its enumerated domain.
    #[error("invalid {kind} value: {value:?}")]
    InvalidValue {
        /// Which enumeration failed to parse.
        kind: &'static str,
        /// The raw stored value.
        value: String,
    },
}

impl Error {
    /// Not-found error for a student lookup.
    pub fn student_not_found() -> Self {
        Error::NotFound("Student".to_string())
    }

    /// Whether this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_not_found_message() {
        let err = Error::student_not_found();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Student not found");
    }

    #[test]
    fn test_invalid_filter_message() {
        let err = Error::InvalidFilter {
            field: "semester",
            value: "third".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "invalid value for filter 'semester': \"third\""
        );
    }
}
