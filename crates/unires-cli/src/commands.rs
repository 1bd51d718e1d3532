//! Subcommand definitions.

use clap::Subcommand;
use unires_core::ResultFilter;

/// A single CLI action against the results store.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the results schema in the database file
    Init,

    /// List universities ordered by name
    Universities,

    /// List result rows, optionally filtered
    Results {
        /// University id
        #[arg(long)]
        university: Option<String>,

        /// Semester number
        #[arg(long)]
        semester: Option<String>,

        /// Examination year
        #[arg(long)]
        year: Option<String>,
    },

    /// Show the scorecard for a registration number
    Scorecard {
        /// Student registration number
        reg_no: String,
    },

    /// Show portal-wide summary statistics
    Stats,
}

impl Command {
    /// Whether this command needs write access to the store.
    pub fn writes(&self) -> bool {
        matches!(self, Command::Init)
    }

    /// Validated filter for a `results` command.
    pub fn result_filter(&self) -> Result<Option<ResultFilter>, unires_core::Error> {
        match self {
            Command::Results {
                university,
                semester,
                year,
            } => ResultFilter::from_params(
                university.as_deref(),
                semester.as_deref(),
                year.as_deref(),
            )
            .map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_init_writes() {
        assert!(Command::Init.writes());
        assert!(!Command::Stats.writes());
        assert!(!Command::Scorecard {
            reg_no: "REG1".into()
        }
        .writes());
    }

    #[test]
    fn test_result_filter() {
        let cmd = Command::Results {
            university: Some("2".into()),
            semester: None,
            year: Some("2024".into()),
        };
        let filter = cmd.result_filter().unwrap().unwrap();
        assert_eq!(filter, ResultFilter::new().with_university(2).with_year(2024));

        assert_eq!(Command::Universities.result_filter().unwrap(), None);
    }

    #[test]
    fn test_result_filter_rejects_bad_semester() {
        let cmd = Command::Results {
            university: None,
            semester: Some("13".into()),
            year: None,
        };
        assert!(matches!(
            cmd.result_filter(),
            Err(unires_core::Error::InvalidFilter { field: "semester", .. })
        ));
    }
}
