//! Output formatters for store responses.

use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde::Serialize;
use unires_core::scorecard::UNRANKED;
use unires_core::{ResultRow, Scorecard, SummaryStats, University};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format a university listing.
    fn format_universities(&self, universities: &[University]) -> String;

    /// Format a result listing.
    fn format_results(&self, rows: &[ResultRow]) -> String;

    /// Format a student scorecard.
    fn format_scorecard(&self, card: &Scorecard) -> String;

    /// Format summary statistics.
    fn format_stats(&self, stats: &SummaryStats) -> String;

    /// Format an error message.
    fn format_error(&self, error: &str) -> String;

    /// Format a simple message.
    fn format_message(&self, message: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

const UNIVERSITY_HEADERS: [&str; 3] = ["id", "name", "location"];
const RESULT_HEADERS: [&str; 9] = [
    "reg_no",
    "student_name",
    "university",
    "semester",
    "subject",
    "marks",
    "grade",
    "status",
    "year",
];
const SUBJECT_HEADERS: [&str; 7] =
    ["code", "name", "internal", "external", "total", "grade", "status"];
const CSV_SUBJECT_HEADERS: [&str; 7] =
    ["code", "subject", "internal", "external", "total", "grade", "status"];
const SCORECARD_HEADERS: [&str; 11] = [
    "reg_no",
    "student_name",
    "university",
    "department",
    "semester",
    "year",
    "total_marks",
    "percentage",
    "cgpa",
    "overall_status",
    "rank",
];
const STATS_HEADERS: [&str; 4] =
    ["total_universities", "total_students", "total_results", "pass_rate"];

fn university_cells(u: &University) -> Vec<String> {
    vec![u.id.to_string(), u.name.clone(), u.location.clone()]
}

fn result_cells(r: &ResultRow) -> Vec<String> {
    vec![
        r.reg_no.clone(),
        r.student_name.clone(),
        r.university.clone(),
        r.semester.to_string(),
        r.subject.clone(),
        r.marks.to_string(),
        r.grade.to_string(),
        r.status.to_string(),
        r.year.to_string(),
    ]
}

fn stats_cells(s: &SummaryStats) -> Vec<String> {
    vec![
        s.total_universities.to_string(),
        s.total_students.to_string(),
        s.total_results.to_string(),
        s.pass_rate.to_string(),
    ]
}

fn rank_text(rank: Option<u32>) -> String {
    match rank {
        Some(rank) if rank > 0 => rank.to_string(),
        _ => UNRANKED.to_string(),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl TableFormatter {
    fn table<I>(headers: &[&str], rows: I) -> (Table, usize)
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut table = Table::new();
        table.set_header(headers.iter().map(Cell::new).collect::<Vec<_>>());
        let mut count = 0;
        for row in rows {
            table.add_row(row);
            count += 1;
        }
        (table, count)
    }
}

impl Formatter for TableFormatter {
    fn format_universities(&self, universities: &[University]) -> String {
        if universities.is_empty() {
            return "No universities".to_string();
        }
        let (table, count) =
            Self::table(&UNIVERSITY_HEADERS, universities.iter().map(university_cells));
        format!("{}\n{} row(s)", table, count)
    }

    fn format_results(&self, rows: &[ResultRow]) -> String {
        if rows.is_empty() {
            return "No results".to_string();
        }
        let (table, count) = Self::table(&RESULT_HEADERS, rows.iter().map(result_cells));
        format!("{}\n{} row(s)", table, count)
    }

    fn format_scorecard(&self, card: &Scorecard) -> String {
        let mut summary = Table::new();
        summary.add_row(vec!["Name".to_string(), card.name.clone()]);
        summary.add_row(vec!["Reg No".to_string(), card.reg_no.clone()]);
        summary.add_row(vec!["University".to_string(), card.university.clone()]);
        summary.add_row(vec!["Department".to_string(), card.department.clone()]);
        summary.add_row(vec!["Semester".to_string(), card.semester.to_string()]);
        summary.add_row(vec!["Year".to_string(), card.year.to_string()]);
        summary.add_row(vec!["Total".to_string(), card.total_marks.to_string()]);
        summary.add_row(vec!["Percentage".to_string(), card.percentage.to_string()]);
        summary.add_row(vec!["CGPA".to_string(), card.cgpa.to_string()]);
        summary.add_row(vec!["Status".to_string(), card.overall_status.to_string()]);
        summary.add_row(vec!["Rank".to_string(), rank_text(card.rank)]);

        if card.subjects.is_empty() {
            return format!("{}\nNo subjects", summary);
        }

        let (subjects, _) = Self::table(
            &SUBJECT_HEADERS,
            card.subjects.iter().map(|s| {
                vec![
                    s.code.clone(),
                    s.name.clone(),
                    s.internal.to_string(),
                    s.external.to_string(),
                    s.total.to_string(),
                    s.grade.to_string(),
                    s.status.to_string(),
                ]
            }),
        );
        format!("{}\n\n{}", summary, subjects)
    }

    fn format_stats(&self, stats: &SummaryStats) -> String {
        let (table, _) = Self::table(&STATS_HEADERS, std::iter::once(stats_cells(stats)));
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

/// JSON formatter.
///
/// Emits the same documents the HTTP gateway serves.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| JsonFormatter.format_error(&e.to_string()))
    }
}

impl Formatter for JsonFormatter {
    fn format_universities(&self, universities: &[University]) -> String {
        Self::pretty(universities)
    }

    fn format_results(&self, rows: &[ResultRow]) -> String {
        Self::pretty(rows)
    }

    fn format_scorecard(&self, card: &Scorecard) -> String {
        Self::pretty(card)
    }

    fn format_stats(&self, stats: &SummaryStats) -> String {
        Self::pretty(stats)
    }

    fn format_error(&self, error: &str) -> String {
        serde_json::json!({
            "error": error
        })
        .to_string()
    }

    fn format_message(&self, message: &str) -> String {
        serde_json::json!({
            "message": message
        })
        .to_string()
    }
}

/// CSV formatter.
pub struct CsvFormatter;

impl CsvFormatter {
    fn csv<I>(headers: &[&str], rows: I) -> String
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut output = headers.join(",");
        output.push('\n');
        for row in rows {
            let cells: Vec<String> = row.iter().map(|c| csv_field(c)).collect();
            output.push_str(&cells.join(","));
            output.push('\n');
        }
        output
    }
}

impl Formatter for CsvFormatter {
    fn format_universities(&self, universities: &[University]) -> String {
        Self::csv(&UNIVERSITY_HEADERS, universities.iter().map(university_cells))
    }

    fn format_results(&self, rows: &[ResultRow]) -> String {
        Self::csv(&RESULT_HEADERS, rows.iter().map(result_cells))
    }

    // One row per subject with the scorecard fields repeated. A card with no
    // subjects still gets one row so the totals are present.
    fn format_scorecard(&self, card: &Scorecard) -> String {
        let mut headers = SCORECARD_HEADERS.to_vec();
        headers.extend_from_slice(&CSV_SUBJECT_HEADERS);

        let summary = vec![
            card.reg_no.clone(),
            card.name.clone(),
            card.university.clone(),
            card.department.clone(),
            card.semester.to_string(),
            card.year.to_string(),
            card.total_marks.to_string(),
            card.percentage.to_string(),
            card.cgpa.to_string(),
            card.overall_status.to_string(),
            rank_text(card.rank),
        ];

        if card.subjects.is_empty() {
            let mut row = summary;
            row.resize(headers.len(), String::new());
            return Self::csv(&headers, std::iter::once(row));
        }

        Self::csv(
            &headers,
            card.subjects.iter().map(|s| {
                let mut row = summary.clone();
                row.extend([
                    s.code.clone(),
                    s.name.clone(),
                    s.internal.to_string(),
                    s.external.to_string(),
                    s.total.to_string(),
                    s.grade.to_string(),
                    s.status.to_string(),
                ]);
                row
            }),
        )
    }

    fn format_stats(&self, stats: &SummaryStats) -> String {
        Self::csv(&STATS_HEADERS, std::iter::once(stats_cells(stats)))
    }

    fn format_error(&self, error: &str) -> String {
        format!("error\n\"{}\"", escape_csv(error))
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}

/// Quote a field when it contains a separator, quote or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", escape_csv(s))
    } else {
        s.to_string()
    }
}

/// Escape a string for CSV.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}
