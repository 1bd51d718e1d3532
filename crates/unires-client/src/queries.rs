//! Query layer over the results schema.
//!
//! Every function takes a borrowed connection and binds all caller-supplied
//! values as parameters; no value is ever interpolated into SQL text.

use std::str::FromStr;

use rusqlite::types::{Type, Value};
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

use unires_core::{
    ResultFilter, ResultRow, StudentRecord, SubjectResult, SummaryCounts, University,
    RESULT_ROW_LIMIT,
};

use crate::error::Error;

const RESULTS_SELECT: &str = "\
    SELECT r.id, s.reg_no, s.name AS student_name, u.name AS university, \
           r.semester, sub.name AS subject, r.marks, r.grade, r.status, r.year \
    FROM results r \
    JOIN students s ON r.student_id = s.id \
    JOIN universities u ON r.university_id = u.id \
    JOIN subjects sub ON r.subject_id = sub.id \
    WHERE 1=1";

/// All universities, ordered by name.
pub fn list_universities(conn: &Connection) -> Result<Vec<University>, Error> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, location FROM universities ORDER BY name, id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(University {
                id: row.get(0)?,
                name: row.get(1)?,
                location: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Result rows matching every supplied filter, ordered by student name then
/// semester, at most [`RESULT_ROW_LIMIT`] rows.
pub fn find_results(conn: &Connection, filter: &ResultFilter) -> Result<Vec<ResultRow>, Error> {
    let mut sql = String::from(RESULTS_SELECT);
    let mut params: Vec<Value> = Vec::with_capacity(4);

    if let Some(university) = filter.university {
        sql.push_str(" AND r.university_id = ?");
        params.push(Value::Integer(university));
    }
    if let Some(semester) = filter.semester {
        sql.push_str(" AND r.semester = ?");
        params.push(Value::Integer(i64::from(semester)));
    }
    if let Some(year) = filter.year {
        sql.push_str(" AND r.year = ?");
        params.push(Value::Integer(i64::from(year)));
    }
    sql.push_str(" ORDER BY s.name, r.semester, r.id LIMIT ?");
    params.push(Value::Integer(i64::from(RESULT_ROW_LIMIT)));

    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), result_row)?
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(?filter, rows = rows.len(), "listed results");
    Ok(rows)
}

/// Look up a student by registration number.
///
/// Returns a not-found error when no student has that number.
pub fn find_student(conn: &Connection, reg_no: &str) -> Result<StudentRecord, Error> {
    let mut stmt = conn.prepare_cached(
        "SELECT s.id, s.reg_no, s.name, s.university_id, u.name, s.department_id, d.name, \
                s.current_semester, s.admission_year, s.rank \
         FROM students s \
         JOIN universities u ON s.university_id = u.id \
         JOIN departments d ON s.department_id = d.id \
         WHERE s.reg_no = ?1",
    )?;

    let student = stmt
        .query_row([reg_no], |row| {
            Ok(StudentRecord {
                id: row.get(0)?,
                reg_no: row.get(1)?,
                name: row.get(2)?,
                university_id: row.get(3)?,
                university: row.get(4)?,
                department_id: row.get(5)?,
                department: row.get(6)?,
                current_semester: row.get(7)?,
                admission_year: row.get(8)?,
                rank: row.get(9)?,
            })
        })
        .optional()?;

    match student {
        Some(student) => Ok(student),
        None => {
            tracing::debug!(reg_no, "student not found");
            Err(unires_core::Error::student_not_found().into())
        }
    }
}

/// A student's subject results, ordered by subject code.
pub fn student_subjects(conn: &Connection, student_id: i64) -> Result<Vec<SubjectResult>, Error> {
    let mut stmt = conn.prepare_cached(
        "SELECT sub.code, sub.name, r.internal_marks, r.external_marks, r.marks, r.grade, r.status \
         FROM results r \
         JOIN subjects sub ON r.subject_id = sub.id \
         WHERE r.student_id = ?1 \
         ORDER BY sub.code, r.id",
    )?;

    let rows = stmt
        .query_map([student_id], |row| {
            Ok(SubjectResult {
                code: row.get(0)?,
                name: row.get(1)?,
                internal: row.get(2)?,
                external: row.get(3)?,
                total: row.get(4)?,
                grade: parse_column(row, 5)?,
                status: parse_column(row, 6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Counts backing the summary statistics, read in a single statement.
pub fn summary_counts(conn: &Connection) -> Result<SummaryCounts, Error> {
    let counts = conn.query_row(
        "SELECT (SELECT COUNT(*) FROM universities), \
                (SELECT COUNT(*) FROM students), \
                (SELECT COUNT(*) FROM results), \
                (SELECT COUNT(*) FROM results WHERE status = 'Pass')",
        [],
        |row| {
            Ok(SummaryCounts {
                universities: count(row, 0)?,
                students: count(row, 1)?,
                results: count(row, 2)?,
                passed: count(row, 3)?,
            })
        },
    )?;
    Ok(counts)
}

/// Liveness probe.
pub fn ping(conn: &Connection) -> Result<(), Error> {
    conn.query_row("SELECT 1", [], |_| Ok(()))?;
    Ok(())
}

fn result_row(row: &Row<'_>) -> rusqlite::Result<ResultRow> {
    Ok(ResultRow {
        id: row.get(0)?,
        reg_no: row.get(1)?,
        student_name: row.get(2)?,
        university: row.get(3)?,
        semester: row.get(4)?,
        subject: row.get(5)?,
        marks: row.get(6)?,
        grade: parse_column(row, 7)?,
        status: parse_column(row, 8)?,
        year: row.get(9)?,
    })
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn count(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let n: i64 = row.get(idx)?;
    u64::try_from(n)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}
