//! Store schema bootstrap.

use rusqlite::Connection;

use crate::error::Error;

/// Schema version recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS universities (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL COLLATE NOCASE,
    location TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    reg_no TEXT NOT NULL UNIQUE COLLATE NOCASE,
    name TEXT NOT NULL COLLATE NOCASE,
    university_id INTEGER NOT NULL,
    department_id INTEGER NOT NULL,
    current_semester INTEGER NOT NULL,
    admission_year INTEGER NOT NULL,
    rank INTEGER,
    FOREIGN KEY (university_id) REFERENCES universities(id),
    FOREIGN KEY (department_id) REFERENCES departments(id)
);

CREATE TABLE IF NOT EXISTS subjects (
    id INTEGER PRIMARY KEY,
    code TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS results (
    id INTEGER PRIMARY KEY,
    student_id INTEGER NOT NULL,
    subject_id INTEGER NOT NULL,
    university_id INTEGER NOT NULL,
    semester INTEGER NOT NULL,
    year INTEGER NOT NULL,
    internal_marks INTEGER NOT NULL,
    external_marks INTEGER NOT NULL,
    marks INTEGER NOT NULL,
    grade TEXT NOT NULL CHECK (grade IN ('A+', 'A', 'B', 'C', 'D', 'F')),
    status TEXT NOT NULL CHECK (status IN ('Pass', 'Fail')),
    FOREIGN KEY (student_id) REFERENCES students(id),
    FOREIGN KEY (subject_id) REFERENCES subjects(id),
    FOREIGN KEY (university_id) REFERENCES universities(id)
);

CREATE INDEX IF NOT EXISTS idx_results_student ON results(student_id);
CREATE INDEX IF NOT EXISTS idx_results_university ON results(university_id);
CREATE INDEX IF NOT EXISTS idx_results_semester_year ON results(semester, year);
CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);
"#;

/// Create any missing tables and indexes. Safe to run repeatedly.
pub fn apply(conn: &Connection) -> Result<u32, Error> {
    conn.execute_batch(SCHEMA)?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!(version = SCHEMA_VERSION, "schema applied");
    Ok(SCHEMA_VERSION)
}

/// Read the recorded schema version; `0` for an uninitialized database.
pub fn version(conn: &Connection) -> Result<u32, Error> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
