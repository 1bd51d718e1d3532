//! Shared fixture database for client integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::{params, Connection};
use tempfile::TempDir;

use unires_client::{schema, ClientConfig};

pub const ASHA: &str = "REG2021001";
pub const BILAL: &str = "REG2021002";
pub const CHEN: &str = "REG2022001";
pub const DARA: &str = "REG2023009";

/// Results seeded by [`seed`].
pub const SEEDED_RESULTS: usize = 11;

pub struct TestDb {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    /// Create a database with the schema applied and the standard fixture loaded.
    pub fn seeded() -> Self {
        let db = Self::empty();
        seed(&db.connection());
        db
    }

    /// Create a database with only the schema applied.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.db");
        let db = Self { path, _dir: dir };
        schema::apply(&db.connection()).unwrap();
        db
    }

    pub fn connection(&self) -> Connection {
        unires_client::connection::establish(&ClientConfig::new(&self.path)).unwrap()
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.path)
    }
}

/// Three universities, two departments, four students (one without results)
/// and eleven results across two semesters and two years.
pub fn seed(conn: &Connection) {
    conn.execute_batch(
        "INSERT INTO universities (id, name, location) VALUES
             (1, 'Northfield University', 'Pune'),
             (2, 'Eastbrook Institute', 'Chennai'),
             (3, 'Alder College', 'Mumbai');
         INSERT INTO departments (id, name) VALUES
             (1, 'Computer Science'),
             (2, 'Mechanical Engineering');
         INSERT INTO students (id, reg_no, name, university_id, department_id, current_semester, admission_year, rank) VALUES
             (1, 'REG2021001', 'Asha Rao', 1, 1, 6, 2021, 4),
             (2, 'REG2021002', 'Bilal Khan', 1, 1, 6, 2021, NULL),
             (3, 'REG2022001', 'Chen Li', 2, 2, 4, 2022, 0),
             (4, 'REG2023009', 'Dara Singh', 2, 2, 2, 2023, NULL);
         INSERT INTO subjects (id, code, name) VALUES
             (1, 'CS101', 'Programming Fundamentals'),
             (2, 'CS102', 'Discrete Mathematics'),
             (3, 'CS103', 'Data Structures'),
             (4, 'CS104', 'Computer Organization'),
             (5, 'CS105', 'Operating Systems'),
             (6, 'CS106', 'Database Systems'),
             (7, 'ME201', 'Thermodynamics');",
    )
    .unwrap();

    // Inserted out of code order on purpose.
    let asha = [
        (4, 24, 59, "A"),
        (1, 26, 61, "A"),
        (6, 23, 56, "B"),
        (2, 22, 56, "B"),
        (5, 28, 62, "A+"),
        (3, 29, 66, "A+"),
    ];
    for (subject, internal, external, grade) in asha {
        insert_result(conn, 1, subject, 1, 5, 2023, internal, external, grade, "Pass");
    }

    insert_result(conn, 2, 1, 1, 5, 2023, 15, 30, "C", "Pass");
    insert_result(conn, 2, 2, 1, 5, 2023, 10, 20, "F", "Fail");
    insert_result(conn, 2, 3, 1, 6, 2024, 20, 50, "B", "Pass");

    insert_result(conn, 3, 7, 2, 3, 2023, 20, 46, "C", "Pass");
    insert_result(conn, 3, 1, 2, 4, 2024, 18, 40, "D", "Pass");
}

/// Add `students` extra students at Alder College with six results each.
pub fn seed_bulk(conn: &Connection, students: usize) {
    for i in 0..students {
        let id = 100 + i as i64;
        conn.execute(
            "INSERT INTO students (id, reg_no, name, university_id, department_id, current_semester, admission_year) \
             VALUES (?1, ?2, ?3, 3, 1, 2, 2024)",
            params![id, format!("BULK{:04}", i), format!("Bulk Student {:04}", i)],
        )
        .unwrap();
        for subject in 1..=6 {
            insert_result(conn, id, subject, 3, 1, 2024, 20, 40, "C", "Pass");
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn insert_result(
    conn: &Connection,
    student: i64,
    subject: i64,
    university: i64,
    semester: u32,
    year: i32,
    internal: u32,
    external: u32,
    grade: &str,
    status: &str,
) {
    conn.execute(
        "INSERT INTO results (student_id, subject_id, university_id, semester, year, \
         internal_marks, external_marks, marks, grade, status) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            student,
            subject,
            university,
            semester,
            year,
            internal,
            external,
            internal + external,
            grade,
            status
        ],
    )
    .unwrap();
}
