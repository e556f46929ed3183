//! Data access for the `students` table
use crate::core::{Result, RosterError};
use crate::dates;
use crate::model::Student;
use crate::tables::Table;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row, Rows};
use tracing::{debug, warn};

/// Name of the backing table.
pub const TABLE_NAME: &str = "students";

const CREATE_TABLE_SQL: &str = "\
CREATE TABLE students (
    id INT NOT NULL PRIMARY KEY,
    firstName CHAR(40),
    lastName CHAR(40),
    birthday DATE
)";

/// Data-access object for student records.
///
/// Borrows one open connection for its whole lifetime. Every operation
/// prepares its own statement, executes it once, and drops the handle on
/// every exit path; nothing is cached or retained across calls. The
/// connection is used synchronously by a single caller.
pub struct StudentsTable<'conn> {
    connection: &'conn Connection,
}

impl<'conn> StudentsTable<'conn> {
    /// Binds a table to an open connection.
    pub fn new(connection: &'conn Connection) -> Self {
        Self { connection }
    }

    /// Returns all students born on `date`.
    pub fn find_by_birthday(&self, date: NaiveDate) -> Result<Vec<Student>> {
        let mut stmt = self
            .connection
            .prepare("SELECT * FROM students WHERE birthday = ?1")?;
        let rows = stmt.query(params![dates::date_to_sql(Some(date))])?;
        Ok(collect_students(rows))
    }
}

impl Table for StudentsTable<'_> {
    type Entity = Student;
    type Key = i32;

    fn table_name(&self) -> &str {
        TABLE_NAME
    }

    fn create_table(&self) -> bool {
        match self.connection.execute(CREATE_TABLE_SQL, []) {
            Ok(_) => true,
            Err(e) => {
                debug!("create table {} failed: {}", TABLE_NAME, e);
                false
            }
        }
    }

    fn drop_table(&self) -> bool {
        match self.connection.execute("DROP TABLE students", []) {
            Ok(_) => true,
            Err(e) => {
                debug!("drop table {} failed: {}", TABLE_NAME, e);
                false
            }
        }
    }

    fn find_by_primary_key(&self, id: i32) -> Result<Option<Student>> {
        let mut stmt = self
            .connection
            .prepare("SELECT * FROM students WHERE id = ?1")?;
        let rows = stmt.query(params![id])?;
        Ok(collect_students(rows).into_iter().next())
    }

    fn find_all(&self) -> Result<Vec<Student>> {
        let mut stmt = self.connection.prepare("SELECT * FROM students")?;
        let rows = stmt.query([])?;
        Ok(collect_students(rows))
    }

    fn save(&self, student: &Student) -> bool {
        let result = self.connection.execute(
            "INSERT INTO students (id, firstName, lastName, birthday) VALUES (?1, ?2, ?3, ?4)",
            params![
                student.id,
                student.first_name,
                student.last_name,
                dates::date_to_sql(student.birthday),
            ],
        );
        match result {
            Ok(_) => true,
            Err(e) => {
                debug!("insert into {} failed: {}", TABLE_NAME, e);
                false
            }
        }
    }

    fn delete(&self, id: i32) -> Result<bool> {
        let removed = self
            .connection
            .execute("DELETE FROM students WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn update(&self, student: &Student) -> Result<bool> {
        // Unlike save, an absent birthday is not mapped to NULL here.
        let birthday = student.birthday.ok_or_else(|| {
            RosterError::Entity(format!("student {} has no birthday to update", student.id))
        })?;
        let changed = self.connection.execute(
            "UPDATE students SET firstName = ?1, lastName = ?2, birthday = ?3 WHERE id = ?4",
            params![
                student.first_name,
                student.last_name,
                dates::date_to_sql(Some(birthday)),
                student.id,
            ],
        )?;
        Ok(changed > 0)
    }
}

/// Reads one student out of the current cursor row.
fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    let birthday = dates::date_from_sql(row.get_ref("birthday")?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    Ok(Student {
        id: row.get("id")?,
        first_name: row.get("firstName")?,
        last_name: row.get("lastName")?,
        birthday,
    })
}

/// Drains a cursor into a list of students, preserving result-set order.
///
/// A row that fails to decode, or a cursor error mid-iteration, ends the
/// scan: callers get the rows read up to that point and the failure is only
/// logged. Quirk kept for compatibility with existing callers; do not lean
/// on it from new code.
fn collect_students(mut rows: Rows<'_>) -> Vec<Student> {
    let mut students = Vec::new();
    loop {
        match rows.next() {
            Ok(Some(row)) => match student_from_row(row) {
                Ok(student) => students.push(student),
                Err(e) => {
                    warn!("row in {} did not decode, truncating scan: {}", TABLE_NAME, e);
                    break;
                }
            },
            Ok(None) => break,
            Err(e) => {
                warn!("cursor error on {}, truncating scan: {}", TABLE_NAME, e);
                break;
            }
        }
    }
    students
}
