use log::{info, warn};
use rusqlite::{ffi, params, Connection, Error as SqlError, ErrorCode, OptionalExtension, Row};

use crate::error::{StoreError, StoreResult};
use crate::models::{NewStudent, Student};

const SELECT_COLUMNS: &str =
    "SELECT student_id, first_name, last_name, email, enrollment_date FROM students";

/// Retrieve every student ordered by id. An empty table is an empty vector,
/// not an error.
pub fn fetch_students(conn: &Connection) -> StoreResult<Vec<Student>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY student_id"))?;

    let students = stmt
        .query_map([], student_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "event=student_list module=db status=ok count={}",
        students.len()
    );
    Ok(students)
}

/// Look up a single student. `None` means the id is not in the table.
pub fn fetch_student(conn: &Connection, id: i64) -> StoreResult<Option<Student>> {
    let student = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE student_id = ?1"),
            params![id],
            student_from_row,
        )
        .optional()?;
    Ok(student)
}

/// Insert a new student and return it with the id the store assigned.
pub fn create_student(conn: &Connection, student: &NewStudent) -> StoreResult<Student> {
    conn.execute(
        "INSERT INTO students (first_name, last_name, email, enrollment_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            student.first_name,
            student.last_name,
            student.email,
            student.enrollment_date
        ],
    )
    .map_err(|err| map_constraint(err, &student.email))?;

    let id = conn.last_insert_rowid();
    info!("event=student_create module=db status=ok id={id}");
    Ok(student.with_id(id))
}

/// Replace the email of one student. Returns the number of rows touched; zero
/// means no student has that id and is left for the caller to report.
pub fn update_student_email(conn: &Connection, id: i64, email: &str) -> StoreResult<usize> {
    let updated = conn
        .execute(
            "UPDATE students SET email = ?1 WHERE student_id = ?2",
            params![email, id],
        )
        .map_err(|err| map_constraint(err, email))?;

    info!("event=student_update_email module=db status=ok id={id} affected={updated}");
    Ok(updated)
}

/// Remove one student. Same affected-count convention as
/// [`update_student_email`].
pub fn delete_student(conn: &Connection, id: i64) -> StoreResult<usize> {
    let deleted = conn.execute("DELETE FROM students WHERE student_id = ?1", params![id])?;

    info!("event=student_delete module=db status=ok id={id} affected={deleted}");
    Ok(deleted)
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        enrollment_date: row.get(4)?,
    })
}

/// Turn SQLite constraint failures into readable messages. Duplicate emails
/// get their own wording since that is the one operators hit in practice.
fn map_constraint(err: SqlError, email: &str) -> StoreError {
    if !matches!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation)) {
        return err.into();
    }

    let message = match &err {
        SqlError::SqliteFailure(inner, _) if inner.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE => {
            format!("Email '{email}' already exists in the database.")
        }
        SqlError::SqliteFailure(_, Some(detail)) => format!("Rejected by the database: {detail}"),
        other => format!("Rejected by the database: {other}"),
    };
    warn!("event=constraint_violation module=db status=error error={err}");
    StoreError::ConstraintViolation(message)
}
