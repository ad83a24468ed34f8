use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};
use rusqlite::Connection;

use crate::error::{StoreError, StoreResult};

/// Table layout for student records. The date check rejects anything SQLite's
/// own date parser would not round-trip, so raw writes cannot smuggle in free
/// text either.
const STUDENTS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    enrollment_date TEXT NOT NULL CHECK (date(enrollment_date) IS enrollment_date)
)";

/// Open the database file at `path`, creating the parent directory and the
/// `students` table when missing. The returned connection is the only store
/// handle the application holds for its whole lifetime.
pub fn open_store(path: &Path) -> StoreResult<Connection> {
    let started_at = Instant::now();
    info!(
        "event=db_open module=db status=start mode=file path={}",
        path.display()
    );

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            error!(
                "event=db_open module=db status=error mode=file error_code=data_dir_failed error={}",
                err
            );
            return Err(StoreError::DataDirectory {
                path: parent.to_path_buf(),
                source: err,
            });
        }
    }

    let result = Connection::open(path).and_then(|conn| {
        ensure_schema(&conn)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(source) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                source
            );
            Err(StoreError::Connection {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Open a throwaway in-memory store with the schema applied.
pub fn open_store_in_memory() -> StoreResult<Connection> {
    let conn = Connection::open_in_memory()
        .and_then(|conn| {
            ensure_schema(&conn)?;
            Ok(conn)
        })
        .map_err(|source| StoreError::Connection {
            path: PathBuf::from(":memory:"),
            source,
        })?;
    info!("event=db_open module=db status=ok mode=memory");
    Ok(conn)
}

fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    conn.execute(STUDENTS_SCHEMA, [])?;
    Ok(())
}
