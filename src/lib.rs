//! Core library surface for the student records console.
//!
//! The binary only wires configuration, logging and the store handle together;
//! everything it drives lives here so integration tests can run whole menu
//! sessions against an in-memory database.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;

/// Persistence entry points used by `main.rs` and the tests.
pub use db::{
    create_student, delete_student, fetch_student, fetch_students, open_store,
    open_store_in_memory, update_student_email,
};

pub use config::AppConfig;
pub use error::{InputError, StoreError};
pub use menu::{App, MenuChoice};
pub use models::{NewStudent, Student};
