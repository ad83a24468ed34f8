use chrono::NaiveDate;
use rusqlite::Connection;
use student_crud::menu::menu_text;
use student_crud::{create_student, fetch_students, open_store_in_memory, App, NewStudent};

/// Drive a whole menu session from scripted input and return the store plus
/// everything printed.
fn run_session(conn: Connection, script: &str) -> (Connection, String) {
    run_raw_session(conn, script.as_bytes())
}

/// Same as [`run_session`] but with raw bytes, for input that is not UTF-8.
fn run_raw_session(conn: Connection, script: &[u8]) -> (Connection, String) {
    let mut app = App::new(conn, script, Vec::new());
    app.run().expect("session should end cleanly");
    let (conn, output) = app.into_parts();
    (conn, String::from_utf8(output).expect("utf-8 output"))
}

fn seeded_store() -> (Connection, i64) {
    let conn = open_store_in_memory().unwrap();
    let ann = create_student(
        &conn,
        &NewStudent {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        },
    )
    .unwrap();
    (conn, ann.id)
}

#[test]
fn invalid_choice_is_reported_and_menu_redisplayed() {
    let (_, output) = run_session(open_store_in_memory().unwrap(), "9\n5\n");

    assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
    assert_eq!(output.matches(&menu_text()).count(), 2);
    assert!(output.contains("Goodbye!"));
}

#[test]
fn undecodable_menu_input_is_an_invalid_choice() {
    let (_, output) = run_raw_session(open_store_in_memory().unwrap(), b"\xff\xfe\n5\n");

    assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
    assert_eq!(output.matches(&menu_text()).count(), 2);
    assert!(output.contains("Goodbye!"));
}

#[test]
fn undecodable_student_id_is_rejected() {
    let (conn, _) = seeded_store();
    let (conn, output) = run_raw_session(conn, b"4\n\xff1\n5\n");

    assert!(output.contains("Student ID must be a number."));
    assert!(output.contains("Goodbye!"));
    assert_eq!(fetch_students(&conn).unwrap().len(), 1);
}

#[test]
fn output_has_no_escape_codes_without_colour() {
    let (_, output) = run_session(open_store_in_memory().unwrap(), "9\n3\nabc\n5\n");

    assert!(output.contains("✗ Invalid choice."));
    assert!(!output.contains('\x1b'));
}

#[test]
fn end_of_input_shuts_down_cleanly() {
    let (_, output) = run_session(open_store_in_memory().unwrap(), "");

    assert!(output.contains("Welcome to the Student Database Management System!"));
    assert_eq!(output.matches(&menu_text()).count(), 1);
}

#[test]
fn view_on_empty_store_prints_notice() {
    let (_, output) = run_session(open_store_in_memory().unwrap(), "1\n5\n");
    assert!(output.contains("No students found in the database."));
}

#[test]
fn add_then_view_shows_new_student() {
    let script = "2\nAnn\nLee\nann@x.com\n2024-01-10\n1\n5\n";
    let (conn, output) = run_session(open_store_in_memory().unwrap(), script);

    let students = fetch_students(&conn).unwrap();
    assert_eq!(students.len(), 1);
    let ann = &students[0];
    assert_eq!(ann.email, "ann@x.com");

    assert!(output.contains("Student added successfully!"));
    assert!(output.contains(&format!("Student ID: {}", ann.id)));
    assert!(output.contains("Enrollment Date: 2024-01-10"));
    assert!(output.contains("Total students: 1"));
}

#[test]
fn add_with_bad_date_persists_nothing_and_keeps_running() {
    let script = "2\nAnn\nLee\nann@x.com\n10/01/2024\n1\n5\n";
    let (conn, output) = run_session(open_store_in_memory().unwrap(), script);

    assert!(output.contains("Enrollment date '10/01/2024' is not a valid YYYY-MM-DD date."));
    assert!(output.contains("No students found in the database."));
    assert!(fetch_students(&conn).unwrap().is_empty());
}

#[test]
fn add_with_blank_name_is_rejected() {
    let script = "2\n\nLee\nann@x.com\n2024-01-10\n5\n";
    let (conn, output) = run_session(open_store_in_memory().unwrap(), script);

    assert!(output.contains("First name is required."));
    assert!(fetch_students(&conn).unwrap().is_empty());
}

#[test]
fn add_with_duplicate_email_reports_and_continues() {
    let (conn, _) = seeded_store();
    let script = "2\nBo\nKim\nann@x.com\n2023-09-01\n5\n";
    let (conn, output) = run_session(conn, script);

    assert!(output.contains("Error adding student: Email 'ann@x.com' already exists"));
    assert!(output.contains("Goodbye!"));
    assert_eq!(fetch_students(&conn).unwrap().len(), 1);
}

#[test]
fn update_email_shows_old_and_new_values() {
    let (conn, id) = seeded_store();
    let script = format!("3\n{id}\nann2@x.com\n5\n");
    let (conn, output) = run_session(conn, &script);

    assert!(output.contains("Email updated successfully!"));
    assert!(output.contains("Old Email: ann@x.com"));
    assert!(output.contains("New Email: ann2@x.com"));
    assert_eq!(fetch_students(&conn).unwrap()[0].email, "ann2@x.com");
}

#[test]
fn update_email_on_unknown_id_reports_not_found() {
    let (conn, id) = seeded_store();
    let missing = id + 41;
    let script = format!("3\n{missing}\nx@y.com\n5\n");
    let (conn, output) = run_session(conn, &script);

    assert!(output.contains(&format!("No student found with ID {missing}.")));
    assert!(output.contains("Goodbye!"));
    assert_eq!(fetch_students(&conn).unwrap()[0].email, "ann@x.com");
}

#[test]
fn non_numeric_id_is_rejected() {
    let (conn, _) = seeded_store();
    let (_, output) = run_session(conn, "3\nabc\n5\n");

    assert!(output.contains("Student ID must be a number."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn delete_requires_confirmation() {
    let (conn, id) = seeded_store();
    let script = format!("4\n{id}\nno\n5\n");
    let (conn, output) = run_session(conn, &script);

    assert!(output.contains("Deletion cancelled."));
    assert_eq!(fetch_students(&conn).unwrap().len(), 1);
}

#[test]
fn delete_then_delete_again_reports_not_found() {
    let (conn, id) = seeded_store();
    let script = format!("4\n{id}\nyes\n4\n{id}\nyes\n5\n");
    let (conn, output) = run_session(conn, &script);

    assert!(output.contains("Student deleted successfully!"));
    assert!(output.contains("Name: Ann Lee"));
    assert!(output.contains(&format!("No student found with ID {id}.")));
    assert!(fetch_students(&conn).unwrap().is_empty());
}

#[test]
fn input_ending_mid_form_stops_without_writing() {
    let (conn, output) = run_session(open_store_in_memory().unwrap(), "2\nAnn\nLee\n");

    assert!(output.contains("Enter email: "));
    assert!(fetch_students(&conn).unwrap().is_empty());
}
