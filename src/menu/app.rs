use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};
use rusqlite::Connection;

use super::forms::{parse_student_id, required, MenuChoice, StudentForm};
use super::helpers::{write_failure, write_menu, write_notice, write_student_table, write_success};
use crate::db::{
    create_student, delete_student, fetch_student, fetch_students, update_student_email,
};
use crate::error::InputError;

/// Whether the loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Bail out of an action with [`Flow::Exit`] when input runs dry mid-form.
macro_rules! answer_or_exit {
    ($prompt:expr) => {
        match $prompt? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        }
    };
}

/// The interactive menu. Owns the store handle plus the operator's input and
/// output streams so the whole session can be driven from tests.
pub struct App<R, W> {
    conn: Connection,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(conn: Connection, input: R, output: W) -> Self {
        Self {
            conn,
            input,
            output,
            color: false,
        }
    }

    /// Colour the status lines. Only worth enabling when the output is a
    /// terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run the menu until the operator exits or input ends. Store failures
    /// are printed and the loop continues; only console I/O errors escape.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nWelcome to the Student Database Management System!"
        )?;

        loop {
            write_menu(&mut self.output)?;
            let Some(answer) = self.prompt("\nEnter your choice (1-5): ")? else {
                info!("event=menu_exit module=menu status=ok reason=end_of_input");
                writeln!(self.output)?;
                return Ok(());
            };

            let flow = match MenuChoice::parse(&answer) {
                Ok(choice) => {
                    info!("event=menu_choice module=menu status=ok choice={choice:?}");
                    self.dispatch(choice)?
                }
                Err(err) => {
                    warn!("event=menu_choice module=menu status=error input={answer:?}");
                    write_failure(&mut self.output, self.color, &err.to_string())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                self.output.flush().context("failed to flush console output")?;
                return Ok(());
            }
        }
    }

    /// Give back the store handle and output stream once the session is over.
    pub fn into_parts(self) -> (Connection, W) {
        (self.conn, self.output)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::ViewAll => self.view_students(),
            MenuChoice::Add => self.add_student(),
            MenuChoice::UpdateEmail => self.update_email(),
            MenuChoice::Delete => self.delete_student(),
            MenuChoice::Exit => {
                writeln!(
                    self.output,
                    "\nThank you for using the Student Management System. Goodbye!\n"
                )?;
                Ok(Flow::Exit)
            }
        }
    }

    fn view_students(&mut self) -> Result<Flow> {
        match fetch_students(&self.conn) {
            Ok(students) => write_student_table(&mut self.output, &students)?,
            Err(err) => self.report(&format!("Error retrieving students: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn add_student(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Add New Student ---")?;
        let form = StudentForm {
            first_name: answer_or_exit!(self.prompt("Enter first name: ")),
            last_name: answer_or_exit!(self.prompt("Enter last name: ")),
            email: answer_or_exit!(self.prompt("Enter email: ")),
            enrollment_date: answer_or_exit!(
                self.prompt("Enter enrollment date (YYYY-MM-DD): ")
            ),
        };

        let new_student = match form.parse_inputs() {
            Ok(student) => student,
            Err(err) => return self.reject(err),
        };

        match create_student(&self.conn, &new_student) {
            Ok(student) => write_success(
                &mut self.output,
                self.color,
                "Student added successfully!",
                &[
                    format!("Student ID: {}", student.id),
                    format!("Name: {}", student.full_name()),
                    format!("Email: {}", student.email),
                    format!("Enrollment Date: {}", student.enrollment_date),
                ],
            )?,
            Err(err) => self.report(&format!("Error adding student: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn update_email(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Update Student Email ---")?;
        let raw_id = answer_or_exit!(self.prompt("Enter student ID: "));
        let id = match parse_student_id(&raw_id) {
            Ok(id) => id,
            Err(err) => return self.reject(err),
        };
        let raw_email = answer_or_exit!(self.prompt("Enter new email: "));
        let email = match required(&raw_email, "New email") {
            Ok(email) => email,
            Err(err) => return self.reject(err),
        };

        let outcome = fetch_student(&self.conn, id)
            .and_then(|previous| Ok((previous, update_student_email(&self.conn, id, &email)?)));

        match outcome {
            Ok((_, 0)) | Ok((None, _)) => self.report(&format!("No student found with ID {id}."))?,
            Ok((Some(previous), _)) => write_success(
                &mut self.output,
                self.color,
                "Email updated successfully!",
                &[
                    format!("Student ID: {id}"),
                    format!("Name: {}", previous.full_name()),
                    format!("Old Email: {}", previous.email),
                    format!("New Email: {email}"),
                ],
            )?,
            Err(err) => self.report(&format!("Error updating student email: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn delete_student(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Delete Student ---")?;
        let raw_id = answer_or_exit!(self.prompt("Enter student ID to delete: "));
        let id = match parse_student_id(&raw_id) {
            Ok(id) => id,
            Err(err) => return self.reject(err),
        };

        let confirm = answer_or_exit!(self.prompt(&format!(
            "Are you sure you want to delete student {id}? (yes/no): "
        )));
        if !confirm.trim().eq_ignore_ascii_case("yes") {
            info!("event=student_delete module=menu status=cancelled id={id}");
            write_notice(&mut self.output, "Deletion cancelled.")?;
            return Ok(Flow::Continue);
        }

        let outcome = fetch_student(&self.conn, id)
            .and_then(|previous| Ok((previous, delete_student(&self.conn, id)?)));

        match outcome {
            Ok((_, 0)) | Ok((None, _)) => self.report(&format!("No student found with ID {id}."))?,
            Ok((Some(previous), _)) => write_success(
                &mut self.output,
                self.color,
                "Student deleted successfully!",
                &[
                    format!("Student ID: {id}"),
                    format!("Name: {}", previous.full_name()),
                    format!("Email: {}", previous.email),
                ],
            )?,
            Err(err) => self.report(&format!("Error deleting student: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    /// Print the prompt and read one line. `None` signals end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush().context("failed to flush console output")?;

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("failed to read operator input")?;
        if read == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail the usual parsers.
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn reject(&mut self, err: InputError) -> Result<Flow> {
        warn!("event=input_rejected module=menu status=error error={err:?}");
        write_failure(&mut self.output, self.color, &format!("Error: {err}"))?;
        Ok(Flow::Continue)
    }

    fn report(&mut self, message: &str) -> Result<()> {
        write_failure(&mut self.output, self.color, message)
    }
}
