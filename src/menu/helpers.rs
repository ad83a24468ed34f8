use std::io::Write;

use anyhow::Result;
use crossterm::style::Stylize;

use super::forms::DATE_FORMAT;
use crate::models::Student;

/// Width of the rules framing the main menu.
const MENU_RULE_WIDTH: usize = 50;
/// Width of the rules framing the student table.
const TABLE_RULE_WIDTH: usize = 80;

const MENU_ENTRIES: [&str; 5] = [
    "1. View all students",
    "2. Add a new student",
    "3. Update student email",
    "4. Delete a student",
    "5. Exit",
];

/// The main menu exactly as the operator sees it, without the leading blank
/// line.
pub fn menu_text() -> String {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    let mut text = format!("{rule}\nSTUDENT MANAGEMENT SYSTEM\n{rule}\n");
    for entry in MENU_ENTRIES {
        text.push_str(entry);
        text.push('\n');
    }
    text.push_str(&rule);
    text.push('\n');
    text
}

pub(crate) fn write_menu(out: &mut impl Write) -> Result<()> {
    write!(out, "\n{}", menu_text())?;
    Ok(())
}

/// Print the full student listing, or a notice when there is nothing to show.
pub(crate) fn write_student_table(out: &mut impl Write, students: &[Student]) -> Result<()> {
    if students.is_empty() {
        writeln!(out, "\nNo students found in the database.\n")?;
        return Ok(());
    }

    let rule = "=".repeat(TABLE_RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "ALL STUDENTS")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<5} {:<15} {:<15} {:<30} {:<15}",
        "ID", "First Name", "Last Name", "Email", "Enrollment Date"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
    for student in students {
        writeln!(
            out,
            "{:<5} {:<15} {:<15} {:<30} {:<15}",
            student.id,
            student.first_name,
            student.last_name,
            student.email,
            student.enrollment_date.format(DATE_FORMAT).to_string()
        )?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out, "Total students: {}\n", students.len())?;
    Ok(())
}

/// Green check-marked headline followed by indented detail lines.
pub(crate) fn write_success(
    out: &mut impl Write,
    color: bool,
    headline: &str,
    details: &[String],
) -> Result<()> {
    let headline = format!("✓ {headline}");
    if color {
        writeln!(out, "\n{}", headline.green())?;
    } else {
        writeln!(out, "\n{headline}")?;
    }
    for line in details {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_failure(out: &mut impl Write, color: bool, message: &str) -> Result<()> {
    let message = format!("✗ {message}");
    if color {
        writeln!(out, "\n{}\n", message.red())?;
    } else {
        writeln!(out, "\n{message}\n")?;
    }
    Ok(())
}

pub(crate) fn write_notice(out: &mut impl Write, message: &str) -> Result<()> {
    writeln!(out, "\n{message}\n")?;
    Ok(())
}
