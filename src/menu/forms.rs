use chrono::NaiveDate;

use crate::error::InputError;
use crate::models::NewStudent;

/// Format accepted for enrollment dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// The five entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Add,
    UpdateEmail,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Accept exactly `1` through `5`, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input.trim() {
            "1" => Ok(Self::ViewAll),
            "2" => Ok(Self::Add),
            "3" => Ok(Self::UpdateEmail),
            "4" => Ok(Self::Delete),
            "5" => Ok(Self::Exit),
            other => Err(InputError::InvalidMenuChoice(other.to_string())),
        }
    }
}

pub(crate) fn parse_student_id(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::InvalidId(trimmed.to_string()))
}

pub(crate) fn parse_enrollment_date(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}

/// Trim a free-text field and reject it when nothing is left.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(InputError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Raw answers collected by the "add" prompts.
#[derive(Debug, Default, Clone)]
pub(crate) struct StudentForm {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) enrollment_date: String,
}

impl StudentForm {
    /// Validate every field, reporting the first problem found in prompt
    /// order.
    pub(crate) fn parse_inputs(&self) -> Result<NewStudent, InputError> {
        Ok(NewStudent {
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            email: required(&self.email, "Email")?,
            enrollment_date: parse_enrollment_date(&self.enrollment_date)?,
        })
    }
}
