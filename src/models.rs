//! Domain models that mirror the `students` table. They stay plain data holders
//! so the menu can focus on presentation and `db` on SQL.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `students` table.
pub struct Student {
    /// Store-assigned primary key. Never reused and never edited.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// The only field the menu lets the operator change after creation.
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl Student {
    /// `First Last`, used by the confirmation messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated payload for an insert. The store fills in the id.
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    /// Attach the id assigned by the store, producing the full record.
    pub fn with_id(&self, id: i64) -> Student {
        Student {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            enrollment_date: self.enrollment_date,
        }
    }
}
