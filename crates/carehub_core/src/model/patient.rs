//! Patient queue domain.

use crate::model::record::{
    expect_choice, expect_text, Choice, FieldError, FieldInput, FieldValue, RecordFields,
};
use serde::{Deserialize, Serialize};

/// Where a patient currently is in the care flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Treating,
    Waiting,
    Discharged,
}

impl Choice for PatientStatus {
    const ALL: &'static [Self] = &[Self::Treating, Self::Waiting, Self::Discharged];

    fn label(self) -> &'static str {
        match self {
            Self::Treating => "Treating",
            Self::Waiting => "Waiting",
            Self::Discharged => "Discharged",
        }
    }
}

/// Patient queue entry.
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM`; both are kept as entered and
/// matched verbatim by the date filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub department: String,
    pub doctor: String,
    pub status: PatientStatus,
    pub date: String,
    pub time: String,
}

impl Patient {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            doctor: String::new(),
            status: PatientStatus::Waiting,
            date: String::new(),
            time: String::new(),
        }
    }
}

impl RecordFields for Patient {
    const ID_PREFIX: &'static str = "PAT";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "department", "doctor"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "department"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "name" => FieldValue::Text(self.name.clone()),
            "department" => FieldValue::Text(self.department.clone()),
            "doctor" => FieldValue::Text(self.doctor.clone()),
            "status" => FieldValue::Choice(self.status.label()),
            "date" => FieldValue::Text(self.date.clone()),
            "time" => FieldValue::Text(self.time.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError> {
        match name {
            "name" => self.name = expect_text("name", input)?,
            "department" => self.department = expect_text("department", input)?,
            "doctor" => self.doctor = expect_text("doctor", input)?,
            "status" => self.status = expect_choice("status", input)?,
            "date" => self.date = expect_text("date", input)?,
            "time" => self.time = expect_text("time", input)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}
