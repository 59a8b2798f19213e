//! Doctor activity log domain.

use crate::model::record::{
    expect_choice, expect_text, Choice, FieldError, FieldInput, FieldValue, RecordFields,
};
use serde::{Deserialize, Serialize};

/// Category of a logged clinical action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Consultation,
    Surgery,
    Prescription,
    #[serde(rename = "Lab Review")]
    LabReview,
    Discharge,
}

impl Choice for ActivityKind {
    const ALL: &'static [Self] = &[
        Self::Consultation,
        Self::Surgery,
        Self::Prescription,
        Self::LabReview,
        Self::Discharge,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Consultation => "Consultation",
            Self::Surgery => "Surgery",
            Self::Prescription => "Prescription",
            Self::LabReview => "Lab Review",
            Self::Discharge => "Discharge",
        }
    }
}

/// One row of the doctor activity log.
///
/// The log has no `name` column; `doctor` is the identifying text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub doctor: String,
    pub department: String,
    pub action: String,
    pub patient: String,
    pub kind: ActivityKind,
    pub date: String,
    pub time: String,
}

impl ActivityEntry {
    pub fn blank() -> Self {
        Self {
            doctor: String::new(),
            department: String::new(),
            action: String::new(),
            patient: String::new(),
            kind: ActivityKind::Consultation,
            date: String::new(),
            time: String::new(),
        }
    }
}

impl RecordFields for ActivityEntry {
    const ID_PREFIX: &'static str = "ACT";
    const SEARCH_FIELDS: &'static [&'static str] = &["doctor", "action", "patient"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["doctor", "department"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "doctor" => FieldValue::Text(self.doctor.clone()),
            "department" => FieldValue::Text(self.department.clone()),
            "action" => FieldValue::Text(self.action.clone()),
            "patient" => FieldValue::Text(self.patient.clone()),
            "kind" => FieldValue::Choice(self.kind.label()),
            "date" => FieldValue::Text(self.date.clone()),
            "time" => FieldValue::Text(self.time.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError> {
        match name {
            "doctor" => self.doctor = expect_text("doctor", input)?,
            "department" => self.department = expect_text("department", input)?,
            "action" => self.action = expect_text("action", input)?,
            "patient" => self.patient = expect_text("patient", input)?,
            "kind" => self.kind = expect_choice("kind", input)?,
            "date" => self.date = expect_text("date", input)?,
            "time" => self.time = expect_text("time", input)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}
