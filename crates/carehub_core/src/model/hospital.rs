//! Hospital directory domains: departments, doctors, nurses and staff.
//!
//! # Invariants
//! - Each domain exposes its attributes through [`RecordFields`] using the
//!   field names listed on the struct.
//! - Enumerated attributes serialize with their display labels.

use crate::model::record::{
    expect_choice, expect_count, expect_flag, expect_text, Choice, FieldError, FieldInput,
    FieldValue, RecordFields,
};
use serde::{Deserialize, Serialize};

/// Bed/patient load level of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartmentLoad {
    Low,
    Normal,
    Medium,
    High,
}

impl Choice for DepartmentLoad {
    const ALL: &'static [Self] = &[Self::Low, Self::Normal, Self::Medium, Self::High];

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Department directory entry.
///
/// Fields: `name`, `head`, `doctors`, `total_beds`, `occupied_beds`, `load`,
/// `emergency`, `phone`, `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub head: String,
    pub doctors: u32,
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub load: DepartmentLoad,
    pub emergency: bool,
    pub phone: String,
    pub email: String,
}

impl Department {
    /// Blank create-form state.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            head: String::new(),
            doctors: 0,
            total_beds: 0,
            occupied_beds: 0,
            load: DepartmentLoad::Normal,
            emergency: false,
            phone: String::new(),
            email: String::new(),
        }
    }

    /// Beds still free; never underflows when occupancy exceeds capacity.
    pub fn available_beds(&self) -> u32 {
        self.total_beds.saturating_sub(self.occupied_beds)
    }
}

impl RecordFields for Department {
    const ID_PREFIX: &'static str = "DEP";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "head", "email"];
    // Departments have no parent department; the head plays that role.
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "head"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "name" => FieldValue::Text(self.name.clone()),
            "head" => FieldValue::Text(self.head.clone()),
            "doctors" => FieldValue::Count(self.doctors),
            "total_beds" => FieldValue::Count(self.total_beds),
            "occupied_beds" => FieldValue::Count(self.occupied_beds),
            "load" => FieldValue::Choice(self.load.label()),
            "emergency" => FieldValue::Flag(self.emergency),
            "phone" => FieldValue::Text(self.phone.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError> {
        match name {
            "name" => self.name = expect_text("name", input)?,
            "head" => self.head = expect_text("head", input)?,
            "doctors" => self.doctors = expect_count("doctors", input)?,
            "total_beds" => self.total_beds = expect_count("total_beds", input)?,
            "occupied_beds" => self.occupied_beds = expect_count("occupied_beds", input)?,
            "load" => self.load = expect_choice("load", input)?,
            "emergency" => self.emergency = expect_flag("emergency", input)?,
            "phone" => self.phone = expect_text("phone", input)?,
            "email" => self.email = expect_text("email", input)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// Doctor availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoctorStatus {
    Available,
    #[serde(rename = "In Surgery")]
    InSurgery,
    #[serde(rename = "On Leave")]
    OnLeave,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

impl Choice for DoctorStatus {
    const ALL: &'static [Self] = &[
        Self::Available,
        Self::InSurgery,
        Self::OnLeave,
        Self::OffDuty,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InSurgery => "In Surgery",
            Self::OnLeave => "On Leave",
            Self::OffDuty => "Off Duty",
        }
    }
}

/// Doctor directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub department: String,
    pub specialty: String,
    pub experience_years: u32,
    pub status: DoctorStatus,
    pub phone: String,
    pub email: String,
}

impl Doctor {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            specialty: String::new(),
            experience_years: 0,
            status: DoctorStatus::Available,
            phone: String::new(),
            email: String::new(),
        }
    }
}

impl RecordFields for Doctor {
    const ID_PREFIX: &'static str = "DOC";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "department", "specialty", "email"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "department"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "name" => FieldValue::Text(self.name.clone()),
            "department" => FieldValue::Text(self.department.clone()),
            "specialty" => FieldValue::Text(self.specialty.clone()),
            "experience_years" => FieldValue::Count(self.experience_years),
            "status" => FieldValue::Choice(self.status.label()),
            "phone" => FieldValue::Text(self.phone.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError> {
        match name {
            "name" => self.name = expect_text("name", input)?,
            "department" => self.department = expect_text("department", input)?,
            "specialty" => self.specialty = expect_text("specialty", input)?,
            "experience_years" => self.experience_years = expect_count("experience_years", input)?,
            "status" => self.status = expect_choice("status", input)?,
            "phone" => self.phone = expect_text("phone", input)?,
            "email" => self.email = expect_text("email", input)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// Nurse shift slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
    Night,
}

impl Choice for Shift {
    const ALL: &'static [Self] = &[Self::Morning, Self::Evening, Self::Night];

    fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

/// Duty status shared by nurses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DutyStatus {
    #[serde(rename = "On Duty")]
    OnDuty,
    #[serde(rename = "Off Duty")]
    OffDuty,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl Choice for DutyStatus {
    const ALL: &'static [Self] = &[Self::OnDuty, Self::OffDuty, Self::OnLeave];

    fn label(self) -> &'static str {
        match self {
            Self::OnDuty => "On Duty",
            Self::OffDuty => "Off Duty",
            Self::OnLeave => "On Leave",
        }
    }
}

/// Nurse roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    pub name: String,
    pub department: String,
    pub shift: Shift,
    pub status: DutyStatus,
    pub phone: String,
}

impl Nurse {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            shift: Shift::Morning,
            status: DutyStatus::OnDuty,
            phone: String::new(),
        }
    }
}

impl RecordFields for Nurse {
    const ID_PREFIX: &'static str = "NUR";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "department", "phone"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "department"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "name" => FieldValue::Text(self.name.clone()),
            "department" => FieldValue::Text(self.department.clone()),
            "shift" => FieldValue::Choice(self.shift.label()),
            "status" => FieldValue::Choice(self.status.label()),
            "phone" => FieldValue::Text(self.phone.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError> {
        match name {
            "name" => self.name = expect_text("name", input)?,
            "department" => self.department = expect_text("department", input)?,
            "shift" => self.shift = expect_choice("shift", input)?,
            "status" => self.status = expect_choice("status", input)?,
            "phone" => self.phone = expect_text("phone", input)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

/// Employment status of non-clinical staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

impl Choice for StaffStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::OnLeave, Self::Inactive];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Inactive => "Inactive",
        }
    }
}

/// Staff directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub name: String,
    pub department: String,
    pub role: String,
    pub status: StaffStatus,
    pub phone: String,
    pub email: String,
}

impl Staff {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            role: String::new(),
            status: StaffStatus::Active,
            phone: String::new(),
            email: String::new(),
        }
    }
}

impl RecordFields for Staff {
    const ID_PREFIX: &'static str = "STF";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "department", "role", "email"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "department"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "name" => FieldValue::Text(self.name.clone()),
            "department" => FieldValue::Text(self.department.clone()),
            "role" => FieldValue::Text(self.role.clone()),
            "status" => FieldValue::Choice(self.status.label()),
            "phone" => FieldValue::Text(self.phone.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            _ => return None,
        })
    }

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError> {
        match name {
            "name" => self.name = expect_text("name", input)?,
            "department" => self.department = expect_text("department", input)?,
            "role" => self.role = expect_text("role", input)?,
            "status" => self.status = expect_choice("status", input)?,
            "phone" => self.phone = expect_text("phone", input)?,
            "email" => self.email = expect_text("email", input)?,
            other => return Err(FieldError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}
