//! Static sample data every dashboard page starts from.
//!
//! Seed ids use a zero-padded sequence (`PAT-001`) so they can never collide
//! with time-based ids issued at runtime.

use crate::model::activity::{ActivityEntry, ActivityKind};
use crate::model::hospital::{
    Department, DepartmentLoad, Doctor, DoctorStatus, DutyStatus, Nurse, Shift, Staff, StaffStatus,
};
use crate::model::patient::{Patient, PatientStatus};
use crate::model::record::{Record, RecordFields};

fn seeded<F: RecordFields>(rows: Vec<F>) -> Vec<Record<F>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, fields)| Record::new(format!("{}-{:03}", F::ID_PREFIX, index + 1), fields))
        .collect()
}

pub fn departments() -> Vec<Record<Department>> {
    let row = |name: &str, head: &str, doctors, total, occupied, load, emergency| Department {
        name: name.to_string(),
        head: head.to_string(),
        doctors,
        total_beds: total,
        occupied_beds: occupied,
        load,
        emergency,
        phone: "+91 22 4000 1000".to_string(),
        email: format!("{}@carehub.example", name.to_lowercase()),
    };
    seeded(vec![
        row("Cardiology", "Dr. Rajesh Kumar", 12, 60, 48, DepartmentLoad::High, true),
        row("Neurology", "Dr. Meera Iyer", 8, 40, 22, DepartmentLoad::Medium, false),
        row("Orthopedics", "Dr. Vikram Singh", 10, 50, 20, DepartmentLoad::Normal, false),
        row("Pediatrics", "Dr. Anjali Rao", 9, 45, 12, DepartmentLoad::Low, true),
        row("Emergency", "Dr. Sanjay Gupta", 15, 30, 27, DepartmentLoad::High, true),
    ])
}

pub fn doctors() -> Vec<Record<Doctor>> {
    let row = |name: &str, department: &str, specialty: &str, years, status| Doctor {
        name: name.to_string(),
        department: department.to_string(),
        specialty: specialty.to_string(),
        experience_years: years,
        status,
        phone: "+91 98200 00000".to_string(),
        email: format!(
            "{}@carehub.example",
            name.trim_start_matches("Dr. ").replace(' ', ".").to_lowercase()
        ),
    };
    seeded(vec![
        row(
            "Dr. Rajesh Kumar",
            "Cardiology",
            "Interventional Cardiology",
            18,
            DoctorStatus::Available,
        ),
        row("Dr. Neha Kapoor", "Cardiology", "Electrophysiology", 9, DoctorStatus::InSurgery),
        row("Dr. Meera Iyer", "Neurology", "Stroke Medicine", 14, DoctorStatus::Available),
        row("Dr. Arjun Nair", "Neurology", "Epilepsy", 6, DoctorStatus::OnLeave),
        row("Dr. Vikram Singh", "Orthopedics", "Joint Replacement", 21, DoctorStatus::Available),
        row("Dr. Anjali Rao", "Pediatrics", "Neonatology", 11, DoctorStatus::OffDuty),
    ])
}

pub fn nurses() -> Vec<Record<Nurse>> {
    let row = |name: &str, department: &str, shift, status| Nurse {
        name: name.to_string(),
        department: department.to_string(),
        shift,
        status,
        phone: "+91 98330 00000".to_string(),
    };
    seeded(vec![
        row("Sunita Devi", "Cardiology", Shift::Morning, DutyStatus::OnDuty),
        row("Kavya Menon", "Neurology", Shift::Night, DutyStatus::OnDuty),
        row("Ritu Sharma", "Pediatrics", Shift::Evening, DutyStatus::OffDuty),
        row("Pooja Verma", "Emergency", Shift::Night, DutyStatus::OnLeave),
    ])
}

pub fn patients() -> Vec<Record<Patient>> {
    let row = |name: &str, department: &str, doctor: &str, status, date: &str, time: &str| Patient {
        name: name.to_string(),
        department: department.to_string(),
        doctor: doctor.to_string(),
        status,
        date: date.to_string(),
        time: time.to_string(),
    };
    seeded(vec![
        row(
            "Aarav Patel",
            "Cardiology",
            "Dr. Rajesh Kumar",
            PatientStatus::Treating,
            "2024-03-12",
            "09:30",
        ),
        row(
            "Priya Sharma",
            "Neurology",
            "Dr. Meera Iyer",
            PatientStatus::Waiting,
            "2024-03-12",
            "10:15",
        ),
        row(
            "Rohan Das",
            "Orthopedics",
            "Dr. Vikram Singh",
            PatientStatus::Discharged,
            "2024-03-11",
            "14:00",
        ),
        row(
            "Ishita Bose",
            "Pediatrics",
            "Dr. Anjali Rao",
            PatientStatus::Waiting,
            "2024-03-13",
            "11:45",
        ),
        row(
            "Kabir Mehta",
            "Cardiology",
            "Dr. Neha Kapoor",
            PatientStatus::Treating,
            "2024-03-13",
            "16:20",
        ),
    ])
}

pub fn staff() -> Vec<Record<Staff>> {
    let row = |name: &str, department: &str, role: &str, status| Staff {
        name: name.to_string(),
        department: department.to_string(),
        role: role.to_string(),
        status,
        phone: "+91 98190 00000".to_string(),
        email: format!("{}@carehub.example", name.replace(' ', ".").to_lowercase()),
    };
    seeded(vec![
        row("Amit Joshi", "Administration", "Billing Officer", StaffStatus::Active),
        row("Farah Khan", "Pharmacy", "Pharmacist", StaffStatus::Active),
        row("Deepak Yadav", "Radiology", "Technician", StaffStatus::OnLeave),
        row("Lakshmi Pillai", "Administration", "Receptionist", StaffStatus::Inactive),
    ])
}

pub fn activity_log() -> Vec<Record<ActivityEntry>> {
    let row = |doctor: &str,
               department: &str,
               action: &str,
               patient: &str,
               kind,
               date: &str,
               time: &str| ActivityEntry {
        doctor: doctor.to_string(),
        department: department.to_string(),
        action: action.to_string(),
        patient: patient.to_string(),
        kind,
        date: date.to_string(),
        time: time.to_string(),
    };
    seeded(vec![
        row(
            "Dr. Rajesh Kumar",
            "Cardiology",
            "Angioplasty follow-up",
            "Aarav Patel",
            ActivityKind::Consultation,
            "2024-03-12",
            "09:45",
        ),
        row(
            "Dr. Neha Kapoor",
            "Cardiology",
            "Pacemaker implant",
            "Kabir Mehta",
            ActivityKind::Surgery,
            "2024-03-13",
            "16:30",
        ),
        row(
            "Dr. Meera Iyer",
            "Neurology",
            "MRI results reviewed",
            "Priya Sharma",
            ActivityKind::LabReview,
            "2024-03-12",
            "11:00",
        ),
        row(
            "Dr. Vikram Singh",
            "Orthopedics",
            "Discharge summary signed",
            "Rohan Das",
            ActivityKind::Discharge,
            "2024-03-11",
            "15:10",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::{departments, doctors, patients};
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_prefixed_and_unique() {
        let rows = patients();
        let ids: HashSet<_> = rows.iter().map(|record| record.id.clone()).collect();
        assert_eq!(ids.len(), rows.len());
        assert_eq!(rows[0].id.as_str(), "PAT-001");
        assert!(doctors().iter().all(|record| record.id.as_str().starts_with("DOC-")));
    }

    #[test]
    fn seed_departments_keep_occupancy_within_capacity() {
        for record in departments() {
            assert!(record.fields.occupied_beds <= record.fields.total_beds);
        }
    }
}
