use carehub_core::model::hospital::{Department, Doctor};
use carehub_core::model::patient::{Patient, PatientStatus};
use carehub_core::model::seed;
use carehub_core::{CreateOutcome, Record, RecordId, RecordStore};
use std::collections::HashSet;

fn patient(name: &str, department: &str) -> Patient {
    let mut fields = Patient::blank();
    fields.name = name.to_string();
    fields.department = department.to_string();
    fields
}

#[test]
fn create_prepends_one_record_with_fresh_id() {
    let mut store = RecordStore::from_seed(seed::patients());
    let before: Vec<RecordId> = store.records().iter().map(|record| record.id.clone()).collect();

    let outcome = store.create(patient("Nisha Reddy", "Neurology"));
    let id = outcome.created_id().cloned().unwrap();

    assert_eq!(store.len(), before.len() + 1);
    assert_eq!(store.records()[0].id, id);
    assert_eq!(store.records()[0].fields.name, "Nisha Reddy");
    assert!(!before.contains(&id));
    assert!(id.as_str().starts_with("PAT-"));

    let tail: Vec<RecordId> = store.records()[1..]
        .iter()
        .map(|record| record.id.clone())
        .collect();
    assert_eq!(tail, before);
}

#[test]
fn rapid_creates_never_reuse_ids() {
    let mut store = RecordStore::<Patient>::empty();
    for index in 0..50 {
        assert!(store
            .create(patient(&format!("Patient {index}"), "Cardiology"))
            .is_created());
    }

    let ids: HashSet<&RecordId> = store.records().iter().map(|record| &record.id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn blank_required_fields_leave_store_unchanged() {
    let mut store = RecordStore::from_seed(seed::patients());
    let snapshot = store.records().to_vec();

    assert_eq!(
        store.create(patient("", "Cardiology")),
        CreateOutcome::Rejected { field: "name" }
    );
    assert_eq!(
        store.create(patient("Nisha Reddy", "   ")),
        CreateOutcome::Rejected {
            field: "department"
        }
    );
    assert_eq!(store.records(), snapshot.as_slice());
}

#[test]
fn each_domain_checks_its_own_required_fields() {
    let mut departments = RecordStore::<Department>::empty();
    let mut fields = Department::blank();
    fields.name = "Oncology".to_string();
    assert_eq!(
        departments.create(fields),
        CreateOutcome::Rejected { field: "head" }
    );

    let mut doctors = RecordStore::<Doctor>::empty();
    let mut fields = Doctor::blank();
    fields.name = "Dr. Sara Thomas".to_string();
    fields.department = "Oncology".to_string();
    assert!(doctors.create(fields).is_created());
}

#[test]
fn replace_swaps_only_the_matching_record() {
    let mut store = RecordStore::from_seed(seed::patients());
    let target = store.records()[1].clone();
    let mut updated = target.clone();
    updated.fields.status = PatientStatus::Discharged;

    assert!(store.replace(&target.id, updated.clone()));
    assert_eq!(store.get(&target.id), Some(&updated));
    assert_eq!(store.records()[0], seed::patients()[0]);
}

#[test]
fn replace_with_unknown_or_mismatched_id_is_a_noop() {
    let mut store = RecordStore::from_seed(seed::patients());
    let snapshot = store.records().to_vec();

    let ghost = Record::new("PAT-999", patient("Ghost", "Cardiology"));
    assert!(!store.replace(&RecordId::new("PAT-999"), ghost));

    let first = store.records()[0].clone();
    assert!(!store.replace(&RecordId::new("PAT-002"), first));
    assert_eq!(store.records(), snapshot.as_slice());
}
