use carehub_core::model::hospital::{Department, DepartmentLoad, Nurse};
use carehub_core::model::patient::{Patient, PatientStatus};
use carehub_core::model::record::FieldError;
use carehub_core::model::seed;
use carehub_core::{
    CommitOutcome, EditSession, FieldInput, RecordId, RecordStore, SessionError, SessionState,
};

#[test]
fn open_then_cancel_leaves_store_unchanged() {
    let mut store = RecordStore::from_seed(seed::patients());
    let snapshot = store.records().to_vec();
    let mut session = EditSession::new();

    session.open(&store.records()[0]);
    session
        .set_field("name", FieldInput::text("Someone Else"))
        .unwrap();
    session.cancel();

    assert_eq!(session.state(), SessionState::Closed);
    assert_eq!(session.commit(&mut store), CommitOutcome::NoSession);
    assert_eq!(store.records(), snapshot.as_slice());
}

#[test]
fn commit_changes_only_the_edited_field() {
    let mut store = RecordStore::from_seed(seed::patients());
    let original = store.records()[1].clone();
    let mut session = EditSession::new();

    session.open(&original);
    session
        .set_field("status", FieldInput::text("Discharged"))
        .unwrap();
    assert_eq!(
        session.commit(&mut store),
        CommitOutcome::Committed(original.id.clone())
    );

    let mut expected = original.clone();
    expected.fields.status = PatientStatus::Discharged;
    assert_eq!(store.get(&original.id), Some(&expected));
    assert!(!session.is_open());
}

#[test]
fn draft_edits_are_invisible_until_commit() {
    let mut store = RecordStore::from_seed(seed::departments());
    let mut session = EditSession::<Department>::new();
    let id = store.records()[0].id.clone();

    session.open(&store.records()[0]);
    session.set_field("occupied_beds", FieldInput::text("12")).unwrap();
    session.set_field("load", FieldInput::text("Low")).unwrap();
    session.set_field("emergency", FieldInput::Checked(false)).unwrap();
    assert_ne!(store.get(&id).unwrap().fields.occupied_beds, 12);

    session.commit(&mut store);
    let committed = &store.get(&id).unwrap().fields;
    assert_eq!(committed.occupied_beds, 12);
    assert_eq!(committed.load, DepartmentLoad::Low);
    assert!(!committed.emergency);
}

#[test]
fn numeric_inputs_that_do_not_parse_store_zero() {
    let mut store = RecordStore::from_seed(seed::departments());
    let mut session = EditSession::new();
    let id = store.records()[0].id.clone();

    session.open(&store.records()[0]);
    session.set_field("total_beds", FieldInput::text("lots")).unwrap();
    session.commit(&mut store);
    assert_eq!(store.get(&id).unwrap().fields.total_beds, 0);
}

#[test]
fn opening_again_replaces_the_draft() {
    let mut store = RecordStore::from_seed(seed::nurses());
    let mut session = EditSession::<Nurse>::new();
    let first = store.records()[0].clone();
    let second = store.records()[1].clone();

    session.open(&first);
    session.set_field("name", FieldInput::text("Lost Edit")).unwrap();
    session.open(&second);
    assert_eq!(session.draft().map(|draft| &draft.id), Some(&second.id));

    session.commit(&mut store);
    assert_eq!(store.get(&first.id), Some(&first));
}

#[test]
fn invalid_inputs_are_rejected_without_touching_the_draft() {
    let store = RecordStore::from_seed(seed::patients());
    let mut session = EditSession::<Patient>::new();
    session.open(&store.records()[0]);

    let err = session
        .set_field("status", FieldInput::text("Sleeping"))
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Field(FieldError::InvalidChoice { .. })
    ));

    let err = session
        .set_field("blood_group", FieldInput::text("O+"))
        .unwrap_err();
    assert!(matches!(err, SessionError::Field(FieldError::UnknownField(_))));

    assert_eq!(session.draft(), Some(&store.records()[0]));
}

#[test]
fn commit_for_a_record_missing_from_the_store_reports_missing() {
    let seeded = RecordStore::from_seed(seed::patients());
    let mut other = RecordStore::<Patient>::empty();
    let mut session = EditSession::new();

    session.open(&seeded.records()[0]);
    assert_eq!(
        session.commit(&mut other),
        CommitOutcome::Missing(RecordId::new("PAT-001"))
    );
    assert!(other.is_empty());
}
