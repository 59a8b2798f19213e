//! In-memory ordered record store for one dashboard page.
//!
//! # Responsibility
//! - Hold the authoritative record sequence of one domain.
//! - Provide append (create) and whole-record replace by id.
//!
//! # Invariants
//! - Ids are unique within the store.
//! - `create` prepends, so iteration order is newest first.
//! - There is no delete path.
//! - Record text is never written to logs; only ids and field names are.

use crate::model::record::{Record, RecordFields, RecordId};
use crate::store::id::IdGenerator;
use log::{debug, info};

/// Result of a create request.
///
/// Rejection is a soft outcome: the store is untouched and the caller decides
/// whether to surface `field` to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(RecordId),
    Rejected { field: &'static str },
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn created_id(&self) -> Option<&RecordId> {
        match self {
            Self::Created(id) => Some(id),
            Self::Rejected { .. } => None,
        }
    }
}

/// Ordered record collection for one domain.
#[derive(Debug, Clone)]
pub struct RecordStore<F> {
    records: Vec<Record<F>>,
    ids: IdGenerator,
}

impl<F: RecordFields> RecordStore<F> {
    /// Creates a store from seed rows, keeping their order.
    pub fn from_seed(records: Vec<Record<F>>) -> Self {
        debug!(
            "event=store_seed module=store status=ok kind={} count={}",
            F::ID_PREFIX,
            records.len()
        );
        Self {
            records,
            ids: IdGenerator::new(),
        }
    }

    pub fn empty() -> Self {
        Self::from_seed(Vec::new())
    }

    /// Validates required fields, assigns a fresh id and prepends the record.
    pub fn create(&mut self, fields: F) -> CreateOutcome {
        if let Some(field) = fields.missing_required() {
            debug!(
                "event=record_create module=store status=noop kind={} reason=blank_required field={}",
                F::ID_PREFIX,
                field
            );
            return CreateOutcome::Rejected { field };
        }

        let id = self.fresh_id();
        self.records.insert(0, Record::new(id.clone(), fields));
        info!(
            "event=record_create module=store status=ok kind={} id={} count={}",
            F::ID_PREFIX,
            id,
            self.records.len()
        );
        CreateOutcome::Created(id)
    }

    /// Replaces the record with `id` in place.
    ///
    /// Returns `false` without changes when `id` is unknown or `record.id`
    /// does not match `id`.
    pub fn replace(&mut self, id: &RecordId, record: Record<F>) -> bool {
        if &record.id != id {
            debug!(
                "event=record_replace module=store status=noop kind={} id={} reason=id_mismatch",
                F::ID_PREFIX,
                id
            );
            return false;
        }

        match self.records.iter_mut().find(|current| &current.id == id) {
            Some(slot) => {
                *slot = record;
                info!(
                    "event=record_replace module=store status=ok kind={} id={}",
                    F::ID_PREFIX,
                    id
                );
                true
            }
            None => {
                debug!(
                    "event=record_replace module=store status=noop kind={} id={} reason=not_found",
                    F::ID_PREFIX,
                    id
                );
                false
            }
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record<F>> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn records(&self) -> &[Record<F>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn fresh_id(&mut self) -> RecordId {
        loop {
            let candidate = self.ids.next_id(F::ID_PREFIX);
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
