//! Single-record draft edit lifecycle.
//!
//! # Responsibility
//! - Hold at most one draft copy of a record per page.
//! - Apply field edits to the draft only.
//! - Commit the draft into a record store as a whole-record replace.
//!
//! # Invariants
//! - The store is untouched until `commit`.
//! - Opening while a draft is open replaces that draft; there is no queue.
//! - `commit` and `cancel` always leave the session closed.

use crate::model::record::{FieldError, FieldInput, Record, RecordFields, RecordId};
use crate::store::record_store::RecordStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}

/// Errors surfaced while editing a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No draft is open.
    NotOpen,
    Field(FieldError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "no edit session is open"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotOpen => None,
            Self::Field(err) => Some(err),
        }
    }
}

impl From<FieldError> for SessionError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

/// Result of a commit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Draft replaced the stored record.
    Committed(RecordId),
    /// Draft id no longer exists in the store; the draft was dropped.
    Missing(RecordId),
    /// Nothing was open.
    NoSession,
}

/// Draft holder for one page.
#[derive(Debug, Clone)]
pub struct EditSession<F> {
    draft: Option<Record<F>>,
}

impl<F: RecordFields> Default for EditSession<F> {
    fn default() -> Self {
        Self { draft: None }
    }
}

impl<F: RecordFields> EditSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.draft.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&Record<F>> {
        self.draft.as_ref()
    }

    /// Opens a draft copy of `record`, replacing any draft already open.
    pub fn open(&mut self, record: &Record<F>) {
        if let Some(previous) = self.draft.replace(record.clone()) {
            debug!(
                "event=edit_open module=session status=ok kind={} id={} replaced={}",
                F::ID_PREFIX,
                record.id,
                previous.id
            );
        } else {
            debug!(
                "event=edit_open module=session status=ok kind={} id={}",
                F::ID_PREFIX,
                record.id
            );
        }
    }

    /// Applies one field edit to the draft.
    pub fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), SessionError> {
        let draft = self.draft.as_mut().ok_or(SessionError::NotOpen)?;
        draft.fields.set_field(name, input)?;
        Ok(())
    }

    /// Writes the draft into `store` and closes the session.
    pub fn commit(&mut self, store: &mut RecordStore<F>) -> CommitOutcome {
        let Some(draft) = self.draft.take() else {
            debug!(
                "event=edit_commit module=session status=noop kind={} reason=closed",
                F::ID_PREFIX
            );
            return CommitOutcome::NoSession;
        };

        let id = draft.id.clone();
        if store.replace(&id, draft) {
            info!(
                "event=edit_commit module=session status=ok kind={} id={}",
                F::ID_PREFIX,
                id
            );
            CommitOutcome::Committed(id)
        } else {
            debug!(
                "event=edit_commit module=session status=noop kind={} id={} reason=not_found",
                F::ID_PREFIX,
                id
            );
            CommitOutcome::Missing(id)
        }
    }

    /// Drops the draft without touching any store.
    pub fn cancel(&mut self) {
        if let Some(draft) = self.draft.take() {
            debug!(
                "event=edit_cancel module=session status=ok kind={} id={}",
                F::ID_PREFIX,
                draft.id
            );
        }
    }
}
