//! Per-page view controller over one record store.
//!
//! # Responsibility
//! - Own the page's record store, filter state and edit session.
//! - Expose the create / filter / edit use-cases a directory page needs.
//!
//! # Invariants
//! - The store is the single source of truth; views and option sets are
//!   recomputed from it on every call.
//! - At most one edit session is open per page.

use crate::model::record::{FieldInput, RecordFields, RecordId};
use crate::query::filter::{FilteredView, RecordFilter, Selection};
use crate::query::options::{derive_dependent_options, derive_options};
use crate::session::edit_session::{CommitOutcome, EditSession, SessionError};
use crate::store::record_store::{CreateOutcome, RecordStore};

/// Directory page controller for one domain.
#[derive(Debug, Clone)]
pub struct DashboardPage<F: RecordFields> {
    store: RecordStore<F>,
    filter: RecordFilter,
    session: EditSession<F>,
}

impl<F: RecordFields> DashboardPage<F> {
    /// Creates a page over an injected store.
    pub fn new(store: RecordStore<F>) -> Self {
        Self {
            store,
            filter: RecordFilter::new(),
            session: EditSession::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<F> {
        &self.store
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub fn edit_session(&self) -> &EditSession<F> {
        &self.session
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.set_search(text);
    }

    /// Applies a dropdown label (`All` clears the field's filter).
    pub fn select(&mut self, field: &str, label: &str) {
        self.filter.select(field, Selection::from_label(label));
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// Records visible under the current search and selections.
    pub fn visible(&self) -> FilteredView<'_, F> {
        self.filter.apply(self.store.records())
    }

    /// Dropdown options for `field` across the whole store.
    pub fn options(&self, field: &str) -> Vec<String> {
        derive_options(self.store.records(), field)
    }

    /// Dropdown options for `field` narrowed by the page's current
    /// selection on `parent_field`.
    pub fn dependent_options(&self, field: &str, parent_field: &str) -> Vec<String> {
        derive_dependent_options(
            self.store.records(),
            field,
            parent_field,
            self.filter.selection(parent_field),
        )
    }

    /// Submits the create form.
    ///
    /// Blank required fields are rejected without any user-facing message;
    /// the outcome names the field for callers that want to show one.
    pub fn create(&mut self, fields: F) -> CreateOutcome {
        self.store.create(fields)
    }

    /// Opens the edit form for `id`; returns `false` when the id is unknown.
    pub fn open_edit(&mut self, id: &RecordId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.session.open(record);
                true
            }
            None => false,
        }
    }

    pub fn edit_field(&mut self, name: &str, input: FieldInput) -> Result<(), SessionError> {
        self.session.set_field(name, input)
    }

    pub fn commit_edit(&mut self) -> CommitOutcome {
        self.session.commit(&mut self.store)
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }
}
