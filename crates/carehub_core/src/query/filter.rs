//! Search text + discrete filter matching over record sequences.
//!
//! # Invariants
//! - Discrete selections compare exactly (case-sensitive) against the
//!   trimmed field label; `Selection::All` always matches.
//! - Search text matches case-insensitively as a substring of any searchable
//!   field; blank search matches everything.
//! - Filtering is stable: output keeps input relative order.

use crate::model::record::{Record, RecordFields};

/// Sentinel label used by dropdowns for "no filter applied".
///
/// A field whose value is literally `All` cannot be selected on: the label
/// parses back to [`Selection::All`], and option lists leave it out.
pub const ALL_OPTION: &str = "All";

/// Message rendered when a filter leaves nothing to show.
pub const NO_RESULTS_MESSAGE: &str = "No matching records found.";

/// One dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Value(String),
}

impl Selection {
    /// Parses a dropdown label, treating `All` and blank as no filter.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == ALL_OPTION {
            Self::All
        } else {
            Self::Value(trimmed.to_string())
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Value(value) => Some(value.as_str()),
        }
    }
}

/// Combined search + discrete filter predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    search: String,
    selections: Vec<(String, Selection)>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RecordFilter::set_search`].
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.set_search(text);
        self
    }

    /// Builder form of [`RecordFilter::select`].
    pub fn with_selection(mut self, field: impl Into<String>, selection: Selection) -> Self {
        self.select(field, selection);
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Sets or replaces the selection for `field`.
    pub fn select(&mut self, field: impl Into<String>, selection: Selection) {
        let field = field.into();
        match self.selections.iter_mut().find(|(name, _)| *name == field) {
            Some((_, current)) => *current = selection,
            None => self.selections.push((field, selection)),
        }
    }

    pub fn selection(&self, field: &str) -> &Selection {
        self.selections
            .iter()
            .find(|(name, _)| name == field)
            .map_or(&Selection::All, |(_, selection)| selection)
    }

    /// Resets search text and every selection.
    pub fn clear(&mut self) {
        self.search.clear();
        self.selections.clear();
    }

    /// Returns whether `record` passes every active criterion.
    pub fn matches<F: RecordFields>(&self, record: &Record<F>) -> bool {
        self.matches_selections(record) && self.matches_search(record)
    }

    /// Applies the predicate, preserving input order.
    pub fn apply<'a, F: RecordFields>(&self, records: &'a [Record<F>]) -> FilteredView<'a, F> {
        FilteredView {
            rows: records.iter().filter(|record| self.matches(record)).collect(),
            total: records.len(),
        }
    }

    fn matches_selections<F: RecordFields>(&self, record: &Record<F>) -> bool {
        self.selections.iter().all(|(field, selection)| match selection.value() {
            None => true,
            Some(expected) => record
                .field(field)
                .is_some_and(|value| value.as_label().trim() == expected),
        })
    }

    fn matches_search<F: RecordFields>(&self, record: &Record<F>) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        F::SEARCH_FIELDS.iter().any(|field| {
            record
                .field(field)
                .is_some_and(|value| value.as_label().to_lowercase().contains(&needle))
        })
    }
}

/// Filtered, order-preserving view over a store's records.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a, F> {
    rows: Vec<&'a Record<F>>,
    total: usize,
}

impl<'a, F: RecordFields> FilteredView<'a, F> {
    pub fn rows(&self) -> &[&'a Record<F>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of records before filtering.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Explicit "no results" affordance for an empty view.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.rows.is_empty() {
            Some(NO_RESULTS_MESSAGE)
        } else {
            None
        }
    }

    /// Clones the visible rows out of the store.
    pub fn to_records(&self) -> Vec<Record<F>> {
        self.rows.iter().map(|record| (*record).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordFilter, Selection};
    use crate::model::seed;

    #[test]
    fn selection_from_label_treats_all_and_blank_as_unfiltered() {
        assert_eq!(Selection::from_label("All"), Selection::All);
        assert_eq!(Selection::from_label("  "), Selection::All);
        assert_eq!(
            Selection::from_label("Waiting"),
            Selection::Value("Waiting".to_string())
        );
    }

    #[test]
    fn discrete_filters_are_case_sensitive() {
        let records = seed::patients();
        let filter = RecordFilter::new().with_selection("status", Selection::from_label("waiting"));
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn select_replaces_existing_field_selection() {
        let mut filter = RecordFilter::new();
        filter.select("status", Selection::from_label("Waiting"));
        filter.select("status", Selection::All);
        assert_eq!(filter.selection("status"), &Selection::All);
        assert_eq!(filter.selection("department"), &Selection::All);
    }

    #[test]
    fn search_ignores_non_searchable_fields() {
        let records = seed::patients();
        // `date` is not a searchable patient field.
        let filter = RecordFilter::new().with_search("2024-03-12");
        let view = filter.apply(&records);
        assert!(view.is_empty());
        assert_eq!(view.total(), records.len());
        assert!(view.empty_message().is_some());
    }
}
