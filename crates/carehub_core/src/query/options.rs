//! Dropdown option sets derived from current store contents.

use crate::model::record::{Record, RecordFields};
use crate::query::filter::{Selection, ALL_OPTION};
use std::collections::BTreeSet;

/// Distinct trimmed values of `field`, sorted, with `All` first.
///
/// Recomputed on every call; stores hold tens of records.
pub fn derive_options<F: RecordFields>(records: &[Record<F>], field: &str) -> Vec<String> {
    collect_options(records.iter(), field)
}

/// Distinct values of `field` restricted to records whose `parent_field`
/// equals the selected parent value.
///
/// `Selection::All` on the parent spans the whole store.
pub fn derive_dependent_options<F: RecordFields>(
    records: &[Record<F>],
    field: &str,
    parent_field: &str,
    parent: &Selection,
) -> Vec<String> {
    match parent.value() {
        None => collect_options(records.iter(), field),
        Some(expected) => collect_options(
            records.iter().filter(|record| {
                record
                    .field(parent_field)
                    .is_some_and(|value| value.as_label().trim() == expected)
            }),
            field,
        ),
    }
}

fn collect_options<'a, F, I>(records: I, field: &str) -> Vec<String>
where
    F: RecordFields + 'a,
    I: Iterator<Item = &'a Record<F>>,
{
    let unique = records
        .filter_map(|record| record.field(field))
        .map(|value| value.as_label().trim().to_string())
        .filter(|label| !label.is_empty() && label != ALL_OPTION)
        .collect::<BTreeSet<_>>();

    let mut options = Vec::with_capacity(unique.len() + 1);
    options.push(ALL_OPTION.to_string());
    options.extend(unique);
    options
}
