//! Generic record shape shared by every dashboard domain.
//!
//! # Responsibility
//! - Define the `{ id, fields }` envelope used by record stores.
//! - Define the per-domain field contract used by filters, option sets and
//!   edit sessions.
//!
//! # Invariants
//! - `RecordId` is assigned once at creation and never mutated.
//! - Enumerated fields only hold declared values (enforced by Rust enums).
//! - Numeric fields are unsigned and therefore never negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable string identifier, e.g. `PAT-1712345678901`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Read projection of one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Count(u32),
    Flag(bool),
    /// Enumerated value rendered with its display label.
    Choice(&'static str),
}

impl FieldValue {
    /// Canonical text used for exact-match filters and option sets.
    pub fn as_label(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Count(value) => value.to_string(),
            Self::Flag(value) => (if *value { "Yes" } else { "No" }).to_string(),
            Self::Choice(label) => (*label).to_string(),
        }
    }

    /// Returns `true` for blank text; other kinds are never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(value) if value.trim().is_empty())
    }
}

/// Raw form input delivered by the UI to an edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Text box value. Numeric fields parse it, enum fields match labels.
    Text(String),
    /// Checkbox checked-state.
    Checked(bool),
}

impl FieldInput {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Field-level mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
    InvalidChoice { field: &'static str, value: String },
    /// Input kind does not fit the field (e.g. checkbox into a text field).
    TypeMismatch { field: &'static str },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field `{name}`"),
            Self::InvalidChoice { field, value } => {
                write!(f, "value `{value}` is not allowed for field `{field}`")
            }
            Self::TypeMismatch { field } => write!(f, "input type does not match field `{field}`"),
        }
    }
}

impl Error for FieldError {}

/// Per-domain field contract.
///
/// Implementors map their named attributes onto [`FieldValue`] for reads and
/// accept [`FieldInput`] for draft edits.
pub trait RecordFields: Clone + PartialEq + std::fmt::Debug {
    /// Id prefix, e.g. `PAT`.
    const ID_PREFIX: &'static str;
    /// Fields scanned by free-text search.
    const SEARCH_FIELDS: &'static [&'static str];
    /// Fields that must be non-blank for `create` to succeed.
    const REQUIRED_FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<FieldValue>;

    fn set_field(&mut self, name: &str, input: FieldInput) -> Result<(), FieldError>;

    /// Returns the first required field that is missing or blank.
    fn missing_required(&self) -> Option<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|name| self.field(name).map_or(true, |value| value.is_blank()))
    }
}

/// Stored record envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
}

impl<F: RecordFields> Record<F> {
    pub fn new(id: impl Into<RecordId>, fields: F) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Reads a field, exposing `id` as a pseudo-field.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        if name == "id" {
            return Some(FieldValue::Text(self.id.to_string()));
        }
        self.fields.field(name)
    }
}

/// Parses numeric form input.
///
/// Blank or malformed text becomes 0. Out-of-range integers clamp to
/// `0..=u32::MAX`, however many digits they have.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return 0;
    }
    if negative {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Takes the text payload of an input, rejecting checkbox values.
pub(crate) fn expect_text(field: &'static str, input: FieldInput) -> Result<String, FieldError> {
    match input {
        FieldInput::Text(value) => Ok(value),
        FieldInput::Checked(_) => Err(FieldError::TypeMismatch { field }),
    }
}

/// Takes the checkbox payload of an input, accepting `true`/`false` text too.
pub(crate) fn expect_flag(field: &'static str, input: FieldInput) -> Result<bool, FieldError> {
    match input {
        FieldInput::Checked(value) => Ok(value),
        FieldInput::Text(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => Ok(true),
            "false" | "no" | "off" => Ok(false),
            _ => Err(FieldError::TypeMismatch { field }),
        },
    }
}

pub(crate) fn expect_count(field: &'static str, input: FieldInput) -> Result<u32, FieldError> {
    expect_text(field, input).map(|raw| parse_count(&raw))
}

/// Parses an enumerated label into its typed value.
pub(crate) fn expect_choice<T: Choice>(
    field: &'static str,
    input: FieldInput,
) -> Result<T, FieldError> {
    let raw = expect_text(field, input)?;
    T::from_label(raw.trim()).ok_or(FieldError::InvalidChoice { field, value: raw })
}

/// Enumerated field domain with display labels.
pub trait Choice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.label() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_count, FieldValue};

    #[test]
    fn parse_count_defaults_and_clamps() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count(" 7 "), 7);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count("-4"), 0);
    }

    #[test]
    fn parse_count_clamps_overflow_regardless_of_width() {
        assert_eq!(parse_count("4294967295"), u32::MAX);
        assert_eq!(parse_count("9999999999"), u32::MAX);
        assert_eq!(parse_count("99999999999999999999"), u32::MAX);
        assert_eq!(parse_count("+42"), 42);
        assert_eq!(parse_count("-99999999999999999999"), 0);
        assert_eq!(parse_count("12.5"), 0);
    }

    #[test]
    fn blank_detection_only_applies_to_text() {
        assert!(FieldValue::Text("  ".to_string()).is_blank());
        assert!(!FieldValue::Count(0).is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
    }
}
