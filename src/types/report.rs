use std::collections::HashMap;
use std::fmt;

use super::error::{FieldError, UnknownFieldError};

/// A rule token whose name matched no known rule, kept for diagnostics.
///
/// Unknown names are ignored during evaluation, so a typo like
/// `max_lenght[10]` silently weakens a form. The report records them so
/// callers and tests can assert none slipped in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnrecognizedRule {
    pub field: String,
    pub token: String,
}

/// The accumulated result of a validation pass: the stored field values
/// (rewritten by filter rules, when any run), the per-field errors, and any
/// unrecognized rule tokens encountered along the way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    values: HashMap<String, String>,
    errors: HashMap<String, FieldError>,
    unrecognized: Vec<UnrecognizedRule>,
}

impl Report {
    pub(crate) fn new(
        values: HashMap<String, String>,
        errors: HashMap<String, FieldError>,
        unrecognized: Vec<UnrecognizedRule>,
    ) -> Self {
        Self {
            values,
            errors,
            unrecognized,
        }
    }

    /// `true` when no field recorded an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for a field, or the empty string if it passed.
    #[must_use]
    pub fn error(&self, field: &str) -> &str {
        self.errors.get(field).map_or("", |e| e.message.as_str())
    }

    /// All recorded errors, keyed by field name. At most one per field.
    #[must_use]
    pub fn errors(&self) -> &HashMap<String, FieldError> {
        &self.errors
    }

    /// The stored value of a field, after any filter rules ran.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownFieldError`] if the field was never part of the
    /// submission. That is a caller defect, not a validation failure, so it
    /// is not silently defaulted.
    pub fn value(&self, field: &str) -> Result<&str, UnknownFieldError> {
        self.values
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| UnknownFieldError {
                field: field.to_owned(),
            })
    }

    /// All stored field values.
    #[must_use]
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Rule tokens whose names matched no known rule, in encounter order.
    #[must_use]
    pub fn unrecognized_rules(&self) -> &[UnrecognizedRule] {
        &self.unrecognized
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Report({} values, {} errors)",
            self.values.len(),
            self.errors.len(),
        )
    }
}
