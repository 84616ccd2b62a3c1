use thiserror::Error;

/// A recorded validation failure: which rule failed and the user-facing
/// message. A report holds at most one of these per field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    pub rule: String,
    pub message: String,
}

/// The value of a field that was never part of the submission was requested.
///
/// This is caller misuse rather than a validation failure, and it is the
/// only hard error a [`Report`](super::Report) surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' was not part of the submission")]
pub struct UnknownFieldError {
    pub field: String,
}
