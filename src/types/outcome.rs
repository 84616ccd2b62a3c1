use std::fmt;

use super::report::Report;

/// The result of one validation pass.
///
/// A request that carried no submission is distinct from a submission that
/// failed: render/prefetch calls yield [`NotSubmitted`](Outcome::NotSubmitted)
/// without evaluating a single rule.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome {
    /// No submission accompanied the request; nothing was validated.
    NotSubmitted,
    /// A submission was validated and at least one field failed.
    Invalid(Report),
    /// A submission was validated and every field passed.
    Valid(Report),
}

impl Outcome {
    /// Collapse to the classic boolean: `true` only for [`Valid`](Outcome::Valid).
    /// Both a missing submission and a failed one report `false`.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }

    /// The underlying report, when a submission was actually validated.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Outcome::NotSubmitted => None,
            Outcome::Invalid(report) | Outcome::Valid(report) => Some(report),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotSubmitted => write!(f, "not submitted"),
            Outcome::Invalid(report) => write!(f, "invalid ({} errors)", report.errors().len()),
            Outcome::Valid(_) => write!(f, "valid"),
        }
    }
}
