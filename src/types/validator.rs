use super::outcome::Outcome;
use super::rule::RuleEntry;
use super::submission::Submission;

/// An ordered list of validation requirements for one submission.
///
/// Rules are registered per field and evaluated in registration order; the
/// first failing rule of an entry records that field's error and skips the
/// entry's remaining rules.
///
/// # Example
///
/// ```
/// use fieldgate::{Submission, Validator};
///
/// let validator = Validator::new()
///     .add_rule("username", "Username", &["required", "max_length[64]"])
///     .add_rule("password", "Password", &["required", "min_length[8]"]);
///
/// let submission = Submission::new()
///     .field("username", "alice")
///     .field("password", "correct horse battery");
///
/// let outcome = validator.validate(Some(&submission));
/// assert!(outcome.passed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    entries: Vec<RuleEntry>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register rules for a field.
    ///
    /// The field name itself is not validated. Registering the same field
    /// twice keeps both entries: both are evaluated, and if both fail the
    /// later entry's error wins in the error map.
    #[must_use]
    pub fn add_rule(mut self, field: &str, label: &str, rules: &[&str]) -> Self {
        self.entries.push(RuleEntry {
            field: field.to_owned(),
            label: label.to_owned(),
            rules: rules.iter().map(|r| (*r).to_owned()).collect(),
        });
        self
    }

    /// Validate a submission against the registered entries.
    ///
    /// `None` means the request carried no submission (a plain render or
    /// prefetch): no rule is evaluated and the outcome is
    /// [`Outcome::NotSubmitted`]. An empty-but-present submission is
    /// validated normally.
    pub fn validate(&self, submission: Option<&Submission>) -> Outcome {
        match submission {
            Some(submission) => crate::validate::run(&self.entries, submission),
            None => Outcome::NotSubmitted,
        }
    }

    /// The registered entries, in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rule_collects_entries_in_order() {
        let validator = Validator::new()
            .add_rule("username", "Username", &["required", "max_length[64]"])
            .add_rule("password", "Password", &["required"]);

        assert_eq!(validator.entries().len(), 2);
        assert_eq!(validator.entries()[0].field, "username");
        assert_eq!(validator.entries()[0].rules, vec!["required", "max_length[64]"]);
        assert_eq!(validator.entries()[1].field, "password");
    }

    #[test]
    fn duplicate_fields_both_stored() {
        let validator = Validator::new()
            .add_rule("tag", "Tag", &["required"])
            .add_rule("tag", "Tag", &["max_length[5]"]);
        assert_eq!(validator.entries().len(), 2);
    }

    #[test]
    fn no_submission_short_circuits_to_not_submitted() {
        let validator = Validator::new().add_rule("x", "X", &["required"]);
        assert_eq!(validator.validate(None), Outcome::NotSubmitted);
    }
}
