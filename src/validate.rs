use std::collections::HashMap;

use log::warn;

use crate::parse::{parse_rule, RuleSpec};
use crate::types::{FieldError, Outcome, Report, RuleEntry, Submission, UnrecognizedRule};

/// A rule name resolved against the known rule set.
enum Check {
    Required,
    MaxLength(usize),
    MinLength(usize),
    Unknown,
}

fn resolve(spec: &RuleSpec) -> Check {
    match spec.name.as_str() {
        "required" => Check::Required,
        "max_length" => Check::MaxLength(param_len(&spec.param)),
        "min_length" => Check::MinLength(param_len(&spec.param)),
        _ => Check::Unknown,
    }
}

/// Length parameters degrade to 0 when non-numeric, like the source's
/// `intval`.
fn param_len(param: &str) -> usize {
    param.trim().parse().unwrap_or(0)
}

/// Emptiness as `required` sees it. The source treated the empty string and
/// the literal `"0"` as empty (PHP falsy equivalence); whitespace-only
/// values count as present.
fn is_empty_value(value: &str) -> bool {
    value.is_empty() || value == "0"
}

pub(crate) fn run(entries: &[RuleEntry], submission: &Submission) -> Outcome {
    let mut values = submission.to_values();
    let mut errors: HashMap<String, FieldError> = HashMap::new();
    let mut unrecognized: Vec<UnrecognizedRule> = Vec::new();

    for entry in entries {
        process_entry(entry, &mut values, &mut errors, &mut unrecognized);
    }

    let report = Report::new(values, errors, unrecognized);
    if report.is_valid() {
        Outcome::Valid(report)
    } else {
        Outcome::Invalid(report)
    }
}

/// Evaluate one entry's rules left to right, stopping at the first failure.
/// Fields absent from the submission evaluate as the empty string; a
/// failure replaces any error an earlier entry recorded for the same field.
fn process_entry(
    entry: &RuleEntry,
    values: &mut HashMap<String, String>,
    errors: &mut HashMap<String, FieldError>,
    unrecognized: &mut Vec<UnrecognizedRule>,
) {
    for token in &entry.rules {
        let spec = parse_rule(token);
        let stored = values.get(&entry.field).cloned();
        let value = stored.as_deref().unwrap_or("");

        let failure = match resolve(&spec) {
            Check::Required if is_empty_value(value) => {
                Some(format!("{} Required", entry.label))
            }
            Check::MaxLength(max) if value.len() > max => {
                Some(format!("{} exceed maximum length", entry.label))
            }
            Check::MinLength(min) if value.len() < min => {
                Some(format!("{} is less than minimum length", entry.label))
            }
            Check::Unknown => {
                warn!("unrecognized rule '{}' on field '{}'", token, entry.field);
                unrecognized.push(UnrecognizedRule {
                    field: entry.field.clone(),
                    token: token.clone(),
                });
                None
            }
            _ => None,
        };

        if let Some(message) = failure {
            errors.insert(
                entry.field.clone(),
                FieldError {
                    rule: spec.name,
                    message,
                },
            );
            return;
        }

        // The write-back seam for filter rules: a passing filter would
        // store its rewritten value here. The current rule set is
        // check-only, so submitted values pass through unchanged.
        if let Some(value) = stored {
            values.insert(entry.field.clone(), value);
        }
    }
}
