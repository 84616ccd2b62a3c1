/// One registered validation requirement: a field name, the user-facing
/// label woven into error messages, and the ordered rule tokens to apply.
///
/// Entries are appended via [`Validator::add_rule()`](super::Validator::add_rule)
/// and evaluated in registration order. Registering the same field twice
/// keeps both entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub field: String,
    pub label: String,
    pub rules: Vec<String>,
}
