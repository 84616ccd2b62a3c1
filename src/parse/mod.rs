mod grammar;
mod spec;

pub use spec::RuleSpec;

/// Split a rule token such as `max_length[10]` into its name and parameter.
///
/// Parsing is total: every input yields a [`RuleSpec`]. A token without a
/// closing `]` degrades gracefully, taking the remainder of the string as
/// the parameter. Whether the name denotes a known rule is the evaluator's
/// concern, not the parser's.
#[must_use]
pub fn parse_rule(token: &str) -> RuleSpec {
    use winnow::Parser;
    grammar::rule_token.parse(token).unwrap_or_else(|_| RuleSpec {
        name: token.to_owned(),
        param: String::new(),
    })
}
